// Package model for candidate selection
//
// Packages, their aliases and replace links, and the repositories that
// publish them.

mod alias;
mod link;
mod package;
mod repository;

pub use alias::AliasPackage;
pub use link::Link;
pub use package::Package;
pub use pox_version::Stability;
pub use repository::Repository;
