//! Candidate selection policy for Composer-compatible dependency resolution.
//!
//! The SAT solver produces, for every decision, a set of candidate literals
//! that would all satisfy the same requirement. This crate decides which of
//! them are preferred and in which order, taking version recency, installed
//! state, repository priority, aliases and replace relationships into
//! account.

pub mod config;
pub mod error;
pub mod installed;
pub mod package;
pub mod policy;
pub mod pool;

pub use config::PoolConfig;
pub use error::{PolicyError, Result};
pub use installed::InstalledMap;
pub use package::{AliasPackage, Link, Package, Repository, Stability};
pub use policy::{DefaultPolicy, PolicyInterface};
pub use pool::{Literal, PackageId, Pool, PoolBuilder, PoolEntry};
pub use pox_version::Operator;
