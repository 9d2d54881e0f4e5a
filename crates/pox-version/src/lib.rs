//! Version ordering compatible with Composer/semver
//!
//! This crate provides the total order over package versions used by the
//! resolver: comparison under an operator, dev-branch handling and stability
//! detection. Constraint parsing lives elsewhere; only single comparisons are
//! supported here.

mod comparator;
mod operator;
mod ordering;
mod stability;

pub use comparator::Comparator;
pub use operator::{InvalidOperatorError, Operator};
pub use ordering::compare_versions;
pub use stability::Stability;
