//! Candidate selection policy.
//!
//! When several packages satisfy the same requirement, the solver asks the
//! policy which of the candidate literals to try, and in which order. The
//! [`DefaultPolicy`] answers with Composer's preference rules:
//!
//! 1. Group the literals by package name, installed packages first
//! 2. Within a name, keep the newest version only
//! 3. Keep installed packages and the candidates of the most important
//!    repository
//! 4. If the root package declared an alias for the name, keep only root
//!    aliases
//! 5. Order the survivors across names so that original packages come before
//!    the packages replacing them
//!
//! # Example
//!
//! ```
//! use pox_policy::{DefaultPolicy, InstalledMap, Package, PolicyInterface, Pool};
//!
//! let pool = Pool::builder()
//!     .repository("packagist")
//!     .package(Package::new("vendor/a", "1.0.0"))
//!     .package(Package::new("vendor/a", "2.0.0"))
//!     .build()
//!     .unwrap();
//!
//! let policy = DefaultPolicy::new();
//! let selected = policy
//!     .select_preferred_packages(&pool, &InstalledMap::new(), &[1, 2])
//!     .unwrap();
//! assert_eq!(selected, vec![2]);
//! ```

mod default_policy;
mod sort;


use pox_version::Operator;

use crate::error::Result;
use crate::installed::InstalledMap;
use crate::pool::{Literal, Pool, PoolEntry};

pub use default_policy::DefaultPolicy;

/// Decisions the solver delegates to a policy
pub trait PolicyInterface {
    /// Whether `a.version <operator> b.version`
    fn version_compare(&self, a: &PoolEntry, b: &PoolEntry, operator: Operator) -> bool;

    /// All other candidates providing the name of `package`
    fn find_update_packages<'p>(
        &self,
        pool: &'p Pool,
        installed: &InstalledMap,
        package: &PoolEntry,
    ) -> Vec<&'p PoolEntry>;

    /// Priority of the repository `package` comes from; greater is preferred
    fn get_priority(&self, pool: &Pool, package: &PoolEntry) -> Result<i32>;

    /// The preferred subset of `literals`, most preferred first
    fn select_preferred_packages(
        &self,
        pool: &Pool,
        installed: &InstalledMap,
        literals: &[Literal],
    ) -> Result<Vec<Literal>>;
}
