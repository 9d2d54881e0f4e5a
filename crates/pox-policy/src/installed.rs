use std::collections::HashSet;

use crate::error::{PolicyError, Result};
use crate::pool::{Literal, PackageId, Pool};

/// Set of package ids currently installed
///
/// Read-only from the policy's point of view; the solver builds it once per
/// resolution run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledMap {
    ids: HashSet<PackageId>,
}

impl InstalledMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: PackageId) -> bool {
        self.ids.insert(id)
    }

    pub fn contains(&self, id: PackageId) -> bool {
        self.ids.contains(&id)
    }

    /// Whether the package a literal refers to is installed, ignoring its sign
    pub fn contains_literal(&self, literal: Literal) -> bool {
        self.contains(Pool::literal_to_id(literal))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = PackageId> + '_ {
        self.ids.iter().copied()
    }

    /// Check that every installed id refers to a package of `pool`
    pub fn validate(&self, pool: &Pool) -> Result<()> {
        match self.ids.iter().find(|&&id| pool.entry(id).is_none()) {
            Some(&id) => Err(PolicyError::UnknownPackage { id }),
            None => Ok(()),
        }
    }
}

impl FromIterator<PackageId> for InstalledMap {
    fn from_iter<I: IntoIterator<Item = PackageId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl Extend<PackageId> for InstalledMap {
    fn extend<I: IntoIterator<Item = PackageId>>(&mut self, iter: I) {
        self.ids.extend(iter);
    }
}
