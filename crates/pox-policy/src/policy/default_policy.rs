use std::cmp::Ordering;

use indexmap::IndexMap;
use pox_version::{Comparator, Operator};

use super::sort::insertion_sort_by;
use super::PolicyInterface;
use crate::error::{PolicyError, Result};
use crate::installed::InstalledMap;
use crate::pool::{Literal, Pool, PoolEntry};

/// Composer's default candidate selection policy.
///
/// Stateless: every call is a pure function of the pool, the installed map
/// and the literals passed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPolicy;

/// A literal resolved against the pool, with everything the comparator needs
#[derive(Debug, Clone, Copy)]
struct Candidate<'p> {
    literal: Literal,
    entry: &'p PoolEntry,
    installed: bool,
    priority: i32,
}

impl<'p> Candidate<'p> {
    fn resolve(pool: &'p Pool, installed: &InstalledMap, literal: Literal) -> Result<Self> {
        Self::from_entry(pool, installed, literal, pool.literal_to_package(literal)?)
    }

    fn from_entry(
        pool: &Pool,
        installed: &InstalledMap,
        literal: Literal,
        entry: &'p PoolEntry,
    ) -> Result<Self> {
        Ok(Candidate {
            literal,
            entry,
            installed: installed.contains(entry.id()),
            priority: pool.get_priority(entry.repository())?,
        })
    }
}

#[derive(Default)]
struct Bucket {
    installed: Vec<Literal>,
    others: Vec<Literal>,
}

impl DefaultPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Select the single most preferred literal, if any
    pub fn select_best(
        &self,
        pool: &Pool,
        installed: &InstalledMap,
        literals: &[Literal],
    ) -> Result<Option<Literal>> {
        Ok(self
            .select_preferred_packages(pool, installed, literals)?
            .into_iter()
            .next())
    }

    /// Group literals by package name, installed packages first.
    ///
    /// Names are listed in order of first appearance. Within a name, the
    /// installed literals precede the others and both keep their input order.
    pub fn group_literals_by_name_prefer_installed(
        &self,
        pool: &Pool,
        installed: &InstalledMap,
        literals: &[Literal],
    ) -> Result<IndexMap<String, Vec<Literal>>> {
        let mut buckets: IndexMap<String, Bucket> = IndexMap::new();

        for &literal in literals {
            let name = pool.literal_to_package(literal)?.name();
            let bucket = buckets.entry(name.to_lowercase()).or_default();
            if installed.contains_literal(literal) {
                bucket.installed.push(literal);
            } else {
                bucket.others.push(literal);
            }
        }

        Ok(buckets
            .into_iter()
            .map(|(name, bucket)| {
                let mut group = bucket.installed;
                group.extend(bucket.others);
                (name, group)
            })
            .collect())
    }

    /// Compare two candidates by preference; `Less` means `a` is preferred.
    ///
    /// Within one repository an alias beats the package it aliases, an
    /// original beats its replacer (unless `ignore_replace`), and the lower id
    /// wins otherwise. Across repositories an installed package wins, then the
    /// greater repository priority. Equal priorities rank `b` first.
    pub fn compare_by_priority_prefer_installed(
        &self,
        pool: &Pool,
        installed: &InstalledMap,
        a: &PoolEntry,
        b: &PoolEntry,
        ignore_replace: bool,
    ) -> Result<Ordering> {
        let a = Candidate::from_entry(pool, installed, a.id(), a)?;
        let b = Candidate::from_entry(pool, installed, b.id(), b)?;
        Ok(self.compare_candidates(&a, &b, ignore_replace))
    }

    fn compare_candidates(&self, a: &Candidate<'_>, b: &Candidate<'_>, ignore_replace: bool) -> Ordering {
        let (pa, pb) = (a.entry, b.entry);

        if pa.same_repository(pb) {
            // prefer aliases to the original package
            if pa.name() == pb.name() {
                match (pa.is_alias(), pb.is_alias()) {
                    (true, false) => return Ordering::Less,
                    (false, true) => return Ordering::Greater,
                    _ => {}
                }
            }

            if !ignore_replace {
                // return original, not replaced
                if self.replaces(pa, pb) {
                    return Ordering::Greater;
                }
                if self.replaces(pb, pa) {
                    return Ordering::Less;
                }
            }

            // priority equal, sort by package id to make reproducible
            return pa.id().cmp(&pb.id());
        }

        if a.installed {
            return Ordering::Less;
        }
        if b.installed {
            return Ordering::Greater;
        }

        if a.priority > b.priority {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    /// Checks if `source` replaces a package with the same name as `target`.
    ///
    /// Replace constraints are ignored. Only use this for prioritisation,
    /// never for constraint verification.
    pub fn replaces(&self, source: &PoolEntry, target: &PoolEntry) -> bool {
        source.replaces().iter().any(|link| link.targets(target.name()))
    }

    /// Sort literals by preference, most preferred first
    pub fn sort_by_priority(
        &self,
        pool: &Pool,
        installed: &InstalledMap,
        literals: &[Literal],
        ignore_replace: bool,
    ) -> Result<Vec<Literal>> {
        let mut candidates = literals
            .iter()
            .map(|&literal| Candidate::resolve(pool, installed, literal))
            .collect::<Result<Vec<_>>>()?;

        insertion_sort_by(&mut candidates, |a, b| self.compare_candidates(a, b, ignore_replace));

        Ok(candidates.into_iter().map(|c| c.literal).collect())
    }

    /// Keep every literal tied for the highest version
    pub fn prune_to_best_version(&self, pool: &Pool, literals: &[Literal]) -> Result<Vec<Literal>> {
        let (&first, rest) = literals.split_first().ok_or(PolicyError::EmptyCandidateGroup {
            stage: "prune_to_best_version",
        })?;

        let mut best_package = pool.literal_to_package(first)?;
        let mut best_literals = vec![first];

        for &literal in rest {
            let package = pool.literal_to_package(literal)?;

            if self.version_compare(package, best_package, Operator::GreaterThan) {
                best_package = package;
                best_literals = vec![literal];
            } else if self.version_compare(package, best_package, Operator::Equal) {
                best_literals.push(literal);
            }
        }

        Ok(best_literals)
    }

    /// Keep installed literals and the leading run of equal priority.
    ///
    /// Assumes installed packages come first, followed by the remaining
    /// candidates sorted by priority. Everything after the first literal whose
    /// priority differs from the first non-installed one is dropped.
    pub fn prune_to_highest_priority_or_installed(
        &self,
        pool: &Pool,
        installed: &InstalledMap,
        literals: &[Literal],
    ) -> Result<Vec<Literal>> {
        if literals.is_empty() {
            return Err(PolicyError::EmptyCandidateGroup {
                stage: "prune_to_highest_priority_or_installed",
            });
        }

        let mut selected = Vec::with_capacity(literals.len());
        let mut baseline = None;

        for &literal in literals {
            let package = pool.literal_to_package(literal)?;

            if installed.contains(package.id()) {
                selected.push(literal);
                continue;
            }

            let priority = self.get_priority(pool, package)?;
            if priority != *baseline.get_or_insert(priority) {
                break;
            }

            selected.push(literal);
        }

        Ok(selected)
    }

    /// Keep only root package aliases when there is at least one.
    ///
    /// Aliases declared by the root package requirements take precedence over
    /// branch aliases and the packages they alias. Without a root alias the
    /// literals pass through unchanged.
    pub fn prune_remote_aliases(&self, pool: &Pool, literals: &[Literal]) -> Result<Vec<Literal>> {
        if literals.is_empty() {
            return Err(PolicyError::EmptyCandidateGroup {
                stage: "prune_remote_aliases",
            });
        }

        let mut root_aliases = Vec::new();
        for &literal in literals {
            if pool.literal_to_package(literal)?.is_root_package_alias() {
                root_aliases.push(literal);
            }
        }

        if root_aliases.is_empty() {
            Ok(literals.to_vec())
        } else {
            Ok(root_aliases)
        }
    }
}

impl PolicyInterface for DefaultPolicy {
    fn version_compare(&self, a: &PoolEntry, b: &PoolEntry, operator: Operator) -> bool {
        Comparator::compare(a.version(), operator, b.version())
    }

    fn find_update_packages<'p>(
        &self,
        pool: &'p Pool,
        _installed: &InstalledMap,
        package: &PoolEntry,
    ) -> Vec<&'p PoolEntry> {
        pool.what_provides(package.name())
            .into_iter()
            .filter(|candidate| candidate.id() != package.id())
            .collect()
    }

    fn get_priority(&self, pool: &Pool, package: &PoolEntry) -> Result<i32> {
        pool.get_priority(package.repository())
    }

    fn select_preferred_packages(
        &self,
        pool: &Pool,
        installed: &InstalledMap,
        literals: &[Literal],
    ) -> Result<Vec<Literal>> {
        installed.validate(pool)?;

        let groups = self.group_literals_by_name_prefer_installed(pool, installed, literals)?;
        log::debug!(
            "Selecting preferred packages from {} literals in {} groups",
            literals.len(),
            groups.len()
        );

        let mut selected = Vec::with_capacity(literals.len());
        for (name, group) in &groups {
            let sorted = self.sort_by_priority(pool, installed, group, true)?;
            let pruned = self.prune_to_best_version(pool, &sorted)?;
            let pruned = self.prune_to_highest_priority_or_installed(pool, installed, &pruned)?;
            let pruned = self.prune_remote_aliases(pool, &pruned)?;
            log::trace!("Preferred candidates for {}: {:?} (from {:?})", name, pruned, group);
            selected.extend(pruned);
        }

        // now sort the result across all packages to respect replaces across packages
        let selected = self.sort_by_priority(pool, installed, &selected, false)?;
        log::debug!("Selected {} preferred literals: {:?}", selected.len(), selected);

        Ok(selected)
    }
}
