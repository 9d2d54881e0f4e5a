use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{PolicyError, Result};
use crate::package::{AliasPackage, Link, Package, Repository, Stability};

/// Pool-wide identifier of a package. Ids start at 1 and follow insertion order.
pub type PackageId = i32;

/// A literal represents a package decision in the SAT solver.
/// Positive literals mean "install package", negative means "don't install".
pub type Literal = i32;

/// Represents an entry in the pool - either a regular package or an alias
#[derive(Debug, Clone)]
pub enum PoolEntry {
    /// A regular package
    Package {
        id: PackageId,
        repository: Arc<Repository>,
        package: Arc<Package>,
    },
    /// An alias of another package in the pool
    Alias {
        id: PackageId,
        repository: Arc<Repository>,
        target: Arc<Package>,
        alias: AliasPackage,
    },
}

impl PoolEntry {
    pub fn id(&self) -> PackageId {
        match self {
            PoolEntry::Package { id, .. } | PoolEntry::Alias { id, .. } => *id,
        }
    }

    /// Returns the package name (aliases share the name of their target)
    pub fn name(&self) -> &str {
        self.package().name()
    }

    /// Returns the normalized version
    pub fn version(&self) -> &str {
        match self {
            PoolEntry::Package { package, .. } => package.version(),
            PoolEntry::Alias { alias, .. } => alias.version(),
        }
    }

    pub fn pretty_version(&self) -> &str {
        match self {
            PoolEntry::Package { package, .. } => &package.pretty_version,
            PoolEntry::Alias { alias, .. } => alias.pretty_version(),
        }
    }

    pub fn stability(&self) -> Stability {
        Stability::from_version(self.version())
    }

    pub fn repository(&self) -> &Arc<Repository> {
        match self {
            PoolEntry::Package { repository, .. } | PoolEntry::Alias { repository, .. } => {
                repository
            }
        }
    }

    /// Replace links, shared with the target for aliases
    pub fn replaces(&self) -> &[Link] {
        &self.package().replaces
    }

    /// The package data behind this entry; the aliased package for aliases
    pub fn package(&self) -> &Arc<Package> {
        match self {
            PoolEntry::Package { package, .. } => package,
            PoolEntry::Alias { target, .. } => target,
        }
    }

    /// Returns true if this is an alias package
    pub fn is_alias(&self) -> bool {
        matches!(self, PoolEntry::Alias { .. })
    }

    /// Returns true if this is an alias declared by the root package
    pub fn is_root_package_alias(&self) -> bool {
        matches!(self, PoolEntry::Alias { alias, .. } if alias.is_root_package_alias())
    }

    /// Returns the alias details if this is an alias
    pub fn as_alias(&self) -> Option<&AliasPackage> {
        match self {
            PoolEntry::Alias { alias, .. } => Some(alias),
            PoolEntry::Package { .. } => None,
        }
    }

    /// Whether both entries come from the same repository
    pub fn same_repository(&self, other: &PoolEntry) -> bool {
        Arc::ptr_eq(self.repository(), other.repository())
    }
}

impl fmt::Display for PoolEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolEntry::Package { package, .. } => write!(f, "{}", package),
            PoolEntry::Alias { target, alias, .. } => write!(
                f,
                "{} {} (alias of {})",
                target.pretty_name,
                alias.pretty_version(),
                target.pretty_version
            ),
        }
    }
}

#[derive(Debug)]
struct RegisteredRepository {
    repository: Arc<Repository>,
    rank: i32,
}

/// Pool of all candidate packages for dependency resolution.
///
/// The pool indexes packages by ID (1-based) and by name. Each package version
/// gets a unique ID that's used as literal in SAT clauses.
///
/// Repositories are ranked in registration order (rank 0 is consulted
/// first). The priority reported for a repository is the negated rank, so an
/// earlier repository has a numerically greater priority.
#[derive(Debug, Default)]
pub struct Pool {
    /// All entries, entry `id` lives at index `id - 1`
    entries: Vec<PoolEntry>,

    /// Package IDs indexed by name (lowercase)
    packages_by_name: HashMap<String, Vec<PackageId>>,

    /// Package IDs indexed by the names they replace (lowercase)
    replacers: HashMap<String, Vec<PackageId>>,

    repositories: Vec<RegisteredRepository>,
}

impl Pool {
    /// Create a new empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pool builder for fluent construction
    pub fn builder() -> PoolBuilder {
        PoolBuilder::new()
    }

    /// Register a repository; its rank is its registration position
    pub fn add_repository(&mut self, name: &str) -> Result<Arc<Repository>> {
        if self.repository(name).is_some() {
            return Err(PolicyError::DuplicateRepository {
                name: name.to_string(),
            });
        }

        let repository = Arc::new(Repository::new(name));
        let rank = self.repositories.len() as i32;
        self.repositories.push(RegisteredRepository {
            repository: Arc::clone(&repository),
            rank,
        });
        Ok(repository)
    }

    /// Look up a registered repository by name
    pub fn repository(&self, name: &str) -> Option<&Arc<Repository>> {
        self.repositories
            .iter()
            .find(|r| r.repository.name() == name)
            .map(|r| &r.repository)
    }

    /// Registered repositories in registration order
    pub fn repositories(&self) -> impl Iterator<Item = &Arc<Repository>> + '_ {
        self.repositories.iter().map(|r| &r.repository)
    }

    /// Override the rank of a repository (lower = consulted first)
    ///
    /// `i32::MIN` is rejected since its priority is not representable.
    pub fn set_rank(&mut self, name: &str, rank: i32) -> Result<()> {
        if rank == i32::MIN {
            return Err(PolicyError::Config(format!(
                "rank of repository {} is out of range: {}",
                name, rank
            )));
        }

        let registered = self
            .repositories
            .iter_mut()
            .find(|r| r.repository.name() == name)
            .ok_or_else(|| PolicyError::UnknownRepository {
                name: name.to_string(),
            })?;
        registered.rank = rank;
        Ok(())
    }

    /// Rank of a repository (lower = consulted first)
    pub fn rank(&self, repository: &Repository) -> Result<i32> {
        self.repositories
            .iter()
            .find(|r| std::ptr::eq(Arc::as_ptr(&r.repository), repository))
            .map(|r| r.rank)
            .ok_or_else(|| PolicyError::UnknownRepository {
                name: repository.name().to_string(),
            })
    }

    /// Priority of a repository; greater means preferred
    pub fn get_priority(&self, repository: &Repository) -> Result<i32> {
        let rank = self.rank(repository)?;
        rank.checked_neg().ok_or_else(|| {
            PolicyError::Config(format!(
                "rank of repository {} is out of range: {}",
                repository.name(),
                rank
            ))
        })
    }

    /// Add a package published by `repository`, returning its ID
    pub fn add_package(&mut self, repository: &Arc<Repository>, package: Package) -> Result<PackageId> {
        self.rank(repository)?;

        let id = self.next_id();
        let package = Arc::new(package);
        self.index(id, &package);
        self.entries.push(PoolEntry::Package {
            id,
            repository: Arc::clone(repository),
            package,
        });
        Ok(id)
    }

    /// Add an alias of the package `base_id` under `version`, returning its ID
    ///
    /// The alias belongs to the repository of its base package.
    pub fn add_alias(&mut self, base_id: PackageId, version: &str, is_root_package_alias: bool) -> Result<PackageId> {
        let (repository, target) = match self.package_by_id(base_id)? {
            PoolEntry::Package {
                repository,
                package,
                ..
            } => (Arc::clone(repository), Arc::clone(package)),
            PoolEntry::Alias { .. } => return Err(PolicyError::AliasOfAlias { id: base_id }),
        };

        let id = self.next_id();
        self.index(id, &target);
        self.entries.push(PoolEntry::Alias {
            id,
            repository,
            target,
            alias: AliasPackage::new(base_id, version, is_root_package_alias),
        });
        Ok(id)
    }

    fn next_id(&self) -> PackageId {
        self.entries.len() as PackageId + 1
    }

    fn index(&mut self, id: PackageId, package: &Package) {
        self.packages_by_name
            .entry(package.name.clone())
            .or_default()
            .push(id);

        for link in &package.replaces {
            let ids = self.replacers.entry(link.target.clone()).or_default();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }

    /// Get an entry by its ID
    pub fn entry(&self, id: PackageId) -> Option<&PoolEntry> {
        if id > 0 {
            self.entries.get((id - 1) as usize)
        } else {
            None
        }
    }

    /// Get an entry by its ID, failing if the pool does not know it
    pub fn package_by_id(&self, id: PackageId) -> Result<&PoolEntry> {
        self.entry(id).ok_or(PolicyError::UnknownPackage { id })
    }

    /// Convert a literal to its package ID (absolute value)
    pub fn literal_to_id(literal: Literal) -> PackageId {
        literal.saturating_abs()
    }

    /// Resolve the package a literal refers to, ignoring its sign
    pub fn literal_to_package(&self, literal: Literal) -> Result<&PoolEntry> {
        self.entry(Self::literal_to_id(literal))
            .ok_or(PolicyError::UnknownLiteral { literal })
    }

    /// Get all entries with a given name, in insertion order
    pub fn packages_by_name(&self, name: &str) -> Vec<&PoolEntry> {
        self.lookup(&self.packages_by_name, name)
    }

    /// Find all entries that provide a given name
    ///
    /// Entries carrying the name come first, followed by entries that
    /// replace it. Each list is in insertion order.
    pub fn what_provides(&self, name: &str) -> Vec<&PoolEntry> {
        let mut result = self.packages_by_name(name);
        for entry in self.lookup(&self.replacers, name) {
            if !result.iter().any(|e| e.id() == entry.id()) {
                result.push(entry);
            }
        }
        result
    }

    fn lookup(&self, index: &HashMap<String, Vec<PackageId>>, name: &str) -> Vec<&PoolEntry> {
        index
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().filter_map(|&id| self.entry(id)).collect())
            .unwrap_or_default()
    }

    /// Iterate over all entries in ID order
    pub fn iter(&self) -> impl Iterator<Item = &PoolEntry> + '_ {
        self.entries.iter()
    }

    /// Get the total number of entries, aliases included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the pool is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for constructing a Pool repository by repository
///
/// Errors are deferred to [`PoolBuilder::build`].
#[derive(Debug, Default)]
pub struct PoolBuilder {
    pool: Pool,
    current: Option<Arc<Repository>>,
    last_package: Option<PackageId>,
    error: Option<PolicyError>,
}

impl PoolBuilder {
    /// Create a new pool builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a repository; subsequent packages are added to it
    pub fn repository(mut self, name: &str) -> Self {
        if self.error.is_none() {
            match self.pool.add_repository(name) {
                Ok(repository) => self.current = Some(repository),
                Err(e) => self.error = Some(e),
            }
        }
        self
    }

    /// Override the rank of the current repository
    pub fn rank(mut self, rank: i32) -> Self {
        if self.error.is_none() {
            let result = match &self.current {
                Some(repository) => {
                    let name = repository.name().to_string();
                    self.pool.set_rank(&name, rank)
                }
                None => Err(no_repository()),
            };
            self.error = result.err();
        }
        self
    }

    /// Add a package to the current repository
    pub fn package(mut self, package: Package) -> Self {
        if self.error.is_none() {
            let result = match &self.current {
                Some(repository) => self.pool.add_package(repository, package),
                None => Err(no_repository()),
            };
            match result {
                Ok(id) => self.last_package = Some(id),
                Err(e) => self.error = Some(e),
            }
        }
        self
    }

    /// Add several packages to the current repository
    pub fn packages(self, packages: impl IntoIterator<Item = Package>) -> Self {
        packages.into_iter().fold(self, |builder, p| builder.package(p))
    }

    /// Alias the most recently added package
    pub fn alias(mut self, version: &str, is_root_package_alias: bool) -> Self {
        if self.error.is_none() {
            let result = match self.last_package {
                Some(base) => self.pool.add_alias(base, version, is_root_package_alias),
                None => Err(PolicyError::Config("alias added before any package".to_string())),
            };
            if let Err(e) = result {
                self.error = Some(e);
            }
        }
        self
    }

    /// Build the pool
    pub fn build(self) -> Result<Pool> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.pool),
        }
    }
}

fn no_repository() -> PolicyError {
    PolicyError::Config("package added before any repository".to_string())
}
