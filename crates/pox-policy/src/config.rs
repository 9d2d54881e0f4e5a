//! Pool configuration
//!
//! Describes repositories, their packages and the installed set as JSON, so
//! a resolution scenario can be loaded from a file:
//!
//! ```json
//! {
//!     "repositories": [
//!         { "name": "installed", "packages": [
//!             { "name": "a/a", "version": "1.0.0", "installed": true }
//!         ] },
//!         { "name": "packagist", "packages": [
//!             { "name": "a/a", "version": "2.0.0",
//!               "replace": { "b/b": "self.version" },
//!               "aliases": [ { "version": "2.1.x-dev", "root": true } ] }
//!         ] }
//!     ]
//! }
//! ```
//!
//! Repositories are ranked in the order they are listed unless they carry
//! an explicit `rank` (lower is consulted first). Package ids are
//! assigned in listing order, each alias directly after its package.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PolicyError, Result};
use crate::installed::InstalledMap;
use crate::package::Package;
use crate::pool::Pool;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoolConfig {
    #[serde(default)]
    pub repositories: Vec<RepositoryConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    pub name: String,

    /// Rank override, lower is preferred; defaults to the position in the list
    #[serde(default, alias = "priority", skip_serializing_if = "Option::is_none")]
    pub rank: Option<i32>,

    #[serde(default)]
    pub packages: Vec<PackageConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageConfig {
    pub name: String,
    pub version: String,

    /// Replaced package name -> constraint
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub replace: IndexMap<String, String>,

    #[serde(default)]
    pub installed: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<AliasConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasConfig {
    pub version: String,

    /// Declared by the root package requirements
    #[serde(default)]
    pub root: bool,
}

impl PoolConfig {
    /// Parse a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        log::debug!("Loading pool configuration from {}", path.display());
        Self::from_json(&content)
    }

    /// Build the pool and the installed map described by this configuration
    pub fn build(&self) -> Result<(Pool, InstalledMap)> {
        let mut pool = Pool::new();
        let mut installed = InstalledMap::new();

        for repo_config in &self.repositories {
            if repo_config.name.trim().is_empty() {
                return Err(PolicyError::Config("repository name must not be empty".to_string()));
            }

            let repository = pool.add_repository(&repo_config.name)?;
            if let Some(rank) = repo_config.rank {
                pool.set_rank(&repo_config.name, rank)?;
            }

            for package_config in &repo_config.packages {
                let id = pool.add_package(&repository, package_config.to_package()?)?;
                if package_config.installed {
                    installed.insert(id);
                }

                for alias in &package_config.aliases {
                    if alias.version.trim().is_empty() {
                        return Err(PolicyError::Config(format!(
                            "alias of {} {} has an empty version",
                            package_config.name, package_config.version
                        )));
                    }
                    pool.add_alias(id, &alias.version, alias.root)?;
                }
            }
        }

        log::debug!(
            "Built pool with {} repositories, {} packages, {} installed",
            self.repositories.len(),
            pool.len(),
            installed.len()
        );

        Ok((pool, installed))
    }
}

impl PackageConfig {
    fn to_package(&self) -> Result<Package> {
        if self.name.trim().is_empty() {
            return Err(PolicyError::Config("package name must not be empty".to_string()));
        }
        if self.version.trim().is_empty() {
            return Err(PolicyError::Config(format!("package {} has an empty version", self.name)));
        }

        let mut package = Package::new(&self.name, &self.version);
        for (target, constraint) in &self.replace {
            package.add_replace(target, constraint);
        }
        Ok(package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let config = PoolConfig::from_json(r#"{"repositories": [{"name": "packagist"}]}"#).unwrap();
        assert_eq!(config.repositories.len(), 1);
        assert!(config.repositories[0].packages.is_empty());
        assert_eq!(config.repositories[0].rank, None);
    }

    #[test]
    fn test_build_assigns_ids_in_order() {
        let config = PoolConfig::from_json(
            r#"{
                "repositories": [
                    { "name": "installed", "packages": [
                        { "name": "A/A", "version": "1.0.0", "installed": true }
                    ] },
                    { "name": "packagist", "packages": [
                        { "name": "a/a", "version": "dev-main",
                          "aliases": [ { "version": "2.1.9999999.9999999-dev", "root": true } ] },
                        { "name": "b/b", "version": "1.0.0",
                          "replace": { "a/a": "self.version", "c/c": "*" } }
                    ] }
                ]
            }"#,
        )
        .unwrap();

        let (pool, installed) = config.build().unwrap();

        assert_eq!(pool.len(), 4);
        assert!(installed.contains(1));
        assert_eq!(installed.len(), 1);
        assert_eq!(pool.entry(1).unwrap().name(), "a/a");
        assert!(pool.entry(3).unwrap().is_root_package_alias());
        assert_eq!(pool.entry(3).unwrap().as_alias().unwrap().alias_of(), 2);

        let targets: Vec<&str> = pool.entry(4).unwrap().replaces().iter().map(|l| l.target.as_str()).collect();
        assert_eq!(targets, vec!["a/a", "c/c"]);

        let installed_repo = pool.repository("installed").unwrap();
        let packagist = pool.repository("packagist").unwrap();
        assert!(pool.get_priority(installed_repo).unwrap() > pool.get_priority(packagist).unwrap());
    }

    #[test]
    fn test_rank_override() {
        let config = PoolConfig::from_json(
            r#"{"repositories": [{"name": "one"}, {"name": "two", "rank": -1}]}"#,
        )
        .unwrap();
        let (pool, _) = config.build().unwrap();

        let one = pool.repository("one").unwrap();
        let two = pool.repository("two").unwrap();
        assert!(pool.get_priority(two).unwrap() > pool.get_priority(one).unwrap());

        // legacy key
        let legacy = PoolConfig::from_json(r#"{"repositories": [{"name": "one", "priority": 3}]}"#).unwrap();
        assert_eq!(legacy.repositories[0].rank, Some(3));
    }

    #[test]
    fn test_rank_out_of_range() {
        let config = PoolConfig::from_json(
            r#"{"repositories": [
                {"name": "one", "packages": [{"name": "a", "version": "1.0"}]},
                {"name": "two", "rank": -2147483648, "packages": [{"name": "a", "version": "1.0"}]}
            ]}"#,
        )
        .unwrap();

        assert!(matches!(config.build(), Err(PolicyError::Config(_))));
    }

    #[test]
    fn test_rejects_invalid_configs() {
        let duplicate = PoolConfig::from_json(r#"{"repositories": [{"name": "x"}, {"name": "x"}]}"#).unwrap();
        assert!(matches!(duplicate.build(), Err(PolicyError::DuplicateRepository { .. })));

        let empty_version = PoolConfig::from_json(
            r#"{"repositories": [{"name": "x", "packages": [{"name": "a", "version": ""}]}]}"#,
        )
        .unwrap();
        assert!(matches!(empty_version.build(), Err(PolicyError::Config(_))));

        assert!(matches!(
            PoolConfig::from_json(r#"{"repositories": [{"name": "x", "url": "https://example.org"}]}"#),
            Err(PolicyError::ConfigParse(_))
        ));
    }
}
