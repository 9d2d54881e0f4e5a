use pox_version::Stability;

use crate::pool::PackageId;

/// Represents a version alias of another package
///
/// An alias presents the aliased package under a different version. It has
/// its own pool id but shares the name, repository and replace links of the
/// package it aliases. Aliases come from two places:
///
/// 1. Branch aliases declared by the package itself, e.g. `dev-main` aliased
///    as `1.0.x-dev`
/// 2. Root aliases declared by the root package requirements using the `as`
///    syntax, e.g. `"vendor/package": "dev-main as 1.0.0"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasPackage {
    alias_of: PackageId,
    version: String,
    pretty_version: String,
    is_root_package_alias: bool,
}

impl AliasPackage {
    pub fn new(alias_of: PackageId, version: impl Into<String>, is_root_package_alias: bool) -> Self {
        let version = version.into();
        Self {
            alias_of,
            pretty_version: version.clone(),
            version,
            is_root_package_alias,
        }
    }

    /// Id of the aliased package
    pub fn alias_of(&self) -> PackageId {
        self.alias_of
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn pretty_version(&self) -> &str {
        &self.pretty_version
    }

    pub fn stability(&self) -> Stability {
        Stability::from_version(&self.version)
    }

    /// Whether the alias was declared by the root package requirements
    pub fn is_root_package_alias(&self) -> bool {
        self.is_root_package_alias
    }
}
