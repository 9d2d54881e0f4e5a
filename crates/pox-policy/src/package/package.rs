use std::fmt;

use pox_version::Stability;

use super::Link;

/// A concrete package version as published by a repository
///
/// Pool bookkeeping (id, owning repository) is attached when the package is
/// added to a [`Pool`](crate::pool::Pool).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Package name (lowercase)
    pub name: String,

    /// Name as published
    pub pretty_name: String,

    /// Normalized version
    pub version: String,

    /// Version as published
    pub pretty_version: String,

    /// Packages this one replaces, in declaration order
    pub replaces: Vec<Link>,
}

impl Package {
    /// Create a new package; the version doubles as its pretty version
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        let pretty_name = name.into();
        let version = version.into();
        Self {
            name: pretty_name.to_lowercase(),
            pretty_name,
            pretty_version: version.clone(),
            version,
            replaces: Vec::new(),
        }
    }

    /// Add a replace link to `target`
    pub fn with_replace(mut self, target: &str, constraint: &str) -> Self {
        self.add_replace(target, constraint);
        self
    }

    pub fn add_replace(&mut self, target: &str, constraint: &str) {
        self.replaces.push(Link::new(&self.name, target, constraint));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn stability(&self) -> Stability {
        Stability::from_version(&self.version)
    }

    /// Unique identifier of the form `name-version`
    pub fn unique_name(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pretty_name, self.pretty_version)
    }
}
