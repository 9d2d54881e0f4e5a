//! Stability detection

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

/// Stability levels for versions, least stable first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Stability {
    Dev,
    Alpha,
    Beta,
    RC,
    #[default]
    Stable,
}

lazy_static! {
    // Trailing pre-release modifier, optionally followed by build metadata
    static ref MODIFIER_RE: Regex = Regex::new(
        r"(?i)[._-]?(?:(stable|beta|b|rc|alpha|a|patch|pl|p)((?:[.-]?\d+)*)?)?([.-]?dev)?(?:\+.*)?$"
    )
    .unwrap();
}

impl Stability {
    /// Detect the stability of a (normalized) version string
    pub fn from_version(version: &str) -> Self {
        let version = version.split('#').next().unwrap_or(version).to_lowercase();

        if version.starts_with("dev-") || version.ends_with("-dev") {
            return Stability::Dev;
        }

        let Some(caps) = MODIFIER_RE.captures(&version) else {
            return Stability::Stable;
        };

        if caps.get(3).is_some_and(|m| !m.as_str().is_empty()) {
            return Stability::Dev;
        }

        match caps.get(1).map(|m| m.as_str()) {
            Some("beta" | "b") => Stability::Beta,
            Some("alpha" | "a") => Stability::Alpha,
            Some("rc") => Stability::RC,
            _ => Stability::Stable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stability::Dev => "dev",
            Stability::Alpha => "alpha",
            Stability::Beta => "beta",
            Stability::RC => "RC",
            Stability::Stable => "stable",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
