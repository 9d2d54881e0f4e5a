use std::fmt;

/// A replace link from one package to another package name
///
/// The constraint is carried for reporting only. Candidate selection matches
/// replace links by target name and never evaluates the constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    /// Source package name (lowercase)
    pub source: String,
    /// Target package name (lowercase)
    pub target: String,
    /// Version constraint string (e.g., "self.version", "^1.0")
    pub constraint: String,
}

impl Link {
    /// Creates a new replace link
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into().to_lowercase(),
            target: target.into().to_lowercase(),
            constraint: constraint.into(),
        }
    }

    /// Whether this link targets the given package name
    pub fn targets(&self, name: &str) -> bool {
        self.target.eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} replaces {} ({})", self.source, self.target, self.constraint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let link = Link::new("My/Package", "Vendor/Library", "^1.0");

        assert_eq!(link.source, "my/package");
        assert_eq!(link.target, "vendor/library");
        assert_eq!(link.constraint, "^1.0");
    }

    #[test]
    fn test_link_targets_ignores_case() {
        let link = Link::new("a/a", "b/b", "*");
        assert!(link.targets("B/b"));
        assert!(!link.targets("b/c"));
    }

    #[test]
    fn test_link_display() {
        let link = Link::new("a/a", "b/b", "self.version");
        assert_eq!(link.to_string(), "a/a replaces b/b (self.version)");
    }
}
