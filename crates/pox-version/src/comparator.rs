//! Version comparison under an operator

use std::str::FromStr;

use crate::operator::{InvalidOperatorError, Operator};
use crate::ordering::compare_versions;

/// Comparator for version strings
///
/// `dev-*` branch names are not ordered against each other: two branches are
/// only equal when identical, and a branch sorts below every numeric version.
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, Operator::Equal, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, Operator::LessThan, version2)
    }

    /// Compare using an operator given in its textual form (`>`, `==`, `<>`, ...)
    pub fn compare_str(
        version1: &str,
        operator: &str,
        version2: &str,
    ) -> Result<bool, InvalidOperatorError> {
        Ok(Self::compare(version1, Operator::from_str(operator)?, version2))
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare(version1: &str, operator: Operator, version2: &str) -> bool {
        let v1_is_branch = is_branch(version1);
        let v2_is_branch = is_branch(version2);

        if operator == Operator::NotEqual && (v1_is_branch || v2_is_branch) {
            return version1 != version2;
        }

        match (v1_is_branch, v2_is_branch) {
            (true, true) => operator == Operator::Equal && version1 == version2,
            (true, false) => matches!(operator, Operator::LessThan | Operator::LessThanOrEqual),
            (false, true) => {
                matches!(operator, Operator::GreaterThan | Operator::GreaterThanOrEqual)
            }
            (false, false) => operator.accepts(compare_versions(version1, version2)),
        }
    }
}

fn is_branch(version: &str) -> bool {
    version.starts_with("dev-")
}
