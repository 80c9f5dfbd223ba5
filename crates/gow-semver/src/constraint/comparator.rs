//! Single operator/version comparator

use std::fmt;

use super::Operator;
use crate::Version;

/// A single comparator (e.g., `>= 1.4.0`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Comparator {
    operator: Operator,
    version: Version,
}

impl Comparator {
    /// Create a new comparator
    pub fn new(operator: Operator, version: Version) -> Self {
        Comparator { operator, version }
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Get the version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Check whether `candidate` satisfies this comparator
    pub fn matches(&self, candidate: &Version) -> bool {
        self.operator.accepts(candidate.cmp(&self.version))
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.version)
    }
}
