//! ConstraintSet - conjunction of comparators

use std::fmt;
use std::str::FromStr;

use super::{Bound, Comparator, ConstraintError, ConstraintParser};
use crate::Version;

/// An ordered, immutable list of comparators combined with AND logic.
///
/// A version matches the set iff it matches every comparator. The set renders
/// as its comparators joined with `", "`, each with a three-component version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstraintSet {
    comparators: Vec<Comparator>,
}

impl ConstraintSet {
    pub(crate) fn new(comparators: Vec<Comparator>) -> Self {
        ConstraintSet { comparators }
    }

    /// Parse a constraint expression such as `"<= 1.2.3, >= 1.4"`
    pub fn parse(input: &str) -> Result<Self, ConstraintError> {
        ConstraintParser::new().parse(input)
    }

    /// Get the comparators, in input order
    pub fn comparators(&self) -> &[Comparator] {
        &self.comparators
    }

    /// Iterate over the comparators, in input order
    pub fn iter(&self) -> std::slice::Iter<'_, Comparator> {
        self.comparators.iter()
    }

    /// Number of comparators
    pub fn len(&self) -> usize {
        self.comparators.len()
    }

    /// Check if the set has no comparators
    pub fn is_empty(&self) -> bool {
        self.comparators.is_empty()
    }

    /// Check if a version satisfies every comparator
    pub fn matches(&self, version: &Version) -> bool {
        self.comparators.iter().all(|c| c.matches(version))
    }

    /// Comparators that reject `version`; empty iff [`matches`](Self::matches)
    pub fn rejecting<'a>(&'a self, version: &'a Version) -> impl Iterator<Item = &'a Comparator> + 'a {
        self.comparators.iter().filter(move |c| !c.matches(version))
    }

    /// The tightest lower bound of the conjunction
    pub fn lower_bound(&self) -> Bound {
        self.comparators
            .iter()
            .filter_map(Bound::lower_of)
            .fold(Bound::zero(), Bound::tighter_lower)
    }

    /// The tightest upper bound of the conjunction, `None` when unbounded
    pub fn upper_bound(&self) -> Option<Bound> {
        self.comparators
            .iter()
            .filter_map(Bound::upper_of)
            .reduce(Bound::tighter_upper)
    }

    /// Check whether at least one version satisfies the set
    pub fn is_satisfiable(&self) -> bool {
        let Some(first) = self.lower_bound().first_admitted() else {
            return false;
        };

        match self.upper_bound() {
            None => true,
            Some(upper) if upper.is_inclusive() => first <= upper.version(),
            Some(upper) => first < upper.version(),
        }
    }
}

impl FromStr for ConstraintSet {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConstraintSet::parse(s)
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a Comparator;
    type IntoIter = std::slice::Iter<'a, Comparator>;

    fn into_iter(self) -> Self::IntoIter {
        self.comparators.iter()
    }
}

impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, comparator) in self.comparators.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", comparator)?;
        }
        Ok(())
    }
}
