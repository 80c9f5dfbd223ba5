//! Bound type for constraint boundaries

use std::cmp::Ordering;
use std::fmt;

use super::{Comparator, Operator};
use crate::Version;

/// Represents a bound (lower or upper) of a version constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    version: Version,
    is_inclusive: bool,
}

impl Bound {
    /// Create a new bound
    pub fn new(version: Version, is_inclusive: bool) -> Self {
        Bound {
            version,
            is_inclusive,
        }
    }

    /// Create the zero bound (minimum possible version)
    pub fn zero() -> Self {
        Bound::new(Version::default(), true)
    }

    /// Get the version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Check if the bound is inclusive
    pub fn is_inclusive(&self) -> bool {
        self.is_inclusive
    }

    /// Check if this is the zero bound
    pub fn is_zero(&self) -> bool {
        *self == Bound::zero()
    }

    /// Lower bound implied by a comparator, if it has one
    pub(crate) fn lower_of(comparator: &Comparator) -> Option<Bound> {
        let version = comparator.version();
        match comparator.operator() {
            Operator::Equal | Operator::GreaterThanOrEqual => Some(Bound::new(version, true)),
            Operator::GreaterThan => Some(Bound::new(version, false)),
            Operator::LessThan | Operator::LessThanOrEqual => None,
        }
    }

    /// Upper bound implied by a comparator, if it has one
    pub(crate) fn upper_of(comparator: &Comparator) -> Option<Bound> {
        let version = comparator.version();
        match comparator.operator() {
            Operator::Equal | Operator::LessThanOrEqual => Some(Bound::new(version, true)),
            Operator::LessThan => Some(Bound::new(version, false)),
            Operator::GreaterThan | Operator::GreaterThanOrEqual => None,
        }
    }

    /// The more restrictive of two lower bounds
    pub(crate) fn tighter_lower(self, other: Bound) -> Bound {
        match self.version.cmp(&other.version) {
            Ordering::Greater => self,
            Ordering::Less => other,
            Ordering::Equal if !self.is_inclusive => self,
            Ordering::Equal => other,
        }
    }

    /// The more restrictive of two upper bounds
    pub(crate) fn tighter_upper(self, other: Bound) -> Bound {
        match self.version.cmp(&other.version) {
            Ordering::Less => self,
            Ordering::Greater => other,
            Ordering::Equal if !self.is_inclusive => self,
            Ordering::Equal => other,
        }
    }

    /// Smallest version admitted by this bound used as a lower bound.
    ///
    /// Versions are integer triples, so `> 1.2.3` starts at `1.2.4`. Returns
    /// `None` when no successor exists.
    pub(crate) fn first_admitted(&self) -> Option<Version> {
        if self.is_inclusive {
            return Some(self.version);
        }
        let v = self.version;
        if let Some(patch) = v.patch.checked_add(1) {
            Some(Version::new(v.major, v.minor, patch))
        } else if let Some(minor) = v.minor.checked_add(1) {
            Some(Version::new(v.major, minor, 0))
        } else {
            v.major.checked_add(1).map(|major| Version::new(major, 0, 0))
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_inclusive { "inclusive" } else { "exclusive" };
        write!(f, "{} ({})", self.version, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert!(Bound::zero().is_zero());
        assert!(!Bound::new(Version::default(), false).is_zero());
    }

    #[test]
    fn test_tighter_lower() {
        let a = Bound::new(Version::new(1, 0, 0), true);
        let b = Bound::new(Version::new(1, 4, 0), true);
        assert_eq!(a.tighter_lower(b), b);
        assert_eq!(b.tighter_lower(a), b);

        let exclusive = Bound::new(Version::new(1, 0, 0), false);
        assert_eq!(a.tighter_lower(exclusive), exclusive);
        assert_eq!(exclusive.tighter_lower(a), exclusive);
    }

    #[test]
    fn test_tighter_upper() {
        let a = Bound::new(Version::new(1, 0, 0), true);
        let b = Bound::new(Version::new(2, 0, 0), false);
        assert_eq!(a.tighter_upper(b), a);
        assert_eq!(b.tighter_upper(a), a);

        let exclusive = Bound::new(Version::new(1, 0, 0), false);
        assert_eq!(a.tighter_upper(exclusive), exclusive);
    }

    #[test]
    fn test_first_admitted() {
        let v = Version::new(1, 2, 3);
        assert_eq!(Bound::new(v, true).first_admitted(), Some(v));
        assert_eq!(
            Bound::new(v, false).first_admitted(),
            Some(Version::new(1, 2, 4))
        );
        assert_eq!(
            Bound::new(Version::new(0, 0, u64::MAX), false).first_admitted(),
            Some(Version::new(0, 1, 0))
        );
        assert_eq!(
            Bound::new(Version::new(u64::MAX, u64::MAX, u64::MAX), false).first_admitted(),
            None
        );
    }

    #[test]
    fn test_display() {
        let b = Bound::new(Version::new(1, 4, 0), false);
        assert_eq!(b.to_string(), "1.4.0 (exclusive)");
    }
}
