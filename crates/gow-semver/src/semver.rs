//! Semver facade providing high-level version operations

use crate::{ConstraintError, ConstraintSet, Version};

/// Main facade for string-in, string-out version operations
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a constraint
    pub fn satisfies(version: &str, constraints: &str) -> bool {
        let Ok(version) = Version::parse(version) else {
            return false;
        };

        match ConstraintSet::parse(constraints) {
            Ok(set) => set.matches(&version),
            Err(_) => false,
        }
    }

    /// Return all versions that satisfy the given constraints
    pub fn satisfied_by(versions: &[&str], constraints: &str) -> Vec<String> {
        let set = match ConstraintSet::parse(constraints) {
            Ok(s) => s,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter_map(|v| {
                let parsed = Version::parse(v).ok()?;
                set.matches(&parsed).then(|| v.to_string())
            })
            .collect()
    }

    /// Parse constraints and return a reusable representation.
    pub fn parse_constraints(constraints: &str) -> Result<ConstraintSet, ConstraintError> {
        ConstraintSet::parse(constraints)
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        // Pair each parsable version with its original index
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((Version::parse(v).ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });

        // Return original spellings in sorted order
        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
