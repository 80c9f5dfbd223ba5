//! Constraint expression parsing

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::{Comparator, ConstraintSet, Operator};
use crate::{Version, VersionError};

/// Error type for constraint parsing.
///
/// `index` is the 0-based position of the offending comma-separated segment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Could not parse version constraint: segment {index} is empty")]
    EmptyComparator { index: usize },
    #[error("Could not parse version constraint \"{segment}\" (segment {index})")]
    InvalidVersion {
        index: usize,
        segment: String,
        #[source]
        source: VersionError,
    },
}

impl ConstraintError {
    /// Index of the segment that failed to parse
    pub fn index(&self) -> usize {
        match self {
            ConstraintError::EmptyComparator { index } => *index,
            ConstraintError::InvalidVersion { index, .. } => *index,
        }
    }
}

lazy_static! {
    // Comparators are separated by commas, surrounding whitespace is insignificant
    static ref SEGMENT_SEPARATOR_RE: Regex = Regex::new(r"\s*,\s*").unwrap();
}

/// Parser for comma-separated comparator lists.
///
/// Grammar: `segment (',' segment)*`, `segment = [operator] version`,
/// `operator = <= | >= | = | < | >`, `version = int ('.' int){0,2}`.
///
/// Two defaults apply. A segment without an operator means
/// [`Operator::DEFAULT`] (`=`), and missing version components are 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintParser;

impl ConstraintParser {
    /// Create a new parser
    pub fn new() -> Self {
        ConstraintParser
    }

    /// Parse a constraint expression into a [`ConstraintSet`]
    pub fn parse(&self, input: &str) -> Result<ConstraintSet, ConstraintError> {
        let comparators = SEGMENT_SEPARATOR_RE
            .split(input.trim())
            .enumerate()
            .map(|(index, segment)| self.parse_comparator(index, segment.trim()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ConstraintSet::new(comparators))
    }

    /// Parse a single `[operator] version` segment
    fn parse_comparator(&self, index: usize, segment: &str) -> Result<Comparator, ConstraintError> {
        if segment.is_empty() {
            return Err(ConstraintError::EmptyComparator { index });
        }

        let (operator, rest) = Operator::prefix(segment).unwrap_or((Operator::DEFAULT, segment));

        let version = Version::parse(rest.trim_start()).map_err(|source| ConstraintError::InvalidVersion {
            index,
            segment: segment.to_string(),
            source,
        })?;

        Ok(Comparator::new(operator, version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<ConstraintSet, ConstraintError> {
        ConstraintParser::new().parse(input)
    }

    #[test]
    fn test_bare_version_defaults_to_equal() {
        let set = parse("1.2.3").unwrap();
        assert_eq!(
            set.comparators(),
            &[Comparator::new(Operator::Equal, Version::new(1, 2, 3))]
        );
    }

    #[test]
    fn test_two_comparators_in_order() {
        let set = parse("<= 1.2.3, >= 1.4").unwrap();
        assert_eq!(
            set.comparators(),
            &[
                Comparator::new(Operator::LessThanOrEqual, Version::new(1, 2, 3)),
                Comparator::new(Operator::GreaterThanOrEqual, Version::new(1, 4, 0)),
            ]
        );
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let compact = parse(">=1.0,<2").unwrap();
        let spaced = parse("  >=   1.0 ,   < 2  ").unwrap();
        assert_eq!(compact, spaced);
    }

    #[test]
    fn test_empty_segments() {
        assert_eq!(parse(""), Err(ConstraintError::EmptyComparator { index: 0 }));
        assert_eq!(parse("   "), Err(ConstraintError::EmptyComparator { index: 0 }));
        assert_eq!(parse("1.0,"), Err(ConstraintError::EmptyComparator { index: 1 }));
        assert_eq!(
            parse(">= 1, , < 2"),
            Err(ConstraintError::EmptyComparator { index: 1 })
        );
    }

    #[test]
    fn test_invalid_versions() {
        let err = parse(">= 1.x").unwrap_err();
        assert_eq!(
            err,
            ConstraintError::InvalidVersion {
                index: 0,
                segment: ">= 1.x".to_string(),
                source: VersionError::InvalidComponent {
                    version: "1.x".to_string(),
                    component: "x".to_string(),
                },
            }
        );

        assert_eq!(parse("1.0, >= -1").unwrap_err().index(), 1);
        assert!(matches!(
            parse(">="),
            Err(ConstraintError::InvalidVersion { source: VersionError::Empty(_), .. })
        ));
        assert!(matches!(
            parse("1.2.3.4"),
            Err(ConstraintError::InvalidVersion { source: VersionError::TooManyComponents(_), .. })
        ));
    }

    #[test]
    fn test_unsupported_operators_are_invalid_versions() {
        assert!(matches!(parse("== 1.0"), Err(ConstraintError::InvalidVersion { .. })));
        assert!(matches!(parse("!= 1.0"), Err(ConstraintError::InvalidVersion { .. })));
        assert!(matches!(parse("^1.0"), Err(ConstraintError::InvalidVersion { .. })));
        assert!(matches!(parse("~1.0"), Err(ConstraintError::InvalidVersion { .. })));
    }

    #[test]
    fn test_error_messages() {
        let err = parse(">= 1.x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not parse version constraint \">= 1.x\" (segment 0)"
        );
        assert_eq!(
            parse("1,").unwrap_err().to_string(),
            "Could not parse version constraint: segment 1 is empty"
        );
    }
}
