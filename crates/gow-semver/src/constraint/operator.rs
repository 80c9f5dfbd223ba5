//! Operator types for version constraints

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Comparison operators for version constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=)
    Equal,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Invalid operator \"{0}\", expected one of: {expected}",
    expected = Operator::supported_operators().join(", ")
)]
pub struct InvalidOperatorError(pub String);

impl Operator {
    /// Operator assumed when a comparator is written without one.
    pub const DEFAULT: Operator = Operator::Equal;

    /// Tokens in longest-match order: two-character operators come first.
    const TOKENS: [(&'static str, Operator); 5] = [
        ("<=", Operator::LessThanOrEqual),
        (">=", Operator::GreaterThanOrEqual),
        ("=", Operator::Equal),
        ("<", Operator::LessThan),
        (">", Operator::GreaterThan),
    ];

    /// Split a leading operator token off `input`.
    ///
    /// Returns `None` when `input` does not start with an operator.
    pub fn prefix(input: &str) -> Option<(Operator, &str)> {
        Self::TOKENS
            .iter()
            .find_map(|(token, op)| input.strip_prefix(token).map(|rest| (*op, rest)))
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
        }
    }

    /// Whether `ordering`, the result of `candidate.cmp(bound)`, satisfies this operator
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }

    /// Get all supported operators
    pub fn supported_operators() -> &'static [&'static str] {
        &["<=", ">=", "=", "<", ">"]
    }
}

impl Default for Operator {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Operator {
    type Err = InvalidOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::TOKENS
            .iter()
            .find(|(token, _)| *token == s)
            .map(|(_, op)| *op)
            .ok_or_else(|| InvalidOperatorError(s.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_prefers_longest_token() {
        assert_eq!(Operator::prefix("<=1.0"), Some((Operator::LessThanOrEqual, "1.0")));
        assert_eq!(Operator::prefix(">= 1.4"), Some((Operator::GreaterThanOrEqual, " 1.4")));
        assert_eq!(Operator::prefix("<1"), Some((Operator::LessThan, "1")));
        assert_eq!(Operator::prefix(">1"), Some((Operator::GreaterThan, "1")));
        assert_eq!(Operator::prefix("=1"), Some((Operator::Equal, "1")));
        assert_eq!(Operator::prefix("1.2.3"), None);
    }

    #[test]
    fn test_from_str_roundtrips_as_str() {
        for token in Operator::supported_operators() {
            let op: Operator = token.parse().unwrap();
            assert_eq!(op.as_str(), *token);
        }
        assert_eq!(
            "==".parse::<Operator>(),
            Err(InvalidOperatorError("==".to_string()))
        );
        assert!("!=".parse::<Operator>().is_err());
    }

    #[test]
    fn test_invalid_operator_message_lists_supported() {
        let err = "=>".parse::<Operator>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid operator \"=>\", expected one of: <=, >=, =, <, >"
        );
    }

    #[test]
    fn test_accepts() {
        assert!(Operator::Equal.accepts(Ordering::Equal));
        assert!(!Operator::Equal.accepts(Ordering::Less));
        assert!(Operator::LessThanOrEqual.accepts(Ordering::Equal));
        assert!(!Operator::LessThan.accepts(Ordering::Equal));
        assert!(Operator::GreaterThanOrEqual.accepts(Ordering::Greater));
        assert!(!Operator::GreaterThan.accepts(Ordering::Less));
    }

    #[test]
    fn test_default_is_equal() {
        assert_eq!(Operator::default(), Operator::Equal);
    }
}
