//! Comparator-based version constraints
//!
//! This crate parses constraint expressions such as `"<= 1.2.3, >= 1.4"` into a
//! [`ConstraintSet`], renders them back to a canonical form and matches them
//! against [`Version`] triples.

pub mod constraint;
mod semver;
mod version;

pub use constraint::{
    Bound, Comparator, ConstraintError, ConstraintParser, ConstraintSet, InvalidOperatorError,
    Operator,
};
pub use semver::Semver;
pub use version::{Version, VersionError};
