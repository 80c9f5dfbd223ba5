//! Constraint types for version matching

mod bound;
mod comparator;
mod constraint_set;
mod operator;
mod parser;

pub use bound::Bound;
pub use comparator::Comparator;
pub use constraint_set::ConstraintSet;
pub use operator::{InvalidOperatorError, Operator};
pub use parser::{ConstraintError, ConstraintParser};
