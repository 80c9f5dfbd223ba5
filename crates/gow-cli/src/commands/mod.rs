//! Subcommand implementations

pub mod check;
pub mod parse;
pub mod sort;

pub use check::CheckArgs;
pub use parse::ParseArgs;
pub use sort::SortArgs;
