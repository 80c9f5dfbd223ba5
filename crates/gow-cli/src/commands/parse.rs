//! Parse command - print the canonical form of a constraint.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use std::io::Write;

use gow_semver::ConstraintSet;

use crate::config::GowConfig;

#[derive(Args, Debug, Default)]
pub struct ParseArgs {
    /// Constraint expression, e.g. "<= 1.2.3, >= 1.4" (defaults to gow.toml or the built-in example)
    pub constraint: Option<String>,
}

/// Run the command, writing the constraint to `out` and warnings to `err`
pub fn execute(
    args: ParseArgs,
    config: &GowConfig,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<i32> {
    let input = args
        .constraint
        .as_deref()
        .unwrap_or_else(|| config.default_constraint());

    let set = ConstraintSet::parse(input)
        .with_context(|| format!("Invalid constraint \"{}\"", input))?;
    log::debug!("Parsed \"{}\" into {} comparator(s)", input, set.len());

    writeln!(out, "{}", set)?;

    if !set.is_satisfiable() {
        writeln!(
            err,
            "{} no version satisfies \"{}\"",
            style("Warning:").yellow(),
            set
        )?;
    }

    Ok(0)
}
