//! Check command - test versions against a constraint.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use std::io::Write;

use gow_semver::{ConstraintSet, Version};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Constraint expression, e.g. ">= 1.4, < 2"
    pub constraint: String,

    /// Versions to check
    #[arg(required = true)]
    pub versions: Vec<String>,
}

/// Describe why `raw` does or does not satisfy `set`
fn verdict(set: &ConstraintSet, raw: &str) -> Result<(), String> {
    let version = Version::parse(raw).map_err(|e| e.to_string())?;

    let rejected: Vec<String> = set.rejecting(&version).map(|c| c.to_string()).collect();
    if rejected.is_empty() {
        Ok(())
    } else {
        Err(format!("fails {}", rejected.join(", ")))
    }
}

/// Run the command, writing one line per version to `out`
pub fn execute(args: CheckArgs, out: &mut dyn Write) -> Result<i32> {
    let set = ConstraintSet::parse(&args.constraint)
        .with_context(|| format!("Invalid constraint \"{}\"", args.constraint))?;
    log::debug!("Checking {} version(s) against {}", args.versions.len(), set);

    let mut failures = 0;
    for raw in &args.versions {
        match verdict(&set, raw) {
            Ok(()) => writeln!(out, "{} {}", style("ok").green(), raw)?,
            Err(reason) => {
                failures += 1;
                writeln!(out, "{} {} ({})", style("no").red(), raw, reason)?;
            }
        }
    }

    Ok(if failures == 0 { 0 } else { 1 })
}
