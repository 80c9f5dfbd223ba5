//! Sort command - order versions by their numeric triple.

use anyhow::Result;
use clap::Args;
use std::io::Write;

use gow_semver::Version;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Sort in descending order
    #[arg(short, long)]
    pub reverse: bool,
}

/// Run the command, writing the sorted versions to `out`
pub fn execute(args: SortArgs, out: &mut dyn Write) -> Result<i32> {
    let mut parsed: Vec<(Version, &str)> = Vec::with_capacity(args.versions.len());
    for raw in &args.versions {
        match Version::parse(raw) {
            Ok(version) => parsed.push((version, raw.as_str())),
            Err(e) => log::warn!("Skipping {}", e),
        }
    }

    // Stable, so equal versions keep their input order
    parsed.sort_by(|(a, _), (b, _)| if args.reverse { b.cmp(a) } else { a.cmp(b) });

    for (_, raw) in parsed {
        writeln!(out, "{}", raw)?;
    }

    Ok(0)
}
