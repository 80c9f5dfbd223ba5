mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::ExitCode;

use config::GowConfig;

#[derive(Parser, Debug)]
#[command(name = "gow")]
#[command(about = "Parse, print and check version constraints")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a constraint and print its canonical form
    Parse(commands::ParseArgs),

    /// Check versions against a constraint
    Check(commands::CheckArgs),

    /// Sort versions
    Sort(commands::SortArgs),
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = GowConfig::load_from_cwd()?.unwrap_or_default();
    if let Some(path) = &config.path {
        log::debug!("Using configuration from {}", path.display());
    }

    dispatch(args.command, &config, &mut std::io::stdout(), &mut std::io::stderr())
}

fn dispatch(
    command: Option<Commands>,
    config: &GowConfig,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<i32> {
    match command {
        Some(Commands::Parse(parse_args)) => {
            commands::parse::execute(parse_args, config, out, err)
        }
        Some(Commands::Check(check_args)) => commands::check::execute(check_args, out),
        Some(Commands::Sort(sort_args)) => commands::sort::execute(sort_args, out),
        // Without a subcommand, print the configured constraint
        None => commands::parse::execute(commands::ParseArgs::default(), config, out, err),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
