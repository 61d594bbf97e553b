//! aestishot CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: normalize legacy flags,
//! parse args, run the pipeline, and exit with appropriate status.
//! For programmatic use, prefer the library API (`aestishot::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse_from(cli::normalize_legacy_flags(std::env::args_os()));
    cli::run(args)
}
