//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Printing temperatures and comparisons

use clap::Parser;
use tracing::Level;

mod cli;

fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();

    let level = match cmd.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    cmd.run()
}
