//! wordcount - A batch word-frequency counter
//!
//! wordcount provides:
//! - ASCII word tokenization with optional case folding
//! - One JSON frequency table per input file
//! - Per-file failure isolation with a batch summary

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod flows;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse_from(cli::normalize_args(std::env::args_os()));

    // Diagnostics go to stderr; stdout carries the status report
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    cli::run(cli)
}
