// wordveil/src/main.rs
//! Wordveil entry point.
//!
//! Parses the CLI, initializes logging, and runs the obfuscation command.

use anyhow::Result;
use clap::Parser;

use wordveil::cli::Cli;
use wordveil::commands::obfuscate;
use wordveil::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if cli.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    obfuscate::run(&cli)
}
