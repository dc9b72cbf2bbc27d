// wordveil/src/cli.rs
//! This file defines the command-line interface (CLI) for the wordveil
//! application, including all available flags and their arguments.

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "wordveil",
    version = env!("CARGO_PKG_VERSION"),
    about = "Obfuscate text with visually similar character substitutions",
    long_about = "Wordveil replaces characters of your text with randomly chosen visually similar \
substitutes drawn from one or more substitution tables (charsets). Substitution can be scoped to \
whole-word occurrences of specific phrases, leaving the rest of the text untouched, and is always \
strictly one character for one character, so the output has exactly the same length as the input."
)]
pub struct Cli {
    /// Text to obfuscate (reads from stdin if neither this nor --input-file is given).
    #[arg(value_name = "TEXT", conflicts_with = "input_file")]
    pub text: Option<String>,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write obfuscated output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Censor only whole-word occurrences of these phrases (comma-separated).
    #[arg(long, short = 'p', value_delimiter = ',', help = "Censor only whole-word occurrences of these phrases (comma-separated).")]
    pub phrases: Vec<String>,

    /// Match phrases and charset keys case-sensitively.
    #[arg(long, short = 's', help = "Match phrases and charset keys case-sensitively.")]
    pub case_sensitive: bool,

    /// Built-in charsets to merge (comma-separated).
    #[arg(long, short = 'c', value_delimiter = ',', default_value = "latin", help = "Built-in charsets to merge (comma-separated).")]
    pub charsets: Vec<String>,

    /// Merge a custom charset from a JSON file (repeatable).
    #[arg(long = "charset-file", value_name = "FILE", help = "Merge a custom charset from a JSON file (repeatable).")]
    pub charset_files: Vec<PathBuf>,

    /// Seed the random source for reproducible output.
    #[arg(long, value_name = "N", help = "Seed the random source for reproducible output.")]
    pub seed: Option<u64>,

    /// List the available built-in charsets and exit.
    #[arg(long = "list-charsets", help = "List the available built-in charsets and exit.")]
    pub list_charsets: bool,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'wordveil' crate to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}
