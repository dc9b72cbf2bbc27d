//! Obfuscate command implementation: input acquisition, charset assembly,
//! random-source selection, and output handling.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;

use wordveil_core::{
    CharSetCatalog, CharSetSpec, SubstituteOptions, load_charset_file, substitute_with_rng,
};

use crate::cli::Cli;

/// The main operation runner for the wordveil CLI.
pub fn run(cli: &Cli) -> Result<()> {
    info!("Starting wordveil operation.");

    let catalog = CharSetCatalog::builtin()?;

    if cli.list_charsets {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        for name in catalog.names() {
            writeln!(writer, "{name}")?;
        }
        return Ok(());
    }

    let input = read_input(cli)?;

    let mut charsets: Vec<CharSetSpec> = cli
        .charsets
        .iter()
        .map(|name| CharSetSpec::builtin(name.as_str()))
        .collect();
    for path in &cli.charset_files {
        let charset = load_charset_file(path)
            .with_context(|| format!("Failed to load charset file {}", path.display()))?;
        charsets.push(CharSetSpec::Custom(charset));
    }

    let options = SubstituteOptions::new(input)
        .with_phrases(cli.phrases.clone())
        .with_case_sensitive(cli.case_sensitive)
        .with_charsets(charsets);

    let obfuscated = match cli.seed {
        Some(seed) => {
            debug!("Using seeded random source ({seed}).");
            let mut rng = StdRng::seed_from_u64(seed);
            substitute_with_rng(&catalog, &options, &mut rng)?
        }
        None => {
            let mut rng = rand::rng();
            substitute_with_rng(&catalog, &options, &mut rng)?
        }
    };

    debug!(
        "Content obfuscated. Input length: {}, output length: {}",
        options.text.len(),
        obfuscated.len()
    );

    write_output(cli, &obfuscated)?;

    info!("Wordveil operation completed.");
    Ok(())
}

/// Reads the input text: positional argument, input file, or stdin.
fn read_input(cli: &Cli) -> Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.input_file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;
    Ok(buffer)
}

/// Writes the obfuscated text to the requested destination.
fn write_output(cli: &Cli, obfuscated: &str) -> Result<()> {
    if let Some(path) = &cli.output {
        info!("Writing obfuscated content to file: {}", path.display());
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        writeln!(file, "{obfuscated}")?;
    } else {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        writeln!(writer, "{obfuscated}")?;
    }
    Ok(())
}
