// wordveil-core/src/oneshot.rs

//! `oneshot.rs`
//! Convenience wrappers for a full, one-shot substitution of strings.
//! This is where the charset catalog collaborator meets the core: specs are
//! resolved, tables merged, and the substitutor run in a single call.

use rand::Rng;
use serde::Deserialize;

use crate::catalog::{CharSetCatalog, LATIN};
use crate::charset::{merge_charsets, RawCharSet};
use crate::errors::VeilError;
use crate::substitutor::Substitutor;

/// A charset reference in [`SubstituteOptions`]: either the name of a
/// catalog entry or an inline caller-supplied table.
///
/// Deserializes untagged, so a JSON options payload may mix names and
/// inline tables: `["latin", {"a": ["@"]}]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CharSetSpec {
    Builtin(String),
    Custom(RawCharSet),
}

impl CharSetSpec {
    pub fn builtin(name: impl Into<String>) -> Self {
        Self::Builtin(name.into())
    }
}

/// Options for a single substitution run.
///
/// Defaults: no phrases (the whole text is censored), case-insensitive,
/// and the built-in `latin` charset.
#[derive(Debug, Clone)]
pub struct SubstituteOptions {
    pub text: String,
    pub phrases: Vec<String>,
    pub case_sensitive: bool,
    pub charsets: Vec<CharSetSpec>,
}

impl SubstituteOptions {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            phrases: Vec::new(),
            case_sensitive: false,
            charsets: vec![CharSetSpec::Builtin(LATIN.to_string())],
        }
    }

    pub fn with_phrases(mut self, phrases: Vec<String>) -> Self {
        self.phrases = phrases;
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_charsets(mut self, charsets: Vec<CharSetSpec>) -> Self {
        self.charsets = charsets;
        self
    }
}

/// Performs a full substitution run drawing randomness from the thread-local
/// generator. This is the primary entry point for non-interactive use.
///
/// # Arguments
///
/// * `catalog` - The charset catalog used to resolve built-in names.
/// * `options` - Text, phrases, case mode, and charset specs for this run.
pub fn substitute(
    catalog: &CharSetCatalog,
    options: &SubstituteOptions,
) -> Result<String, VeilError> {
    let mut rng = rand::rng();
    substitute_with_rng(catalog, options, &mut rng)
}

/// Like [`substitute`], but drawing randomness from a caller-supplied
/// generator. Pass a seeded [`rand::rngs::StdRng`] for reproducible output.
pub fn substitute_with_rng<R: Rng + ?Sized>(
    catalog: &CharSetCatalog,
    options: &SubstituteOptions,
    rng: &mut R,
) -> Result<String, VeilError> {
    let mut resolved: Vec<&RawCharSet> = Vec::with_capacity(options.charsets.len());
    for spec in &options.charsets {
        match spec {
            CharSetSpec::Builtin(name) => resolved.push(catalog.resolve(name)?),
            CharSetSpec::Custom(charset) => resolved.push(charset),
        }
    }

    let merged = merge_charsets(resolved)?;
    let substitutor = Substitutor::new(merged, options.case_sensitive);
    substitutor.apply(&options.text, &options.phrases, rng)
}
