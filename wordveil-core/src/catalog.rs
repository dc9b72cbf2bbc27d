//! Built-in charset catalog for `wordveil-core`.
//!
//! The catalog is the data-source collaborator the substitution core
//! consumes: it owns the embedded built-in tables, resolves names to
//! already-validated [`RawCharSet`]s, and accepts caller-registered tables.
//! The core itself holds no global state; hosts build a catalog once and
//! pass it down.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;
use std::path::Path;

use log::{debug, info};

use crate::charset::{check_charset, RawCharSet};
use crate::errors::VeilError;

/// Name of the built-in classic-leetspeak table.
pub const LATIN: &str = "latin";
/// Name of the built-in Latin-1 supplement homoglyph table.
pub const LATIN_1: &str = "latin-1";

static LATIN_JSON: &str = include_str!("../charsets/latin.json");
static LATIN_1_JSON: &str = include_str!("../charsets/latin-1.json");

/// A named collection of substitution tables.
#[derive(Debug, Clone, Default)]
pub struct CharSetCatalog {
    sets: HashMap<String, RawCharSet>,
}

impl CharSetCatalog {
    /// An empty catalog with no registered charsets.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the catalog of embedded built-in charsets.
    pub fn builtin() -> Result<Self, VeilError> {
        let mut catalog = Self::empty();
        for (name, json) in [(LATIN, LATIN_JSON), (LATIN_1, LATIN_1_JSON)] {
            let charset: RawCharSet = serde_json::from_str(json)
                .map_err(|e| VeilError::CharSetParse(name.to_string(), e))?;
            catalog.register(name, charset)?;
        }
        debug!("Loaded {} built-in charset(s).", catalog.sets.len());
        Ok(catalog)
    }

    /// Registers a charset under `name`, validating it first.
    ///
    /// Re-registering a name replaces the previous table.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        charset: RawCharSet,
    ) -> Result<(), VeilError> {
        check_charset(&charset)?;
        self.sets.insert(name.into(), charset);
        Ok(())
    }

    /// Resolves a charset by name.
    pub fn resolve(&self, name: &str) -> Result<&RawCharSet, VeilError> {
        self.sets
            .get(name)
            .ok_or_else(|| VeilError::UnknownCharSet(name.to_string()))
    }

    /// True when `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Loads a custom charset from a JSON file, validating it.
pub fn load_charset_file<P: AsRef<Path>>(path: P) -> Result<RawCharSet, VeilError> {
    let path = path.as_ref();
    info!("Loading custom charset from: {}", path.display());

    let text = std::fs::read_to_string(path)?;
    let charset: RawCharSet = serde_json::from_str(&text)
        .map_err(|e| VeilError::CharSetParse(path.display().to_string(), e))?;
    check_charset(&charset)?;

    Ok(charset)
}
