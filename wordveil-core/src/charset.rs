//! Charset model for `wordveil-core`.
//!
//! This module defines the substitution-table data structures and the logic
//! for validating untrusted tables and merging them into a single effective
//! table with order-independent semantics.
//!
//! License: MIT OR Apache-2.0

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::errors::VeilError;

/// An untrusted substitution table, exactly as deserialized from JSON:
/// a map from (supposedly single-character) keys to lists of (supposedly
/// single-character) replacement strings.
///
/// Keys and values stay string-typed so that validation, not the type
/// system, is what rejects multi-character entries.
pub type RawCharSet = BTreeMap<String, Vec<String>>;

/// Returns true for characters in the C0/C1 control ranges
/// (U+0000-U+001F and U+007F-U+009F), which are banned as replacements.
fn is_control_char(c: char) -> bool {
    matches!(c, '\u{0000}'..='\u{001f}' | '\u{007f}'..='\u{009f}')
}

/// Check if the given charset is valid.
///
/// A charset is valid iff every key is a single ASCII letter and every
/// replacement is a single non-control character. Pure, no side effects.
pub fn is_charset_valid(charset: &RawCharSet) -> bool {
    check_charset(charset).is_ok()
}

/// Validates a charset, naming the offending entry on failure.
///
/// This is the diagnostic twin of [`is_charset_valid`] and the precondition
/// check used by [`merge_charsets`]. The first violation encountered renders
/// the whole table invalid.
pub fn check_charset(charset: &RawCharSet) -> Result<(), VeilError> {
    for (key, replacements) in charset {
        let mut key_chars = key.chars();
        match (key_chars.next(), key_chars.next()) {
            (Some(k), None) if k.is_ascii_alphabetic() => {}
            _ => {
                return Err(VeilError::InvalidCharSet(format!(
                    "key {key:?} must be a single ASCII letter"
                )));
            }
        }

        for replacement in replacements {
            let mut value_chars = replacement.chars();
            match (value_chars.next(), value_chars.next()) {
                (Some(r), None) if !is_control_char(r) => {}
                _ => {
                    return Err(VeilError::InvalidCharSet(format!(
                        "replacement {replacement:?} for key {key:?} must be a \
                         single non-control character"
                    )));
                }
            }
        }
    }
    Ok(())
}

/// The validated result of merging zero or more [`RawCharSet`]s.
///
/// For every key present in any input table, the merged value is the
/// deduplicated union of all replacements contributed for that key, stored
/// sorted by scalar value. Accumulating through `BTreeMap`/`BTreeSet` makes
/// the merge commutative and associative by construction. Immutable once
/// built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedCharSet {
    entries: BTreeMap<char, Vec<char>>,
}

impl MergedCharSet {
    /// True when no key carries any replacement.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of mapped keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The sorted replacement candidates for a literal key, empty when the
    /// key is unmapped.
    pub fn replacements(&self, key: char) -> &[char] {
        self.entries.get(&key).map_or(&[], Vec::as_slice)
    }

    /// Replacement candidates honoring the case-sensitivity mode.
    ///
    /// Case-sensitive mode looks the key up literally. Case-insensitive mode
    /// unions the candidates of both the upper- and lower-case forms.
    /// Charset keys are ASCII letters by invariant, so ASCII case mapping
    /// suffices; characters outside the tables simply yield no candidates.
    pub fn candidates(&self, key: char, case_sensitive: bool) -> Vec<char> {
        if case_sensitive {
            return self.replacements(key).to_vec();
        }

        let upper = self.replacements(key.to_ascii_uppercase());
        let lower = self.replacements(key.to_ascii_lowercase());
        upper
            .iter()
            .chain(lower)
            .copied()
            .collect::<BTreeSet<char>>()
            .into_iter()
            .collect()
    }

    /// Picks a uniformly random replacement for `key`, or returns `key`
    /// unchanged when no candidate exists.
    pub fn pick<R: Rng + ?Sized>(&self, key: char, case_sensitive: bool, rng: &mut R) -> char {
        let candidates = self.candidates(key, case_sensitive);
        candidates.choose(rng).copied().unwrap_or(key)
    }

    /// Iterates over `(key, replacements)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &[char])> {
        self.entries.iter().map(|(k, v)| (*k, v.as_slice()))
    }
}

/// Merge multiple charsets into one effective table.
///
/// Every input table is validated first; the first invalid table aborts the
/// merge with [`VeilError::InvalidCharSet`]. Inputs are never mutated, and
/// the result is identical regardless of the order the tables are supplied
/// in. Merging zero tables yields an empty table.
pub fn merge_charsets<'a, I>(charsets: I) -> Result<MergedCharSet, VeilError>
where
    I: IntoIterator<Item = &'a RawCharSet>,
{
    let mut accumulator: BTreeMap<char, BTreeSet<char>> = BTreeMap::new();
    let mut merged_count = 0usize;

    for charset in charsets {
        check_charset(charset)?;
        merged_count += 1;

        for (key, replacements) in charset {
            // Post-validation every key and replacement is exactly one char.
            let Some(key_char) = key.chars().next() else {
                continue;
            };
            let slot = accumulator.entry(key_char).or_default();
            slot.extend(replacements.iter().filter_map(|r| r.chars().next()));
        }
    }

    let entries: BTreeMap<char, Vec<char>> = accumulator
        .into_iter()
        .map(|(key, set)| (key, set.into_iter().collect()))
        .collect();

    debug!(
        "Merged {} charset(s) into {} mapped key(s).",
        merged_count,
        entries.len()
    );

    Ok(MergedCharSet { entries })
}
