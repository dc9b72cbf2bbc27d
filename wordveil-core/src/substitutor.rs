//! Word-scoped substitution over input text.
//!
//! The [`Substitutor`] owns phrase validation, word-boundary matching, and
//! position-correct in-place replacement. Matches for every phrase are
//! located against the original text, ordered into a single deterministic
//! sequence, and censored span by span; everything outside matched spans is
//! copied through untouched.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::{Regex, RegexBuilder};

use crate::charset::MergedCharSet;
use crate::errors::VeilError;

/// Maximum allowed length for a phrase, in characters.
pub const MAX_PHRASE_LENGTH: usize = 30;

/// Characters a phrase may consist of: ASCII alphanumerics, space, hyphen,
/// underscore, apostrophe, and slash.
static PHRASE_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9 \-_'/]+$").unwrap());

/// Check if the given phrase is valid.
///
/// A phrase is valid iff it matches the allowed character class, is not
/// blank after trimming surrounding whitespace, and is at most
/// [`MAX_PHRASE_LENGTH`] characters long. Pure.
pub fn is_phrase_valid(phrase: &str) -> bool {
    PHRASE_CLASS.is_match(phrase)
        && !phrase.trim().is_empty()
        && phrase.chars().count() <= MAX_PHRASE_LENGTH
}

/// Applies a merged charset to text, either wholesale or scoped to
/// whole-word phrase matches.
#[derive(Debug, Clone)]
pub struct Substitutor {
    charset: MergedCharSet,
    case_sensitive: bool,
}

impl Substitutor {
    pub fn new(charset: MergedCharSet, case_sensitive: bool) -> Self {
        Self {
            charset,
            case_sensitive,
        }
    }

    /// The effective charset this substitutor applies.
    pub fn charset(&self) -> &MergedCharSet {
        &self.charset
    }

    /// Maps every character of `text` through the charset, preserving
    /// character count and order. Characters without a table entry pass
    /// through unchanged.
    pub fn censor<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        text.chars()
            .map(|c| self.charset.pick(c, self.case_sensitive, rng))
            .collect()
    }

    /// Censors `text`, scoped to whole-word occurrences of `phrases`.
    ///
    /// With no phrases, the entire text is censored. Otherwise every phrase
    /// is trimmed and validated up front (the first invalid phrase aborts
    /// with [`VeilError::InvalidPhrase`] before any output is built), then
    /// matched globally as a whole word, case-insensitively unless this
    /// substitutor is case-sensitive.
    ///
    /// All match spans are located against the original text and processed
    /// leftmost-first, ties broken longest-first; a span overlapping an
    /// already-censored span is dropped. Text outside matched spans is
    /// copied through byte-for-byte.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        text: &str,
        phrases: &[String],
        rng: &mut R,
    ) -> Result<String, VeilError> {
        if phrases.is_empty() {
            return Ok(self.censor(text, rng));
        }

        let mut trimmed = Vec::with_capacity(phrases.len());
        for phrase in phrases {
            if !is_phrase_valid(phrase) {
                return Err(VeilError::InvalidPhrase(phrase.clone()));
            }
            trimmed.push(phrase.trim());
        }

        let mut spans: Vec<(usize, usize)> = Vec::new();
        for phrase in &trimmed {
            let regex = self.word_regex(phrase)?;
            for m in regex.find_iter(text) {
                spans.push((m.start(), m.end()));
            }
        }
        spans.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

        debug!(
            "Censoring {} span(s) for {} phrase(s) over {} byte(s) of input.",
            spans.len(),
            trimmed.len(),
            text.len()
        );

        let mut result = String::with_capacity(text.len());
        let mut last_end = 0usize;
        for (start, end) in spans {
            if start < last_end {
                continue;
            }
            result.push_str(&text[last_end..start]);
            result.push_str(&self.censor(&text[start..end], rng));
            last_end = end;
        }
        result.push_str(&text[last_end..]);

        Ok(result)
    }

    /// Compiles a whole-word matcher for a validated, trimmed phrase.
    fn word_regex(&self, phrase: &str) -> Result<Regex, VeilError> {
        let pattern = format!(r"\b{}\b", regex::escape(phrase));
        RegexBuilder::new(&pattern)
            .case_insensitive(!self.case_sensitive)
            .build()
            .map_err(|_| VeilError::InvalidPhrase(phrase.to_string()))
    }
}
