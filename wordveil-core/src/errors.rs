//! errors.rs - Custom error types for the wordveil-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `wordveil-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum VeilError {
    /// A supplied substitution table violates the key/value shape invariants.
    /// Carries a description of the offending entry for diagnostics.
    #[error("Invalid charset: {0}")]
    InvalidCharSet(String),

    /// A supplied phrase violates the character-class, length, or
    /// non-blank-after-trim constraints. Carries the offending phrase.
    #[error("Invalid phrase: {0:?}")]
    InvalidPhrase(String),

    /// A named built-in charset does not exist in the catalog.
    #[error("Unknown charset: '{0}'")]
    UnknownCharSet(String),

    /// A charset definition could not be parsed as JSON.
    #[error("Failed to parse charset '{0}': {1}")]
    CharSetParse(String, serde_json::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
