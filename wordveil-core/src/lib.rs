// wordveil-core/src/lib.rs
//! # Wordveil Core Library
//!
//! `wordveil-core` provides the fundamental, platform-independent logic for
//! leetspeak-style text obfuscation. It defines the substitution-table
//! ("charset") data model, validates and merges untrusted tables with
//! order-independent semantics, and performs word-boundary-aware,
//! length-preserving character substitution over input text.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation of input text based on merged charsets, without concerns
//! for I/O or application-specific state management. Randomness is always
//! injected by the caller, so every operation can be made deterministic with
//! a seeded generator.
//!
//! ## Modules
//!
//! * `charset`: Defines [`RawCharSet`]/[`MergedCharSet`] and the validate/merge logic.
//! * `catalog`: The built-in charset collaborator ([`CharSetCatalog`]) and file loading.
//! * `substitutor`: Phrase validation and word-scoped, position-correct censoring.
//! * `oneshot`: One-shot convenience wrappers wiring catalog, merge, and substitutor.
//! * `errors`: The [`VeilError`] taxonomy for clear, typed error reporting.
//!
//! ## Usage Example
//!
//! ```rust
//! use wordveil_core::{substitute, CharSetCatalog, SubstituteOptions};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Build the catalog of built-in charsets once per process.
//!     let catalog = CharSetCatalog::builtin()?;
//!
//!     // 2. Censor only whole-word occurrences of "free".
//!     let options = SubstituteOptions::new("Palestine will be free! Freedom is the right of ALL nations!")
//!         .with_phrases(vec!["free".to_string()]);
//!
//!     // 3. Run the substitution in a single call.
//!     let obfuscated = substitute(&catalog, &options)?;
//!     assert_eq!(obfuscated.chars().count(), options.text.chars().count());
//!     assert!(obfuscated.contains("Freedom"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`VeilError`], which names the offending
//! charset fragment, phrase, or charset name. Validation is eager: the first
//! invalid input aborts the whole call before any output is produced.
//!
//! ## Design Principles
//!
//! * **Stateless:** No global mutable state; the catalog is an explicit
//!   collaborator passed into each call.
//! * **Deterministic merging:** Merged tables are identical regardless of
//!   the order source tables are supplied in.
//! * **Injected randomness:** Every randomized operation is generic over
//!   `rand::Rng`, so callers choose between ambient and seeded generators.
//! * **Testable:** Logic is easily unit-testable in isolation.
//!
//! ---
//! License: MIT OR Apache-2.0

// All modules must be declared before they can be used.
pub mod catalog;
pub mod charset;
pub mod errors;
pub mod oneshot;
pub mod substitutor;

/// Re-exports the charset model types and functions for validating and
/// merging substitution tables.
pub use charset::{check_charset, is_charset_valid, merge_charsets, MergedCharSet, RawCharSet};

/// Re-exports the custom error type for clear error reporting.
pub use errors::VeilError;

/// Re-exports the built-in charset catalog collaborator.
pub use catalog::{load_charset_file, CharSetCatalog, LATIN, LATIN_1};

/// Re-exports the substitution engine and phrase validation.
pub use substitutor::{is_phrase_valid, Substitutor, MAX_PHRASE_LENGTH};

/// Re-exports types and functions for one-shot, non-interactive use.
pub use oneshot::{substitute, substitute_with_rng, CharSetSpec, SubstituteOptions};
