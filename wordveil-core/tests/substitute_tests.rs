// wordveil-core/tests/substitute_tests.rs
//! End-to-end tests for the one-shot substitution API: whole-text censoring,
//! phrase scoping, case sensitivity, charset selection, and failure modes.

use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::RegexBuilder;
use wordveil_core::{
    substitute, substitute_with_rng, CharSetCatalog, CharSetSpec, RawCharSet, SubstituteOptions,
    VeilError,
};

const TEXT: &str = "Palestine will be free! Freedom is the right of ALL nations!";

fn catalog() -> CharSetCatalog {
    CharSetCatalog::builtin().unwrap()
}

fn raw(pairs: &[(&str, &[&str])]) -> RawCharSet {
    pairs
        .iter()
        .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
        .collect()
}

#[test_log::test]
fn censors_the_whole_text_by_default() {
    let result = substitute(&catalog(), &SubstituteOptions::new(TEXT)).unwrap();

    assert_ne!(result, "");
    assert_ne!(result, TEXT);
    assert!(!result.contains("will be"));
    assert_eq!(result.chars().count(), TEXT.chars().count());
}

#[test]
fn phrase_scoping_leaves_other_words_untouched() {
    for (phrase, unaffected) in [("palestine", "will be"), ("free", "Freedom")] {
        let options =
            SubstituteOptions::new(TEXT).with_phrases(vec![phrase.to_string()]);
        let result = substitute(&catalog(), &options).unwrap();

        assert!(result.contains(unaffected), "{phrase}: {result}");

        let whole_word = RegexBuilder::new(&format!(r"\b{phrase}\b"))
            .case_insensitive(true)
            .build()
            .unwrap();
        assert!(!whole_word.is_match(&result), "{phrase}: {result}");
        assert_eq!(result.chars().count(), TEXT.chars().count());
    }
}

#[test]
fn case_sensitive_upper_half() {
    let options = SubstituteOptions::new("AABBCCDDz").with_case_sensitive(true);
    let result = substitute(&catalog(), &options).unwrap();

    for expected in ['4', '8', 'D', 'z'] {
        assert!(result.contains(expected), "{result}");
    }
    for forbidden in ['@', 'B', 'C', '2'] {
        assert!(!result.contains(forbidden), "{result}");
    }
    assert_eq!(result.chars().count(), 9);
}

#[test]
fn case_sensitive_lower_half() {
    let options = SubstituteOptions::new("aabbccddZ").with_case_sensitive(true);
    let result = substitute(&catalog(), &options).unwrap();

    for expected in ['@', '6', 'c', 'd', '2'] {
        assert!(result.contains(expected), "{result}");
    }
    for forbidden in ['4', '8', 'D', 'z'] {
        assert!(!result.contains(forbidden), "{result}");
    }
    assert_eq!(result.chars().count(), 9);
}

#[test]
fn unmatched_phrases_return_the_text_unchanged() {
    let options = SubstituteOptions::new(TEXT).with_phrases(vec!["foo".to_string()]);
    assert_eq!(substitute(&catalog(), &options).unwrap(), TEXT);
}

#[test]
fn empty_text_yields_empty_output() {
    assert_eq!(substitute(&catalog(), &SubstituteOptions::new("")).unwrap(), "");
}

#[test_log::test]
fn empty_phrase_list_censors_everything() {
    let options = SubstituteOptions::new(TEXT).with_phrases(Vec::new());
    let result = substitute(&catalog(), &options).unwrap();
    assert_ne!(result, TEXT);
    assert_eq!(result.chars().count(), TEXT.chars().count());
}

#[test]
fn invalid_phrases_are_rejected() {
    let long = "a".repeat(31);
    let invalid = [
        "", " ", "          ", "\n", "a\n", "\t", "a\t", long.as_str(), "th!s symbo|", "\\",
    ];

    for phrase in invalid {
        let options = SubstituteOptions::new(TEXT).with_phrases(vec![phrase.to_string()]);
        let err = substitute(&catalog(), &options).unwrap_err();
        assert!(
            matches!(&err, VeilError::InvalidPhrase(p) if p == phrase),
            "{phrase:?} -> {err}"
        );
    }
}

#[test]
fn latin_1_charset_substitutes_its_own_keys_only() {
    let options = SubstituteOptions::new("AaBbCcDdXxZz")
        .with_charsets(vec![CharSetSpec::builtin("latin-1")]);
    let result = substitute(&catalog(), &options).unwrap();

    for expected in ['\u{df}', '\u{d7}', 'Z', 'z'] {
        assert!(result.contains(expected), "{result}");
    }
    for forbidden in ['A', 'a', 'B', 'b', 'C', 'c', 'D', 'd', 'X', 'x'] {
        assert!(!result.contains(forbidden), "{result}");
    }
    assert_eq!(result.chars().count(), 12);
}

#[test]
fn merged_builtin_charsets_cover_all_keys() {
    let options = SubstituteOptions::new("AaBbCcDdXxZz").with_charsets(vec![
        CharSetSpec::builtin("latin"),
        CharSetSpec::builtin("latin-1"),
    ]);
    let result = substitute(&catalog(), &options).unwrap();

    for expected in ['\u{d7}', '2'] {
        assert!(result.contains(expected), "{result}");
    }
    for forbidden in ['A', 'a', 'B', 'b', 'C', 'c', 'D', 'd', 'X', 'x', 'Z', 'z'] {
        assert!(!result.contains(forbidden), "{result}");
    }
}

#[test]
fn custom_charset_substitutes_its_own_keys_only() {
    let custom = raw(&[("a", &["b", "c"]), ("x", &["y", "z"])]);
    let options = SubstituteOptions::new("AaBbCcDdXxZz")
        .with_charsets(vec![CharSetSpec::Custom(custom)]);
    let result = substitute(&catalog(), &options).unwrap();

    for expected in ['B', 'b', 'C', 'c', 'D', 'd', 'Z', 'z'] {
        assert!(result.contains(expected), "{result}");
    }
    for forbidden in ['A', 'a', 'X', 'x'] {
        assert!(!result.contains(forbidden), "{result}");
    }
}

#[test]
fn unknown_charset_name_fails() {
    let options =
        SubstituteOptions::new("x").with_charsets(vec![CharSetSpec::builtin("doesnotexist")]);
    let err = substitute(&catalog(), &options).unwrap_err();
    assert!(matches!(err, VeilError::UnknownCharSet(name) if name == "doesnotexist"));
}

#[test]
fn seeded_runs_are_reproducible() {
    let catalog = catalog();
    let options = SubstituteOptions::new(TEXT).with_charsets(vec![
        CharSetSpec::builtin("latin"),
        CharSetSpec::builtin("latin-1"),
    ]);

    let mut first_rng = StdRng::seed_from_u64(42);
    let mut second_rng = StdRng::seed_from_u64(42);
    let first = substitute_with_rng(&catalog, &options, &mut first_rng).unwrap();
    let second = substitute_with_rng(&catalog, &options, &mut second_rng).unwrap();

    assert_eq!(first, second);
}

#[test]
fn multibyte_replacements_preserve_char_count() {
    let options = SubstituteOptions::new("Aaaa Bbbb Cccc")
        .with_charsets(vec![CharSetSpec::builtin("latin-1")]);
    let result = substitute(&catalog(), &options).unwrap();
    assert_eq!(result.chars().count(), 14);
    assert!(result.len() > 14);
}
