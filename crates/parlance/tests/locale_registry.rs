//! Integration tests for locale loading and the registry.

use std::io::Write;

use parlance::{ExtractOptions, LoadError, LocaleRegistry};
use tempfile::NamedTempFile;

const MINIMAL_LOCALE: &str = r#"{
  "code": "zz",
  "numbers": {
    "digits": { "zero": 0, "one": 1, "two": 2 },
    "hundreds": { "hundred": 100 },
    "short_scale": { "thousand": 1e3 },
    "decimal_word": "point",
    "negative_word": "negative",
    "connector_word": "and",
    "ordinal_suffix": "th",
    "infinity_word": "infinity",
    "not_a_number": "not a number",
    "scientific": "{mantissa} e {exponent}",
    "bc_word": "bc",
    "article": "a",
    "article_before_vowel": "an"
  }
}"#;

// =========================================================================
// Builtin and Fallback
// =========================================================================

#[test]
fn builtin_registry_serves_english() {
    let registry = LocaleRegistry::with_builtin();
    assert_eq!(registry.default_code(), "en");
    assert!(registry.contains("en"));
    assert_eq!(registry.get("en").code(), "en");
}

#[test]
fn unknown_codes_fall_back_to_the_default() {
    let registry = LocaleRegistry::with_builtin();
    let locale = registry.get("xx-YY");
    assert_eq!(locale.code(), "en");
}

#[test]
fn fallback_locale_still_extracts() {
    let registry = LocaleRegistry::with_builtin();
    let numbers = registry
        .get("xx")
        .extract_numbers("five and six", &ExtractOptions::default());
    assert_eq!(numbers, [5.0, 6.0]);
}

// =========================================================================
// Loading
// =========================================================================

#[test]
fn load_str_registers_under_the_document_code() {
    let mut registry = LocaleRegistry::with_builtin();
    let code = registry.load_str(MINIMAL_LOCALE).unwrap();
    assert_eq!(code, "zz");
    assert!(registry.contains("zz"));
    assert_eq!(registry.get("zz").code(), "zz");
}

#[test]
fn loading_the_same_code_replaces_the_locale() {
    let mut registry = LocaleRegistry::with_builtin();
    registry.load_str(MINIMAL_LOCALE).unwrap();

    let altered = MINIMAL_LOCALE.replace("\"two\": 2", "\"deux\": 2");
    registry.load_str(&altered).unwrap();

    let zz = registry.get("zz");
    let found = zz.extract_numbers("deux", &ExtractOptions::default());
    assert_eq!(found, [2.0]);
    assert!(zz.extract_numbers("two", &ExtractOptions::default()).is_empty());
}

#[test]
fn load_file_round_trips_through_disk() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(MINIMAL_LOCALE.as_bytes()).unwrap();

    let mut registry = LocaleRegistry::with_builtin();
    let code = registry.load_file(file.path()).unwrap();
    assert_eq!(code, "zz");
}

#[test]
fn missing_file_is_an_io_error() {
    let mut registry = LocaleRegistry::with_builtin();
    let result = registry.load_file("/definitely/not/here.json");
    assert!(matches!(result, Err(LoadError::Io { .. })));
}

#[test]
fn malformed_json_reports_position() {
    let mut registry = LocaleRegistry::with_builtin();
    let result = registry.load_str("{ not json");
    assert!(matches!(result, Err(LoadError::Parse { .. })));
}

#[test]
fn codes_lists_loaded_locales() {
    let mut registry = LocaleRegistry::with_builtin();
    registry.load_str(MINIMAL_LOCALE).unwrap();
    let codes: Vec<&str> = registry.codes().collect();
    assert_eq!(codes, ["en", "zz"]);
}

// =========================================================================
// Document Validation
// =========================================================================

#[test]
fn scale_words_must_be_powers_of_ten() {
    let mut registry = LocaleRegistry::with_builtin();
    let bad = MINIMAL_LOCALE.replace("\"thousand\": 1e3", "\"thousand\": 500");
    let result = registry.load_str(&bad);
    assert!(matches!(result, Err(LoadError::BadScaleWord { .. })));
}

#[test]
fn scale_words_below_one_thousand_are_rejected() {
    let mut registry = LocaleRegistry::with_builtin();
    let bad = MINIMAL_LOCALE.replace("\"thousand\": 1e3", "\"thousand\": 100");
    let result = registry.load_str(&bad);
    assert!(matches!(result, Err(LoadError::BadScaleWord { .. })));
}

#[test]
fn family_without_default_is_rejected() {
    let mut registry = LocaleRegistry::with_builtin();
    let bad = MINIMAL_LOCALE.replace(
        "\"code\": \"zz\",",
        r#""code": "zz",
           "formats": { "year_format": { "1": { "match": "x", "format": "y" } } },"#,
    );
    let result = registry.load_str(&bad);
    assert!(matches!(
        result,
        Err(LoadError::MissingDefaultTemplate { .. })
    ));
}

#[test]
fn bad_override_pattern_is_rejected() {
    let mut registry = LocaleRegistry::with_builtin();
    let bad = MINIMAL_LOCALE.replace(
        "\"code\": \"zz\",",
        r#""code": "zz",
           "formats": { "year_format": {
             "default": "x",
             "1": { "match": "(unclosed", "format": "y" }
           } },"#,
    );
    let result = registry.load_str(&bad);
    assert!(matches!(result, Err(LoadError::BadPattern { .. })));
}

#[test]
fn word_lists_must_have_the_right_length() {
    let mut registry = LocaleRegistry::with_builtin();
    let bad = MINIMAL_LOCALE.replace(
        "\"code\": \"zz\",",
        r#""code": "zz", "weekdays": ["Mon", "Tue"],"#,
    );
    let result = registry.load_str(&bad);
    assert!(matches!(result, Err(LoadError::BadWordList { .. })));
}
