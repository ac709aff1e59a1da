//! Integration tests for template rendering and format families.

use parlance::{LocaleRegistry, RenderError, render_args};

// A minimal locale exercising override precedence. Number tables are
// required by the document schema even when only formats are under test.
const OVERRIDE_LOCALE: &str = r#"{
  "code": "zz",
  "numbers": {
    "digits": { "zero": 0, "one": 1 },
    "hundreds": { "hundred": 100 },
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
  },
  "formats": {
    "year_format": {
      "default": "plain {number}",
      "1": { "match": "7$", "format": "lucky {number}" },
      "2": { "match": "^19", "format": "vintage {number}" }
    }
  }
}"#;

fn registry_with_override_locale() -> LocaleRegistry {
    let mut registry = LocaleRegistry::with_builtin();
    registry.load_str(OVERRIDE_LOCALE).unwrap();
    registry
}

// =========================================================================
// Override Selection
// =========================================================================

#[test]
fn first_matching_override_wins() {
    let registry = registry_with_override_locale();
    let zz = registry.get("zz");

    // "1987" matches both patterns; entry 1 is tried first.
    let args = render_args! { "number" => 1987 };
    assert_eq!(zz.render("year_format", "1987", &args).unwrap(), "lucky 1987");
}

#[test]
fn later_overrides_apply_when_earlier_ones_miss() {
    let registry = registry_with_override_locale();
    let zz = registry.get("zz");

    let args = render_args! { "number" => 1950 };
    assert_eq!(
        zz.render("year_format", "1950", &args).unwrap(),
        "vintage 1950"
    );
}

#[test]
fn default_template_applies_when_nothing_matches() {
    let registry = registry_with_override_locale();
    let zz = registry.get("zz");

    let args = render_args! { "number" => 2024 };
    assert_eq!(zz.render("year_format", "2024", &args).unwrap(), "plain 2024");
}

// =========================================================================
// Substitution and Whitespace
// =========================================================================

#[test]
fn missing_placeholders_collapse_away() {
    let registry = LocaleRegistry::with_builtin();
    let en = registry.get("en");

    // The builtin year_format default carries a {bc} slot; with no bc
    // argument the output has no stray spaces.
    let args = render_args! {
        "formatted_thousand" => "nineteen",
        "formatted_decade" => "eighty four"
    };
    assert_eq!(
        en.render("year_format", "1984", &args).unwrap(),
        "nineteen eighty four"
    );
}

#[test]
fn repeated_whitespace_is_collapsed_and_trimmed() {
    let registry = registry_with_override_locale();
    let zz = registry.get("zz");

    let args = render_args! { "number" => "  spaced  " };
    assert_eq!(zz.render("year_format", "2024", &args).unwrap(), "plain spaced");
}

// =========================================================================
// Unknown Families
// =========================================================================

#[test]
fn unknown_family_errors_with_suggestions() {
    let registry = LocaleRegistry::with_builtin();
    let en = registry.get("en");

    let err = en
        .render("year_fromat", "1984", &render_args! {})
        .unwrap_err();
    match err {
        RenderError::UnknownFamily { name, suggestions } => {
            assert_eq!(name, "year_fromat");
            assert!(suggestions.contains(&"year_format".to_string()));
        }
    }
}

#[test]
fn error_message_names_the_family() {
    let registry = LocaleRegistry::with_builtin();
    let err = registry
        .get("en")
        .render("nonsense", "x", &render_args! {})
        .unwrap_err();
    assert!(err.to_string().contains("nonsense"));
}
