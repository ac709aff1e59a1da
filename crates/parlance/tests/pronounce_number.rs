//! Integration tests for number pronunciation.

use parlance::{LocaleRegistry, PronounceOptions};

fn pronounce(value: f64) -> String {
    let registry = LocaleRegistry::with_builtin();
    registry
        .get("en")
        .pronounce_number(value, &PronounceOptions::default())
}

fn pronounce_with(value: f64, opts: &PronounceOptions) -> String {
    let registry = LocaleRegistry::with_builtin();
    registry.get("en").pronounce_number(value, opts)
}

// =========================================================================
// Cardinals
// =========================================================================

#[test]
fn small_numbers_are_direct_lookups() {
    assert_eq!(pronounce(0.0), "zero");
    assert_eq!(pronounce(7.0), "seven");
    assert_eq!(pronounce(19.0), "nineteen");
}

#[test]
fn tens_and_ones_join_with_a_space() {
    assert_eq!(pronounce(22.0), "twenty two");
    assert_eq!(pronounce(90.0), "ninety");
}

#[test]
fn hundreds_take_the_connector() {
    assert_eq!(pronounce(201.0), "two hundred and one");
    assert_eq!(pronounce(110.0), "one hundred and ten");
    assert_eq!(pronounce(999.0), "nine hundred and ninety nine");
}

#[test]
fn scale_groups_join_most_significant_first() {
    assert_eq!(
        pronounce(4_092_949_192.0),
        "four billion, ninety two million, nine hundred and forty nine thousand, \
         one hundred and ninety two"
    );
}

#[test]
fn empty_groups_are_skipped() {
    assert_eq!(pronounce(4_000_000_192.0), "four billion, one hundred and ninety two");
    assert_eq!(pronounce(1_000_000.0), "one million");
}

#[test]
fn negative_values_take_the_negative_word() {
    assert_eq!(pronounce(-5.0), "negative five");
    assert_eq!(pronounce(-201.0), "negative two hundred and one");
}

// =========================================================================
// Fractional Part
// =========================================================================

#[test]
fn fraction_renders_digit_by_digit() {
    assert_eq!(pronounce(1.5), "one point five");
    assert_eq!(pronounce(0.05), "zero point zero five");
}

#[test]
fn places_bounds_the_fraction() {
    let three = PronounceOptions::builder().places(3).build();
    assert_eq!(pronounce_with(1.234_9, &three), "one point two three five");
    // Rounding may carry into the integer part.
    assert_eq!(pronounce(1.999), "two");
}

#[test]
fn places_zero_drops_the_fraction() {
    let none = PronounceOptions::builder().places(0).build();
    assert_eq!(pronounce_with(2.6, &none), "three");
}

// =========================================================================
// Long Scale
// =========================================================================

#[test]
fn long_scale_billion_is_ten_to_the_twelve() {
    let long = PronounceOptions::builder().short_scale(false).build();
    assert_eq!(pronounce_with(1e12, &long), "one billion");
    assert_eq!(pronounce_with(5e9, &long), "five thousand million");
}

#[test]
fn long_scale_groups_split_through_thousand() {
    let long = PronounceOptions::builder().short_scale(false).build();
    assert_eq!(
        pronounce_with(1_234_567.0, &long),
        "one million, two hundred and thirty four thousand, five hundred and sixty seven"
    );
}

// =========================================================================
// Ordinals
// =========================================================================

#[test]
fn irregular_ordinals_come_from_the_table() {
    let ordinal = PronounceOptions::builder().ordinals(true).build();
    assert_eq!(pronounce_with(1.0, &ordinal), "first");
    assert_eq!(pronounce_with(9.0, &ordinal), "ninth");
    assert_eq!(pronounce_with(12.0, &ordinal), "twelfth");
    assert_eq!(pronounce_with(30.0, &ordinal), "thirtieth");
}

#[test]
fn compound_ordinals_swap_the_final_component() {
    let ordinal = PronounceOptions::builder().ordinals(true).build();
    assert_eq!(pronounce_with(22.0, &ordinal), "twenty second");
    assert_eq!(pronounce_with(123.0, &ordinal), "one hundred twenty third");
}

#[test]
fn scale_ordinals_use_the_table_or_suffix() {
    let ordinal = PronounceOptions::builder().ordinals(true).build();
    assert_eq!(pronounce_with(1_000_000.0, &ordinal), "one millionth");
    assert_eq!(pronounce_with(2_000.0, &ordinal), "two thousandth");
}

#[test]
fn ordinal_mode_omits_the_connector() {
    let ordinal = PronounceOptions::builder().ordinals(true).build();
    assert_eq!(pronounce_with(101.0, &ordinal), "one hundred first");
}

// =========================================================================
// Scientific Form
// =========================================================================

#[test]
fn explicit_scientific_form() {
    let scientific = PronounceOptions::builder().scientific(true).build();
    assert_eq!(
        pronounce_with(1500.0, &scientific),
        "one point five times ten to the power of three"
    );
}

#[test]
fn scientific_handles_negative_exponents() {
    let scientific = PronounceOptions::builder().scientific(true).build();
    assert_eq!(
        pronounce_with(1.672e-27, &scientific),
        "one point six seven times ten to the power of negative twenty seven"
    );
}

#[test]
fn huge_magnitudes_fall_back_to_scientific() {
    assert_eq!(
        pronounce(2e40),
        "two times ten to the power of forty"
    );
}

// =========================================================================
// Non-Finite Values
// =========================================================================

#[test]
fn non_finite_values_render_as_phrases() {
    assert_eq!(pronounce(f64::INFINITY), "infinity");
    assert_eq!(pronounce(f64::NEG_INFINITY), "negative infinity");
    assert_eq!(pronounce(f64::NAN), "not a number");
}

// =========================================================================
// Mixed Fractions
// =========================================================================

#[test]
fn mixed_fraction_with_unit_numerator() {
    let registry = LocaleRegistry::with_builtin();
    let en = registry.get("en");
    assert_eq!(en.pronounce_mixed_fraction(25.0 / 6.0), "4 and a sixth");
    assert_eq!(en.pronounce_mixed_fraction(2.5), "2 and a half");
    assert_eq!(en.pronounce_mixed_fraction(4.125), "4 and an eighth");
}

#[test]
fn mixed_fraction_pluralizes_larger_numerators() {
    let registry = LocaleRegistry::with_builtin();
    let en = registry.get("en");
    assert_eq!(en.pronounce_mixed_fraction(2.75), "2 and 3 quarters");
}

#[test]
fn mixed_fraction_without_whole_part() {
    let registry = LocaleRegistry::with_builtin();
    let en = registry.get("en");
    assert_eq!(en.pronounce_mixed_fraction(0.5), "a half");
}

#[test]
fn mixed_fraction_falls_back_to_decimal_text() {
    let registry = LocaleRegistry::with_builtin();
    let en = registry.get("en");
    assert_eq!(en.pronounce_mixed_fraction(3.0), "3");
    assert_eq!(en.pronounce_mixed_fraction(2.0401), "2.04");
}
