//! Integration tests for year and date formatting.

use chrono::NaiveDate;
use parlance::LocaleRegistry;

fn format_year(year: i32) -> String {
    let registry = LocaleRegistry::with_builtin();
    registry.get("en").format_year(year).unwrap()
}

// =========================================================================
// Year Shapes
// =========================================================================

#[test]
fn four_digit_years_split_into_pairs() {
    assert_eq!(format_year(1984), "nineteen eighty four");
    assert_eq!(format_year(2017), "twenty seventeen");
    assert_eq!(format_year(1066), "ten sixty six");
}

#[test]
fn even_hundreds_read_as_hundreds() {
    assert_eq!(format_year(1900), "nineteen hundred");
    assert_eq!(format_year(900), "nine hundred");
}

#[test]
fn oh_years_take_the_oh_form() {
    assert_eq!(format_year(1907), "nineteen oh seven");
    assert_eq!(format_year(1905), "nineteen oh five");
}

#[test]
fn the_two_thousands_are_special_cased() {
    assert_eq!(format_year(2000), "two thousand");
    assert_eq!(format_year(2005), "two thousand five");
}

#[test]
fn short_years_are_plain_decades() {
    assert_eq!(format_year(25), "twenty five");
    assert_eq!(format_year(7), "seven");
}

#[test]
fn three_digit_years_combine_hundreds_and_decade() {
    assert_eq!(format_year(925), "nine hundred twenty five");
}

#[test]
fn negative_years_carry_the_bc_marker() {
    assert_eq!(format_year(-44), "forty four b.c.");
    assert_eq!(format_year(-1900), "nineteen hundred b.c.");
}

// =========================================================================
// Date Formatting
// =========================================================================

#[test]
fn date_format_composes_the_formatted_year() {
    let registry = LocaleRegistry::with_builtin();
    let date = NaiveDate::from_ymd_opt(2017, 4, 20).unwrap();
    assert_eq!(
        registry.get("en").format_date(date).unwrap(),
        "Thursday, April 20, twenty seventeen"
    );
}

#[test]
fn date_format_uses_monday_first_weekdays() {
    let registry = LocaleRegistry::with_builtin();
    let date = NaiveDate::from_ymd_opt(2024, 5, 13).unwrap();
    assert_eq!(
        registry.get("en").format_date(date).unwrap(),
        "Monday, May 13, twenty twenty four"
    );
}
