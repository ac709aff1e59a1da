//! Integration tests for hemisphere-aware seasons.

use chrono::NaiveDate;
use parlance::calendar::{
    Hemisphere, Season, date_to_season, get_season_range, last_season_date, next_season_date,
    season_to_date,
};

fn day(year: i32, month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, d).unwrap()
}

// =========================================================================
// Season Classification
// =========================================================================

#[test]
fn april_is_spring_in_the_north() {
    assert_eq!(date_to_season(day(2117, 4, 20), Hemisphere::North), Season::Spring);
}

#[test]
fn april_is_fall_in_the_south() {
    assert_eq!(date_to_season(day(2117, 4, 20), Hemisphere::South), Season::Fall);
}

#[test]
fn northern_winter_spans_the_year_boundary() {
    assert_eq!(date_to_season(day(2020, 12, 25), Hemisphere::North), Season::Winter);
    assert_eq!(date_to_season(day(2021, 1, 15), Hemisphere::North), Season::Winter);
    assert_eq!(date_to_season(day(2021, 2, 28), Hemisphere::North), Season::Winter);
}

#[test]
fn southern_summer_spans_the_year_boundary() {
    assert_eq!(date_to_season(day(2020, 12, 25), Hemisphere::South), Season::Summer);
    assert_eq!(date_to_season(day(2021, 1, 15), Hemisphere::South), Season::Summer);
}

// =========================================================================
// Season Ranges
// =========================================================================

#[test]
fn northern_spring_range() {
    let (start, end) = get_season_range(day(2117, 4, 20), Hemisphere::North).unwrap();
    assert_eq!(start, day(2117, 3, 1));
    assert_eq!(end, day(2117, 5, 31));
}

#[test]
fn southern_fall_occupies_the_same_window() {
    let (start, end) = get_season_range(day(2117, 4, 20), Hemisphere::South).unwrap();
    assert_eq!(
        date_to_season(day(2117, 4, 20), Hemisphere::South),
        Season::Fall
    );
    assert_eq!(start, day(2117, 3, 1));
    assert_eq!(end, day(2117, 5, 31));
}

#[test]
fn winter_range_reaches_back_into_the_previous_year() {
    let (start, end) = get_season_range(day(2020, 1, 15), Hemisphere::North).unwrap();
    assert_eq!(start, day(2019, 12, 1));
    assert_eq!(end, day(2020, 2, 29));
}

#[test]
fn winter_range_from_december_stays_in_its_year() {
    let (start, end) = get_season_range(day(2020, 12, 25), Hemisphere::North).unwrap();
    assert_eq!(start, day(2020, 12, 1));
    assert_eq!(end, day(2021, 2, 28));
}

#[test]
fn range_contains_its_date() {
    for &hemisphere in &[Hemisphere::North, Hemisphere::South] {
        for month in 1..=12 {
            let date = day(2022, month, 15);
            let (start, end) = get_season_range(date, hemisphere).unwrap();
            assert!(start <= date && date <= end);
        }
    }
}

// =========================================================================
// Season Navigation
// =========================================================================

#[test]
fn season_to_date_uses_the_reference_year() {
    assert_eq!(
        season_to_date(Season::Spring, Hemisphere::North, day(2022, 8, 1)).unwrap(),
        day(2022, 3, 1)
    );
    assert_eq!(
        season_to_date(Season::Summer, Hemisphere::South, day(2022, 8, 1)).unwrap(),
        day(2022, 12, 1)
    );
}

#[test]
fn next_season_walks_forward_when_passed() {
    assert_eq!(
        next_season_date(Season::Spring, Hemisphere::North, day(2020, 6, 1)).unwrap(),
        day(2021, 3, 1)
    );
    assert_eq!(
        next_season_date(Season::Fall, Hemisphere::North, day(2020, 6, 1)).unwrap(),
        day(2020, 9, 1)
    );
}

#[test]
fn last_season_walks_back_when_not_yet_arrived() {
    assert_eq!(
        last_season_date(Season::Winter, Hemisphere::North, day(2020, 1, 15)).unwrap(),
        day(2019, 12, 1)
    );
    assert_eq!(
        last_season_date(Season::Spring, Hemisphere::North, day(2020, 6, 1)).unwrap(),
        day(2020, 3, 1)
    );
}

#[test]
fn season_start_on_the_reference_date_counts_as_current() {
    assert_eq!(
        next_season_date(Season::Spring, Hemisphere::North, day(2020, 3, 1)).unwrap(),
        day(2020, 3, 1)
    );
    assert_eq!(
        last_season_date(Season::Spring, Hemisphere::North, day(2020, 3, 1)).unwrap(),
        day(2020, 3, 1)
    );
}
