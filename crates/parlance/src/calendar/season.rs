//! Hemisphere-aware meteorological seasons.
//!
//! Each season is a fixed three-month window per hemisphere. In the north,
//! winter spans the calendar-year boundary (December through February); in
//! the south, summer does.

use chrono::{Datelike, Days, Months, NaiveDate};

use super::error::OrdinalError;
use super::resolution::{Hemisphere, Season};

/// The four seasons in start-month order within a calendar year.
pub(crate) fn season_cycle(hemisphere: Hemisphere) -> [(Season, u32); 4] {
    match hemisphere {
        Hemisphere::North => [
            (Season::Spring, 3),
            (Season::Summer, 6),
            (Season::Fall, 9),
            (Season::Winter, 12),
        ],
        Hemisphere::South => [
            (Season::Fall, 3),
            (Season::Winter, 6),
            (Season::Spring, 9),
            (Season::Summer, 12),
        ],
    }
}

/// Month in which a season begins for a hemisphere.
fn season_start_month(season: Season, hemisphere: Hemisphere) -> u32 {
    season_cycle(hemisphere)
        .iter()
        .find(|&&(s, _)| s == season)
        .map(|&(_, month)| month)
        .unwrap_or(3)
}

/// The season a date falls in.
pub fn date_to_season(date: NaiveDate, hemisphere: Hemisphere) -> Season {
    match (hemisphere, date.month()) {
        (Hemisphere::North, 3..=5) => Season::Spring,
        (Hemisphere::North, 6..=8) => Season::Summer,
        (Hemisphere::North, 9..=11) => Season::Fall,
        (Hemisphere::North, _) => Season::Winter,
        (Hemisphere::South, 3..=5) => Season::Fall,
        (Hemisphere::South, 6..=8) => Season::Winter,
        (Hemisphere::South, 9..=11) => Season::Spring,
        (Hemisphere::South, _) => Season::Summer,
    }
}

/// Start date of a season in the reference date's calendar year.
pub fn season_to_date(
    season: Season,
    hemisphere: Hemisphere,
    reference: NaiveDate,
) -> Result<NaiveDate, OrdinalError> {
    let month = season_start_month(season, hemisphere);
    NaiveDate::from_ymd_opt(reference.year(), month, 1).ok_or(OrdinalError::Overflow)
}

/// Next start of a season on or after the reference date.
pub fn next_season_date(
    season: Season,
    hemisphere: Hemisphere,
    reference: NaiveDate,
) -> Result<NaiveDate, OrdinalError> {
    let start = season_to_date(season, hemisphere, reference)?;
    if start < reference {
        start
            .with_year(reference.year().checked_add(1).ok_or(OrdinalError::Overflow)?)
            .ok_or(OrdinalError::Overflow)
    } else {
        Ok(start)
    }
}

/// Most recent start of a season on or before the reference date.
pub fn last_season_date(
    season: Season,
    hemisphere: Hemisphere,
    reference: NaiveDate,
) -> Result<NaiveDate, OrdinalError> {
    let start = season_to_date(season, hemisphere, reference)?;
    if start > reference {
        start
            .with_year(reference.year().checked_sub(1).ok_or(OrdinalError::Overflow)?)
            .ok_or(OrdinalError::Overflow)
    } else {
        Ok(start)
    }
}

/// Inclusive first and last day of the season containing `date`.
///
/// For a northern-hemisphere January date the range starts in the previous
/// calendar year's December.
pub fn get_season_range(
    date: NaiveDate,
    hemisphere: Hemisphere,
) -> Result<(NaiveDate, NaiveDate), OrdinalError> {
    let season = date_to_season(date, hemisphere);
    let start_month = season_start_month(season, hemisphere);
    let start_year = if date.month() < start_month {
        date.year().checked_sub(1).ok_or(OrdinalError::Overflow)?
    } else {
        date.year()
    };
    let start = NaiveDate::from_ymd_opt(start_year, start_month, 1)
        .ok_or(OrdinalError::Overflow)?;
    let end = start
        .checked_add_months(Months::new(3))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .ok_or(OrdinalError::Overflow)?;
    Ok((start, end))
}
