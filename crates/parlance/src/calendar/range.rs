//! Inclusive range boundaries for the period containing a date.
//!
//! Every function returns `(start, end)` with `start <= d <= end` for the
//! input date `d` (weekends excepted: a weekday's weekend lies ahead of
//! it). Variable period lengths come from the calendar itself: a month's
//! end is the next month's first day minus one day.

use chrono::{Datelike, Days, Months, NaiveDate};

use super::error::OrdinalError;
use super::ordinal::{floor_to, monday_of};

/// Monday through Sunday of the week containing `date`.
pub fn get_week_range(date: NaiveDate) -> Result<(NaiveDate, NaiveDate), OrdinalError> {
    let start = monday_of(date)?;
    let end = start.checked_add_days(Days::new(6)).ok_or(OrdinalError::Overflow)?;
    Ok((start, end))
}

/// Saturday and Sunday of the week containing `date`.
pub fn get_weekend_range(date: NaiveDate) -> Result<(NaiveDate, NaiveDate), OrdinalError> {
    let monday = monday_of(date)?;
    let saturday = monday.checked_add_days(Days::new(5)).ok_or(OrdinalError::Overflow)?;
    let sunday = monday.checked_add_days(Days::new(6)).ok_or(OrdinalError::Overflow)?;
    Ok((saturday, sunday))
}

/// First and last day of the month containing `date`.
pub fn get_month_range(date: NaiveDate) -> Result<(NaiveDate, NaiveDate), OrdinalError> {
    let start = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .ok_or(OrdinalError::Overflow)?;
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .ok_or(OrdinalError::Overflow)?;
    Ok((start, end))
}

/// January 1 and December 31 of the year containing `date`.
pub fn get_year_range(date: NaiveDate) -> Result<(NaiveDate, NaiveDate), OrdinalError> {
    year_block(date.year(), 1)
}

/// The ten-year block containing `date`, aligned to multiples of ten.
pub fn get_decade_range(date: NaiveDate) -> Result<(NaiveDate, NaiveDate), OrdinalError> {
    year_block(floor_to(date.year(), 10), 10)
}

/// The hundred-year block containing `date`, aligned to multiples of one
/// hundred.
pub fn get_century_range(date: NaiveDate) -> Result<(NaiveDate, NaiveDate), OrdinalError> {
    year_block(floor_to(date.year(), 100), 100)
}

/// The thousand-year block containing `date`.
pub fn get_millennium_range(date: NaiveDate) -> Result<(NaiveDate, NaiveDate), OrdinalError> {
    year_block(floor_to(date.year(), 1000), 1000)
}

fn year_block(start_year: i32, length: i32) -> Result<(NaiveDate, NaiveDate), OrdinalError> {
    let start = NaiveDate::from_ymd_opt(start_year, 1, 1).ok_or(OrdinalError::Overflow)?;
    let end_year = start_year
        .checked_add(length - 1)
        .ok_or(OrdinalError::Overflow)?;
    let end = NaiveDate::from_ymd_opt(end_year, 12, 31).ok_or(OrdinalError::Overflow)?;
    Ok((start, end))
}
