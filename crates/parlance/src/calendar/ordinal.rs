//! Ordinal calendar arithmetic.
//!
//! Maps an ordinal index plus a granularity to a concrete point in time.
//! Absolute and epoch-relative regimes count periods from a fixed start;
//! composite regimes first locate the containing period of the reference
//! date, then index units inside it.

use chrono::{Datelike, Days, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::error::OrdinalError;
use super::resolution::{ContainingPeriod, Epoch, Resolution, TimeUnit};
use super::season::season_cycle;

/// Resolve an ordinal request to a point in time.
///
/// `n` is 1-based: `n == 1` is the period start (for absolute regimes, the
/// epoch itself, whatever the reference date is). `n == -1` means "the last
/// such period", which exists only inside a bounded containing period.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use parlance::calendar::{Resolution, TimeUnit, get_ordinal};
///
/// let reference = NaiveDate::from_ymd_opt(2017, 6, 30)
///     .unwrap()
///     .and_hms_opt(0, 0, 0)
///     .unwrap();
/// let first_day = get_ordinal(1, reference, Resolution::Absolute(TimeUnit::Day)).unwrap();
/// assert_eq!(first_day.date(), NaiveDate::from_ymd_opt(1, 1, 1).unwrap());
/// ```
pub fn get_ordinal(
    n: i64,
    reference: NaiveDateTime,
    resolution: Resolution,
) -> Result<NaiveDateTime, OrdinalError> {
    if n == 0 || n < -1 {
        return Err(OrdinalError::InvalidOrdinal { n });
    }

    match resolution {
        Resolution::Absolute(unit) => {
            if n == -1 {
                return Err(OrdinalError::UnboundedLast { resolution });
            }
            advance(gregorian_epoch()?, unit, n - 1)
        }
        Resolution::FromEpoch(epoch, unit) => {
            if n == -1 {
                return Err(OrdinalError::UnboundedLast { resolution });
            }
            advance(epoch_start(epoch)?, unit, n - 1)
        }
        Resolution::Within(unit, period) => {
            if unit.rank() >= period.rank() {
                return Err(OrdinalError::InvalidResolution { unit, period });
            }
            let (start, end_exclusive) = containing_period(reference, period)?;
            if n == -1 {
                last_unit(end_exclusive, unit)
            } else if unit == TimeUnit::Weekend {
                let first = saturday_on_or_after(start.date())?.and_time(start.time());
                advance(first, TimeUnit::Week, n - 1)
            } else {
                advance(start, unit, n - 1)
            }
        }
        Resolution::SeasonOfYear(hemisphere) => {
            let cycle = season_cycle(hemisphere);
            let index = if n == -1 { 3 } else { n - 1 };
            let Ok(index) = usize::try_from(index) else {
                return Err(OrdinalError::InvalidOrdinal { n });
            };
            let Some(&(_, month)) = cycle.get(index) else {
                return Err(OrdinalError::InvalidOrdinal { n });
            };
            let date = NaiveDate::from_ymd_opt(reference.year(), month, 1)
                .ok_or(OrdinalError::Overflow)?;
            Ok(date.and_time(NaiveTime::MIN))
        }
    }
}

/// The inclusive-start/exclusive-end boundaries of the period containing
/// the reference date.
pub(crate) fn containing_period(
    reference: NaiveDateTime,
    period: ContainingPeriod,
) -> Result<(NaiveDateTime, NaiveDateTime), OrdinalError> {
    let date = reference.date();
    match period {
        ContainingPeriod::Hour => {
            let start = date
                .and_hms_opt(reference.hour(), 0, 0)
                .ok_or(OrdinalError::Overflow)?;
            Ok((start, checked_add(start, Duration::hours(1))?))
        }
        ContainingPeriod::Day => {
            let start = date.and_time(NaiveTime::MIN);
            Ok((start, checked_add(start, Duration::days(1))?))
        }
        ContainingPeriod::Week => {
            let start = monday_of(date)?.and_time(NaiveTime::MIN);
            Ok((start, checked_add(start, Duration::days(7))?))
        }
        ContainingPeriod::Weekend => {
            let saturday = monday_of(date)?
                .checked_add_days(Days::new(5))
                .ok_or(OrdinalError::Overflow)?;
            let start = saturday.and_time(NaiveTime::MIN);
            Ok((start, checked_add(start, Duration::days(2))?))
        }
        ContainingPeriod::Month => {
            let start = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
                .ok_or(OrdinalError::Overflow)?
                .and_time(NaiveTime::MIN);
            let end = start
                .checked_add_months(Months::new(1))
                .ok_or(OrdinalError::Overflow)?;
            Ok((start, end))
        }
        ContainingPeriod::Year => year_span(date.year(), 1),
        ContainingPeriod::Decade => year_span(floor_to(date.year(), 10), 10),
        ContainingPeriod::Century => year_span(floor_to(date.year(), 100), 100),
        ContainingPeriod::Millennium => year_span(floor_to(date.year(), 1000), 1000),
    }
}

/// The last unit before an exclusive end boundary: one unit back, with
/// weekends snapping to their Saturday.
fn last_unit(end_exclusive: NaiveDateTime, unit: TimeUnit) -> Result<NaiveDateTime, OrdinalError> {
    if unit == TimeUnit::Weekend {
        let before_end = end_exclusive
            .date()
            .checked_sub_days(Days::new(1))
            .ok_or(OrdinalError::Overflow)?;
        return Ok(saturday_on_or_before(before_end)?.and_time(NaiveTime::MIN));
    }
    advance(end_exclusive, unit, -1)
}

/// Step a start point forward (or back) by `k` units.
fn advance(start: NaiveDateTime, unit: TimeUnit, k: i64) -> Result<NaiveDateTime, OrdinalError> {
    match unit {
        TimeUnit::Microsecond => checked_add(start, Duration::microseconds(k)),
        TimeUnit::Millisecond => {
            checked_add(start, Duration::try_milliseconds(k).ok_or(OrdinalError::Overflow)?)
        }
        TimeUnit::Second => {
            checked_add(start, Duration::try_seconds(k).ok_or(OrdinalError::Overflow)?)
        }
        TimeUnit::Minute => {
            checked_add(start, Duration::try_minutes(k).ok_or(OrdinalError::Overflow)?)
        }
        TimeUnit::Hour => {
            checked_add(start, Duration::try_hours(k).ok_or(OrdinalError::Overflow)?)
        }
        TimeUnit::Day => {
            checked_add(start, Duration::try_days(k).ok_or(OrdinalError::Overflow)?)
        }
        TimeUnit::Week | TimeUnit::Weekend => {
            checked_add(start, Duration::try_weeks(k).ok_or(OrdinalError::Overflow)?)
        }
        TimeUnit::Month => add_months(start, k),
        TimeUnit::Year => add_years(start, k),
        TimeUnit::Decade => add_years(start, k.checked_mul(10).ok_or(OrdinalError::Overflow)?),
        TimeUnit::Century => add_years(start, k.checked_mul(100).ok_or(OrdinalError::Overflow)?),
        TimeUnit::Millennium => {
            add_years(start, k.checked_mul(1000).ok_or(OrdinalError::Overflow)?)
        }
    }
}

fn checked_add(start: NaiveDateTime, delta: Duration) -> Result<NaiveDateTime, OrdinalError> {
    start.checked_add_signed(delta).ok_or(OrdinalError::Overflow)
}

fn add_months(start: NaiveDateTime, k: i64) -> Result<NaiveDateTime, OrdinalError> {
    if k >= 0 {
        let months = u32::try_from(k).map_err(|_| OrdinalError::Overflow)?;
        start
            .checked_add_months(Months::new(months))
            .ok_or(OrdinalError::Overflow)
    } else {
        let months = u32::try_from(-k).map_err(|_| OrdinalError::Overflow)?;
        start
            .checked_sub_months(Months::new(months))
            .ok_or(OrdinalError::Overflow)
    }
}

fn add_years(start: NaiveDateTime, years: i64) -> Result<NaiveDateTime, OrdinalError> {
    let year = i64::from(start.year())
        .checked_add(years)
        .ok_or(OrdinalError::Overflow)?;
    let year = i32::try_from(year).map_err(|_| OrdinalError::Overflow)?;
    let date = start.date().with_year(year).ok_or(OrdinalError::Overflow)?;
    Ok(date.and_time(start.time()))
}

/// Inclusive start and exclusive end of a span of whole years.
fn year_span(start_year: i32, length: i32) -> Result<(NaiveDateTime, NaiveDateTime), OrdinalError> {
    let start = NaiveDate::from_ymd_opt(start_year, 1, 1)
        .ok_or(OrdinalError::Overflow)?
        .and_time(NaiveTime::MIN);
    let end_year = start_year.checked_add(length).ok_or(OrdinalError::Overflow)?;
    let end = NaiveDate::from_ymd_opt(end_year, 1, 1)
        .ok_or(OrdinalError::Overflow)?
        .and_time(NaiveTime::MIN);
    Ok((start, end))
}

/// First year of the `length`-year period containing `year`, by euclidean
/// floor division so proleptic negative years land in the right period.
pub(crate) fn floor_to(year: i32, length: i32) -> i32 {
    year.div_euclid(length) * length
}

pub(crate) fn monday_of(date: NaiveDate) -> Result<NaiveDate, OrdinalError> {
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back)).ok_or(OrdinalError::Overflow)
}

fn saturday_on_or_after(date: NaiveDate) -> Result<NaiveDate, OrdinalError> {
    // Saturday is five days past Monday.
    let forward = u64::from((5 + 7 - date.weekday().num_days_from_monday()) % 7);
    date.checked_add_days(Days::new(forward)).ok_or(OrdinalError::Overflow)
}

fn saturday_on_or_before(date: NaiveDate) -> Result<NaiveDate, OrdinalError> {
    let back = u64::from((date.weekday().num_days_from_monday() + 7 - 5) % 7);
    date.checked_sub_days(Days::new(back)).ok_or(OrdinalError::Overflow)
}

/// 0001-01-01 00:00, the start of the absolute regimes.
fn gregorian_epoch() -> Result<NaiveDateTime, OrdinalError> {
    Ok(NaiveDate::from_ymd_opt(1, 1, 1)
        .ok_or(OrdinalError::Overflow)?
        .and_time(NaiveTime::MIN))
}

/// Start datetime of an alternate epoch.
fn epoch_start(epoch: Epoch) -> Result<NaiveDateTime, OrdinalError> {
    let (year, month, day, hour) = match epoch {
        Epoch::Julian | Epoch::HeliocentricJulian | Epoch::BarycentricJulian => {
            (-4713, 11, 24, 12)
        }
        Epoch::Unix => (1970, 1, 1, 0),
        Epoch::Lilian => (1582, 10, 15, 0),
        Epoch::RataDie => (1, 1, 1, 0),
    };
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .ok_or(OrdinalError::Overflow)
}
