//! Calendar granularity tags.
//!
//! The granularity space is a few hundred combinations, organized as a
//! nested tagged union with an explicit family discriminant rather than one
//! flat enum: absolute units counted from year 1, the same units counted
//! from alternate epochs, composite "unit within containing period" pairs,
//! and hemisphere-qualified seasons.

use serde::{Deserialize, Serialize};

/// A calendar or clock unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Weekend,
    Month,
    Year,
    Decade,
    Century,
    Millennium,
}

impl TimeUnit {
    /// Coarse ordering rank, used to check that a unit subdivides its
    /// containing period. Weekends rank with weeks.
    pub(crate) fn rank(self) -> u8 {
        match self {
            TimeUnit::Microsecond => 0,
            TimeUnit::Millisecond => 1,
            TimeUnit::Second => 2,
            TimeUnit::Minute => 3,
            TimeUnit::Hour => 4,
            TimeUnit::Day => 5,
            TimeUnit::Week | TimeUnit::Weekend => 6,
            TimeUnit::Month => 7,
            TimeUnit::Year => 8,
            TimeUnit::Decade => 9,
            TimeUnit::Century => 10,
            TimeUnit::Millennium => 11,
        }
    }
}

/// A period that can contain smaller units in a composite granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainingPeriod {
    Hour,
    Day,
    Week,
    Weekend,
    Month,
    Year,
    Decade,
    Century,
    Millennium,
}

impl ContainingPeriod {
    pub(crate) fn rank(self) -> u8 {
        match self {
            ContainingPeriod::Hour => 4,
            ContainingPeriod::Day => 5,
            ContainingPeriod::Week | ContainingPeriod::Weekend => 6,
            ContainingPeriod::Month => 7,
            ContainingPeriod::Year => 8,
            ContainingPeriod::Decade => 9,
            ContainingPeriod::Century => 10,
            ContainingPeriod::Millennium => 11,
        }
    }
}

/// A fixed historical reference point for epoch-relative counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Epoch {
    /// Julian day zero, −4713-11-24 12:00 proleptic Gregorian.
    Julian,
    /// Shares the Julian calendar epoch; the heliocentric correction is an
    /// observational offset, not calendar arithmetic.
    HeliocentricJulian,
    /// Shares the Julian calendar epoch, as above.
    BarycentricJulian,
    /// 1970-01-01 00:00.
    Unix,
    /// Day one is 1582-10-15, the first day of the Gregorian reform.
    Lilian,
    /// Day one is 0001-01-01.
    RataDie,
}

/// Which half of the planet the seasons are computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
}

/// A meteorological season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

/// A calendar granularity: what the ordinal index of an
/// [`get_ordinal`](crate::calendar::get_ordinal) call counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// The Nth unit counted from 0001-01-01.
    Absolute(TimeUnit),
    /// The Nth unit counted from an alternate epoch.
    FromEpoch(Epoch, TimeUnit),
    /// The Nth unit inside the period containing the reference date.
    Within(TimeUnit, ContainingPeriod),
    /// The Nth season starting in the reference date's calendar year.
    SeasonOfYear(Hemisphere),
}
