//! The calendar ordinal engine.
//!
//! Pure arithmetic over the proleptic Gregorian calendar: ordinal
//! addressing of periods relative to epochs or containing periods, range
//! boundaries, and hemisphere-aware seasons. Locale-independent; the
//! template renderer turns these results into words.

mod error;
mod ordinal;
mod range;
mod resolution;
mod season;

pub use error::OrdinalError;
pub use ordinal::get_ordinal;
pub use range::{
    get_century_range, get_decade_range, get_millennium_range, get_month_range, get_week_range,
    get_weekend_range, get_year_range,
};
pub use resolution::{ContainingPeriod, Epoch, Hemisphere, Resolution, Season, TimeUnit};
pub use season::{
    date_to_season, get_season_range, last_season_date, next_season_date, season_to_date,
};
