//! The bidirectional number engine.
//!
//! Extraction turns token sequences into values; pronunciation turns
//! values back into words. Both sides read the same per-locale
//! [`NumberTables`], so a locale document defines one vocabulary and gets
//! both directions from it.

mod extract;
mod pronounce;
mod tables;

pub use extract::ExtractOptions;
pub use pronounce::PronounceOptions;
pub use tables::{FractionName, NumberDocument, NumberTables};

pub(crate) use extract::{extract_number, extract_numbers};
pub(crate) use pronounce::{pronounce_mixed_fraction, pronounce_number};
