//! Bidirectional conversion between natural-language text and structured
//! numeric/temporal values.
//!
//! Three engines share one locale substrate:
//!
//! - the **number engine** extracts values from token sequences
//!   ("two hundred and one" -> 201) and renders values back into words,
//!   including fractions, decimals, ordinals, short/long scales, and
//!   scientific form;
//! - the **calendar ordinal engine** maps an ordinal index plus a
//!   granularity plus a reference date to a concrete date or range, across
//!   absolute, epoch-relative, composite, and season granularities;
//! - the **template renderer** composes locale phrases (dates, years) from
//!   data-driven pattern tables with first-match-wins regex overrides.
//!
//! Locale data is plain owned state in a [`LocaleRegistry`]: load documents
//! during startup, then share the registry by reference.
//!
//! # Example
//!
//! ```
//! use parlance::lexer::tokenize;
//! use parlance::{ExtractOptions, LocaleRegistry, PronounceOptions};
//!
//! let registry = LocaleRegistry::with_builtin();
//! let en = registry.get("en");
//!
//! let tokens = tokenize("nine hundred seven thousand six hundred fifty-seven");
//! let number = en.extract_number(&tokens, &ExtractOptions::default()).unwrap();
//! assert_eq!(number.value(), 907_657.0);
//!
//! let words = en.pronounce_number(201.0, &PronounceOptions::default());
//! assert_eq!(words, "two hundred and one");
//! ```

pub mod calendar;
pub mod format;
pub mod lexer;
pub mod locale;
pub mod numbers;
pub mod types;

pub use locale::{LoadError, Locale, LocaleRegistry, RenderError, compute_suggestions};
pub use numbers::{ExtractOptions, PronounceOptions};
pub use types::{ExtractedNumber, Token};

/// Creates a `HashMap<String, String>` of render arguments from key-value
/// pairs.
///
/// # Example
///
/// ```
/// use parlance::render_args;
///
/// let args = render_args! { "weekday" => "Friday", "day" => 13 };
/// assert_eq!(args["weekday"], "Friday");
/// assert_eq!(args["day"], "13");
/// ```
#[macro_export]
macro_rules! render_args {
    {} => {
        ::std::collections::HashMap::<String, String>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, String>::new();
            $(
                map.insert($key.to_string(), $value.to_string());
            )+
            map
        }
    };
}
