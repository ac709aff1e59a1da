//! Locale management: documents, compiled locales, and the registry.
//!
//! A [`Locale`] owns one language's number tables, format families, and
//! word lists, and hosts every locale-dependent public operation. The
//! [`LocaleRegistry`] owns all loaded locales and is the only shared state
//! in the crate: plain owned data, populated explicitly, no global caches.

mod config;
mod error;
mod registry;

pub use config::{FamilyDocument, FamilyEntry, LocaleDocument, OverrideDocument};
pub use error::{LoadError, RenderError, compute_suggestions};
pub use registry::LocaleRegistry;

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};

use crate::format::{FormatFamily, render_family};
use crate::numbers::{
    ExtractOptions, NumberTables, PronounceOptions, extract_number, extract_numbers,
    pronounce_mixed_fraction, pronounce_number,
};
use crate::types::{ExtractedNumber, Token};

/// A compiled locale: number tables, format families, and word lists.
///
/// # Example
///
/// ```
/// use parlance::{LocaleRegistry, PronounceOptions};
///
/// let registry = LocaleRegistry::with_builtin();
/// let en = registry.get("en");
/// let words = en.pronounce_number(201.0, &PronounceOptions::builder().build());
/// assert_eq!(words, "two hundred and one");
/// ```
#[derive(Debug, Clone)]
pub struct Locale {
    code: String,
    numbers: NumberTables,
    families: BTreeMap<String, FormatFamily>,
    weekdays: Vec<String>,
    months: Vec<String>,
}

impl Locale {
    /// Compile a locale from its deserialized document.
    pub fn from_document(doc: &LocaleDocument) -> Result<Self, LoadError> {
        let numbers = NumberTables::from_document(&doc.numbers)?;

        let mut families = BTreeMap::new();
        for (name, family_doc) in &doc.formats {
            families.insert(name.clone(), config::build_family(name, family_doc)?);
        }

        check_word_list("weekdays", &doc.weekdays, 7)?;
        check_word_list("months", &doc.months, 12)?;

        Ok(Self {
            code: doc.code.clone(),
            numbers,
            families,
            weekdays: doc.weekdays.clone(),
            months: doc.months.clone(),
        })
    }

    /// The locale code this locale was loaded under.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The compiled number tables.
    pub fn numbers(&self) -> &NumberTables {
        &self.numbers
    }

    /// Look up a format family by name.
    pub fn family(&self, name: &str) -> Option<&FormatFamily> {
        self.families.get(name)
    }

    // =========================================================================
    // Number Extraction
    // =========================================================================

    /// Extract the first number in a token sequence.
    ///
    /// Returns `None` when no number is present; this is an ordinary
    /// outcome, not an error.
    pub fn extract_number(
        &self,
        tokens: &[Token],
        opts: &ExtractOptions,
    ) -> Option<ExtractedNumber> {
        extract_number(tokens, &self.numbers, opts)
    }

    /// Extract every number in a text, ordered by original position.
    pub fn extract_numbers(&self, text: &str, opts: &ExtractOptions) -> Vec<f64> {
        extract_numbers(text, &self.numbers, opts)
    }

    // =========================================================================
    // Number Rendering
    // =========================================================================

    /// Render a value into words.
    pub fn pronounce_number(&self, value: f64, opts: &PronounceOptions) -> String {
        pronounce_number(value, &self.numbers, opts)
    }

    /// Render a value as a mixed fraction ("4 and a sixth") when a small
    /// denominator reproduces it, else as plain decimal text.
    pub fn pronounce_mixed_fraction(&self, value: f64) -> String {
        pronounce_mixed_fraction(value, &self.numbers)
    }

    // =========================================================================
    // Template Rendering
    // =========================================================================

    /// Render a format family for a selector value.
    ///
    /// The selector is matched against the family's override patterns in
    /// document order; the first match wins, else the default template.
    /// Placeholders are filled from `args`, whitespace is normalized.
    pub fn render(
        &self,
        family: &str,
        selector: &str,
        args: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        let Some(found) = self.families.get(family) else {
            let candidates: Vec<&str> = self.families.keys().map(String::as_str).collect();
            return Err(RenderError::UnknownFamily {
                name: family.to_string(),
                suggestions: compute_suggestions(family, &candidates),
            });
        };
        Ok(render_family(found, selector, args))
    }

    /// Render a year as words through the `year_format` family.
    ///
    /// The year is decomposed into decade, hundreds, and thousands parts,
    /// each rendered through its own family first; `year_format` then
    /// composes the pieces. Negative years supply the locale's BC marker.
    pub fn format_year(&self, year: i32) -> Result<String, RenderError> {
        let magnitude = year.unsigned_abs();
        let decade_value = magnitude.rem_euclid(100);
        let hundreds_value = magnitude.div_euclid(100).rem_euclid(10);
        let thousand_value = magnitude.div_euclid(100);

        let formatted_decade = self.render(
            "decade_format",
            &decade_value.to_string(),
            &part_args(self.pronounce_part(decade_value)),
        )?;
        let formatted_hundreds = self.render(
            "hundreds_format",
            &hundreds_value.to_string(),
            &part_args(self.pronounce_part(hundreds_value)),
        )?;
        let formatted_thousand = self.render(
            "thousand_format",
            &thousand_value.to_string(),
            &part_args(self.pronounce_part(thousand_value)),
        )?;

        let mut args = HashMap::new();
        args.insert("number".to_string(), magnitude.to_string());
        args.insert("formatted_decade".to_string(), formatted_decade);
        args.insert("formatted_hundreds".to_string(), formatted_hundreds);
        args.insert("formatted_thousand".to_string(), formatted_thousand);
        args.insert(
            "bc".to_string(),
            if year < 0 {
                self.numbers.bc_word().to_string()
            } else {
                String::new()
            },
        );

        self.render("year_format", &magnitude.to_string(), &args)
    }

    /// Render a date as words through the `date_format` family.
    ///
    /// Override patterns are matched against the ISO form of the date, so
    /// a locale can special-case fixed dates purely in data.
    pub fn format_date(&self, date: NaiveDate) -> Result<String, RenderError> {
        let weekday_index = date.weekday().num_days_from_monday() as usize;
        let month_index = date.month0() as usize;

        let mut args = HashMap::new();
        args.insert(
            "weekday".to_string(),
            self.weekdays.get(weekday_index).cloned().unwrap_or_default(),
        );
        args.insert(
            "month".to_string(),
            self.months.get(month_index).cloned().unwrap_or_default(),
        );
        args.insert("day".to_string(), date.day().to_string());
        args.insert("formatted_year".to_string(), self.format_year(date.year())?);

        self.render("date_format", &date.to_string(), &args)
    }

    /// Cardinal words for one year component.
    fn pronounce_part(&self, value: u32) -> String {
        let opts = PronounceOptions::builder().places(0).build();
        self.pronounce_number(f64::from(value), &opts)
    }
}

fn part_args(x: String) -> HashMap<String, String> {
    let mut args = HashMap::new();
    args.insert("x".to_string(), x);
    args
}

fn check_word_list(name: &str, words: &[String], expected: usize) -> Result<(), LoadError> {
    if words.is_empty() || words.len() == expected {
        Ok(())
    } else {
        Err(LoadError::BadWordList {
            name: name.to_string(),
            expected,
            got: words.len(),
        })
    }
}
