//! Value-to-words rendering.
//!
//! The inverse of extraction: cardinal, ordinal, scientific, and
//! mixed-fraction forms, in either numbering scale.

use std::collections::HashMap;

use bon::Builder;

use crate::format::collapse_whitespace;
use crate::numbers::tables::NumberTables;

/// Options for number pronunciation.
///
/// # Example
///
/// ```
/// use parlance::numbers::PronounceOptions;
///
/// let opts = PronounceOptions::builder().places(3).ordinals(true).build();
/// assert_eq!(opts.places(), 3);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct PronounceOptions {
    /// Fractional digits to render after the decimal word.
    #[builder(default = 2)]
    places: usize,

    /// Use short-scale names (billion = 10⁹) rather than long scale.
    #[builder(default = true)]
    short_scale: bool,

    /// Force scientific form. Scientific form also triggers automatically
    /// when the magnitude exhausts the scale tables.
    #[builder(default = false)]
    scientific: bool,

    /// Render the value as an ordinal ("one hundred twenty third").
    #[builder(default = false)]
    ordinals: bool,
}

impl Default for PronounceOptions {
    fn default() -> Self {
        PronounceOptions::builder().build()
    }
}

impl PronounceOptions {
    pub fn places(&self) -> usize {
        self.places
    }

    pub fn short_scale(&self) -> bool {
        self.short_scale
    }

    pub fn scientific(&self) -> bool {
        self.scientific
    }

    pub fn ordinals(&self) -> bool {
        self.ordinals
    }
}

/// Render a value into words.
pub(crate) fn pronounce_number(
    value: f64,
    tables: &NumberTables,
    opts: &PronounceOptions,
) -> String {
    if value.is_nan() {
        return tables.not_a_number().to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 {
            format!("{} {}", tables.negative_word(), tables.infinity_word())
        } else {
            tables.infinity_word().to_string()
        };
    }

    if opts.scientific || value.abs() >= scientific_threshold(tables, opts.short_scale) {
        return pronounce_scientific(value, tables, opts);
    }

    // Round first: the carry may change the integer part (1.999 -> "two").
    let formatted = format!("{:.*}", opts.places, value.abs());
    let (int_text, frac_text) = match formatted.split_once('.') {
        Some((int_text, frac_text)) => (int_text, frac_text),
        None => (formatted.as_str(), ""),
    };
    let int_part: u128 = int_text.parse().unwrap_or(0);
    let mut frac_digits: Vec<u32> = frac_text
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();
    while frac_digits.last() == Some(&0) {
        frac_digits.pop();
    }
    let has_fraction = !frac_digits.is_empty();

    let mut words = if opts.ordinals {
        pronounce_ordinal(int_part, tables, opts.short_scale)
    } else {
        pronounce_integer(int_part, tables, opts.short_scale, true)
    };

    if has_fraction && !opts.ordinals {
        words.push(' ');
        words.push_str(tables.decimal_word());
        for digit in frac_digits {
            words.push(' ');
            words.push_str(tables.digit_name(i64::from(digit)).unwrap_or_default());
        }
    }

    let is_zero = int_part == 0 && !has_fraction;
    if value.is_sign_negative() && !is_zero {
        words = format!("{} {}", tables.negative_word(), words);
    }
    words
}

/// Render a value as a mixed fraction ("4 and a sixth").
///
/// Searches denominators 2–20 for one that reproduces the fractional part;
/// falls back to a plain decimal rendering when none does. A numerator of
/// one takes the locale article, larger numerators pluralize the name.
pub(crate) fn pronounce_mixed_fraction(value: f64, tables: &NumberTables) -> String {
    let whole = value.trunc();
    let fractional = (value - whole).abs();
    let sign = if value < 0.0 { "-" } else { "" };
    let whole_text = format!("{sign}{}", whole.abs() as u128);

    if fractional < 1e-9 {
        return whole_text;
    }

    let matched = (2u32..=20).find_map(|denominator| {
        let numerator = (fractional * f64::from(denominator)).round();
        let error = (fractional - numerator / f64::from(denominator)).abs();
        (numerator >= 1.0 && error < 1e-4).then_some((numerator as u32, denominator))
    });

    let Some((numerator, denominator)) = matched else {
        let text = format!("{value:.3}");
        return text.trim_end_matches('0').trim_end_matches('.').to_string();
    };
    let Some(name) = tables.fraction_name(denominator) else {
        let text = format!("{value:.3}");
        return text.trim_end_matches('0').trim_end_matches('.').to_string();
    };

    let fraction_text = if numerator == 1 {
        format!("{} {}", tables.article_for(&name.singular), name.singular)
    } else {
        format!("{numerator} {}", name.plural)
    };

    if whole == 0.0 {
        format!("{sign}{fraction_text}")
    } else {
        format!("{whole_text} {} {fraction_text}", tables.connector_word())
    }
}

/// Magnitude at which scale names run out and scientific form takes over.
fn scientific_threshold(tables: &NumberTables, short_scale: bool) -> f64 {
    // Capped so the integer part of any sub-threshold value fits in u128.
    (tables.max_scale(short_scale) * 1e3).min(1e36)
}

/// Scientific form: mantissa and exponent re-enter pronunciation with
/// scientific disabled, then flow through the locale's template.
fn pronounce_scientific(value: f64, tables: &NumberTables, opts: &PronounceOptions) -> String {
    let formatted = format!("{value:e}");
    let (mantissa_text, exponent_text) = formatted
        .split_once('e')
        .unwrap_or((formatted.as_str(), "0"));
    let mantissa: f64 = mantissa_text.parse().unwrap_or(0.0);
    let exponent: f64 = exponent_text.parse().unwrap_or(0.0);

    let inner = PronounceOptions::builder()
        .places(opts.places)
        .short_scale(opts.short_scale)
        .build();
    let exponent_opts = PronounceOptions::builder()
        .places(0)
        .short_scale(opts.short_scale)
        .build();

    let mut args = HashMap::new();
    args.insert(
        "mantissa".to_string(),
        pronounce_number(mantissa, tables, &inner),
    );
    args.insert(
        "exponent".to_string(),
        pronounce_number(exponent, tables, &exponent_opts),
    );
    collapse_whitespace(&tables.scientific_template().substitute(&args))
}

/// Cardinal rendering of a non-negative integer.
///
/// Short scale splits into 3-digit groups; long scale into 6-digit groups
/// whose renderer reuses the thousand word internally, which is what makes
/// consecutive long-scale names land 1000× apart only every other step.
fn pronounce_integer(
    n: u128,
    tables: &NumberTables,
    short_scale: bool,
    with_connector: bool,
) -> String {
    if n == 0 {
        return tables.digit_name(0).unwrap_or_default().to_string();
    }

    let group_size: u128 = if short_scale { 1_000 } else { 1_000_000 };
    let mut groups: Vec<u128> = Vec::new();
    let mut remaining = n;
    while remaining > 0 {
        groups.push(remaining.rem_euclid(group_size));
        remaining = remaining.div_euclid(group_size);
    }

    let mut parts: Vec<String> = Vec::new();
    for (i, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        let rendered = if short_scale {
            render_under_thousand(group as u32, tables, with_connector)
        } else {
            render_under_million(group as u32, tables, with_connector)
        };
        if i == 0 {
            parts.push(rendered);
        } else {
            let exponent = if short_scale { 3 * i as u32 } else { 6 * i as u32 };
            let name = tables.scale_name(exponent, short_scale).unwrap_or_default();
            parts.push(format!("{rendered} {name}"));
        }
    }
    parts.join(", ")
}

/// Ordinal rendering: the cardinal words with the final component swapped
/// for its ordinal form. Irregular ordinals come from the inverse table;
/// everything else takes the locale suffix. No connector word is used.
fn pronounce_ordinal(n: u128, tables: &NumberTables, short_scale: bool) -> String {
    if n == 0 {
        return tables
            .ordinal_name(0)
            .map(str::to_string)
            .unwrap_or_else(|| {
                format!(
                    "{}{}",
                    tables.digit_name(0).unwrap_or_default(),
                    tables.ordinal_suffix()
                )
            });
    }

    let cardinal = pronounce_integer(n, tables, short_scale, false);
    let Some(last) = cardinal.split_whitespace().next_back() else {
        return cardinal;
    };

    let swapped = tables
        .cardinal_value(last)
        .filter(|v| v.fract() == 0.0 && *v >= 0.0)
        .and_then(|v| tables.ordinal_name(v as u128))
        .map_or_else(
            || format!("{last}{}", tables.ordinal_suffix()),
            str::to_string,
        );

    let last_len = last.len();
    let mut result = cardinal;
    result.truncate(result.len() - last_len);
    result.push_str(&swapped);
    result
}

/// Cardinal-hundreds sub-algorithm for one 3-digit group.
fn render_under_thousand(group: u32, tables: &NumberTables, with_connector: bool) -> String {
    let hundreds = group.div_euclid(100);
    let remainder = group.rem_euclid(100);

    let mut parts: Vec<String> = Vec::new();
    if hundreds > 0 {
        parts.push(format!(
            "{} {}",
            tables.digit_name(i64::from(hundreds)).unwrap_or_default(),
            tables.hundred_word()
        ));
    }
    if remainder > 0 {
        if hundreds > 0 && with_connector {
            parts.push(tables.connector_word().to_string());
        }
        parts.push(render_under_hundred(remainder, tables));
    }
    parts.join(" ")
}

/// One 6-digit group for long scale, split 3+3 through the thousand word.
fn render_under_million(group: u32, tables: &NumberTables, with_connector: bool) -> String {
    let thousands = group.div_euclid(1_000);
    let remainder = group.rem_euclid(1_000);

    let mut parts: Vec<String> = Vec::new();
    if thousands > 0 {
        let name = tables.scale_name(3, false).unwrap_or_default();
        parts.push(format!(
            "{} {name}",
            render_under_thousand(thousands, tables, with_connector)
        ));
    }
    if remainder > 0 {
        parts.push(render_under_thousand(remainder, tables, with_connector));
    }
    parts.join(", ")
}

/// Direct lookup 0–19, tens word plus ones word for 20–99.
fn render_under_hundred(value: u32, tables: &NumberTables) -> String {
    if value < 20 {
        return tables
            .digit_name(i64::from(value))
            .unwrap_or_default()
            .to_string();
    }
    let tens = value - value.rem_euclid(10);
    let ones = value.rem_euclid(10);
    let tens_word = tables.digit_name(i64::from(tens)).unwrap_or_default();
    if ones == 0 {
        tens_word.to_string()
    } else {
        format!(
            "{tens_word} {}",
            tables.digit_name(i64::from(ones)).unwrap_or_default()
        )
    }
}
