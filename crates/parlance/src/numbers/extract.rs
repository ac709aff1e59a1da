//! Token-sequence number extraction.
//!
//! Three grammars are tried in order, first success wins: mixed fractions
//! ("2 and 3/4"), spoken decimals ("2 point 5"), and the whole-number scan.
//! Extraction never fails hard: "no number here" is `None`.

use bon::Builder;

use crate::lexer::partition;
use crate::numbers::tables::NumberTables;
use crate::types::{ExtractedNumber, Token};

/// Options for number extraction.
///
/// # Example
///
/// ```
/// use parlance::numbers::ExtractOptions;
///
/// let opts = ExtractOptions::builder().ordinals(true).build();
/// assert!(opts.short_scale());
/// assert!(opts.ordinals());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ExtractOptions {
    /// Interpret scale words with short-scale values (billion = 10⁹).
    #[builder(default = true)]
    short_scale: bool,

    /// Recognize ordinal words ("third" -> 3). When disabled, words shared
    /// with the fraction table are read as fractions instead.
    #[builder(default = false)]
    ordinals: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions::builder().build()
    }
}

impl ExtractOptions {
    pub fn short_scale(&self) -> bool {
        self.short_scale
    }

    pub fn ordinals(&self) -> bool {
        self.ordinals
    }
}

/// Extract the first number in a token sequence.
pub(crate) fn extract_number(
    tokens: &[Token],
    tables: &NumberTables,
    opts: &ExtractOptions,
) -> Option<ExtractedNumber> {
    extract(tokens, tables, opts, true)
}

/// Extract every number in a text, in utterance order.
///
/// Each hit blanks its consumed tokens before the next pass, so overlapping
/// reads are impossible and the loop always terminates.
pub(crate) fn extract_numbers(
    text: &str,
    tables: &NumberTables,
    opts: &ExtractOptions,
) -> Vec<f64> {
    let mut tokens = crate::lexer::tokenize(text);
    let mut found: Vec<(usize, f64)> = Vec::new();

    while let Some(number) = extract_number(&tokens, tables, opts) {
        found.push((number.start_index(), number.value()));
        for token in &mut tokens {
            if token.index() >= number.start_index() && token.index() <= number.end_index() {
                token.blank();
            }
        }
    }

    found.sort_by_key(|&(start, _)| start);
    found.into_iter().map(|(_, value)| value).collect()
}

/// Strategy chain. `fractions` gates the mixed-fraction grammar so the
/// left side of "2 and 3/4" cannot itself re-enter it.
fn extract(
    tokens: &[Token],
    tables: &NumberTables,
    opts: &ExtractOptions,
    fractions: bool,
) -> Option<ExtractedNumber> {
    if fractions {
        if let Some(number) = extract_fraction(tokens, tables, opts) {
            return Some(number);
        }
    }
    if let Some(number) = extract_decimal(tokens, tables, opts) {
        return Some(number);
    }
    extract_whole(tokens, tables, opts)
}

/// Mixed-fraction grammar: `<whole> <marker> <fraction>`.
///
/// Accepts only a whole part ≥ 1 and a fractional part strictly between
/// 0 and 1. The three spans must be adjacent up to intervening articles
/// ("two and a half"), which join the consumed run so it stays contiguous.
fn extract_fraction(
    tokens: &[Token],
    tables: &NumberTables,
    opts: &ExtractOptions,
) -> Option<ExtractedNumber> {
    let segments = partition(tokens, |t| tables.is_fraction_marker(&t.word().to_lowercase()));
    if segments.len() != 3 {
        return None;
    }
    let marker = &segments[1];
    if marker.len() != 1 || !tables.is_fraction_marker(&marker[0].word().to_lowercase()) {
        return None;
    }

    let left = extract(&segments[0], tables, opts, false)?;
    let right = extract(&segments[2], tables, opts, true)?;
    if left.value() < 1.0 || right.value() <= 0.0 || right.value() >= 1.0 {
        return None;
    }
    if !article_bridge(tokens, tables, left.end_index(), marker[0].index())
        || !article_bridge(tokens, tables, marker[0].index(), right.start_index())
    {
        return None;
    }

    Some(ExtractedNumber::new(
        left.value() + right.value(),
        consumed_run(tokens, left.start_index(), right.end_index()),
    ))
}

/// Spoken-decimal grammar: `<whole> <marker> <digit> <digit> ...`.
///
/// The right side is consumed digit-by-digit; any token that is not a
/// single digit rejects the whole form.
fn extract_decimal(
    tokens: &[Token],
    tables: &NumberTables,
    opts: &ExtractOptions,
) -> Option<ExtractedNumber> {
    let segments = partition(tokens, |t| tables.is_decimal_marker(&t.word().to_lowercase()));
    if segments.len() != 3 {
        return None;
    }
    let marker = &segments[1];
    if marker.len() != 1 || !tables.is_decimal_marker(&marker[0].word().to_lowercase()) {
        return None;
    }

    let left = extract(&segments[0], tables, opts, false)?;

    let mut digits = String::new();
    for token in &segments[2] {
        let digit = single_digit(&token.word().to_lowercase(), tables)?;
        digits.push(digit);
    }

    if !article_bridge(tokens, tables, left.end_index(), marker[0].index())
        || segments[2][0].index() != marker[0].index() + 1
    {
        return None;
    }

    let fractional: f64 = format!("0.{digits}").parse().ok()?;
    let value = if left.value() < 0.0 {
        left.value() - fractional
    } else {
        left.value() + fractional
    };

    let end = segments[2][segments[2].len() - 1].index();
    Some(ExtractedNumber::new(
        value,
        consumed_run(tokens, left.start_index(), end),
    ))
}

/// Every token strictly between two indices is an article.
fn article_bridge(tokens: &[Token], tables: &NumberTables, from: usize, to: usize) -> bool {
    if from + 1 == to {
        return true;
    }
    if from + 1 > to {
        return false;
    }
    tokens
        .iter()
        .filter(|t| t.index() > from && t.index() < to)
        .all(|t| tables.is_article(&t.word().to_lowercase()))
}

/// Clone the contiguous token run covering an index range.
fn consumed_run(tokens: &[Token], start: usize, end: usize) -> Vec<Token> {
    tokens
        .iter()
        .filter(|t| t.index() >= start && t.index() <= end)
        .cloned()
        .collect()
}

/// Lowercase and drop trailing punctuation, so rendered text with group
/// commas ("thousand,") round-trips through extraction.
fn normalize(word: &str) -> String {
    word.trim_end_matches(|c| matches!(c, '.' | ',' | ';' | ':' | '!' | '?'))
        .to_lowercase()
}

/// A token that is exactly one decimal digit, literal or spoken.
fn single_digit(word: &str, tables: &NumberTables) -> Option<char> {
    if word.len() == 1 && word.chars().all(|c| c.is_ascii_digit()) {
        return word.chars().next();
    }
    match tables.digit_value(word) {
        Some(v @ 0..=9) => char::from_digit(v as u32, 10),
        _ => None,
    }
}

/// One classified numeric token.
enum NumberWord {
    /// A self-contained value: literal digits, an `N/M` fraction literal,
    /// or a hyphenated compound.
    Literal(f64),
    /// A digit or tens word subject to the sum-adjacency rules.
    Digit(f64),
    /// A hundreds multiplier.
    Hundred(f64),
    /// A scale word in the active scale system.
    Scale(f64),
    /// An ordinal word; large power-of-ten ordinals multiply like scales.
    Ordinal(f64),
    /// A spoken fraction multiplying the preceding value.
    Fraction(u32),
}

/// The whole-number scan.
///
/// A single left-to-right pass keeping an accumulator, a pending-sum list
/// for flushed scale groups, and the consumed token run. The run is grown
/// only with adjacent tokens, so the resulting span is always contiguous.
fn extract_whole(
    tokens: &[Token],
    tables: &NumberTables,
    opts: &ExtractOptions,
) -> Option<ExtractedNumber> {
    let mut val: Option<f64> = None;
    let mut to_sum: Vec<f64> = Vec::new();
    let mut consumed: Vec<Token> = Vec::new();
    // Connector words are held back until a numeric token confirms the
    // number continues past them.
    let mut pending_connectors: Vec<Token> = Vec::new();
    let mut negative = false;
    let mut negation_tokens: Vec<Token> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let word = normalize(token.word());
        let started = val.is_some() || !to_sum.is_empty();

        if started && tables.is_connector(&word) {
            pending_connectors.push(token.clone());
            continue;
        }

        if !started && tables.is_negative(&word) {
            negative = true;
            negation_tokens.push(token.clone());
            continue;
        }

        let Some(kind) = classify(&word, tables, opts) else {
            if started {
                // The number is complete; an unconsumed connector stays
                // with the rest of the utterance.
                break;
            }
            // Nothing accumulated yet: reset and keep scanning. Any
            // intervening token, articles included, clears a pending
            // negation so the consumed run stays contiguous.
            negative = false;
            negation_tokens.clear();
            continue;
        };

        match kind {
            NumberWord::Literal(v) | NumberWord::Digit(v) => match val {
                None => val = Some(v),
                Some(current) => {
                    if sum_adjacent(current, v) {
                        val = Some(current + v);
                    } else {
                        break;
                    }
                }
            },
            NumberWord::Ordinal(v) => {
                if v >= 100.0 {
                    // "two millionth" scales like its cardinal form.
                    let base = val.take().unwrap_or(1.0);
                    val = Some(base.max(1.0) * v);
                } else {
                    match val {
                        None => val = Some(v),
                        Some(current) => {
                            if sum_adjacent(current, v) {
                                val = Some(current + v);
                            } else {
                                break;
                            }
                        }
                    }
                }
            }
            NumberWord::Fraction(denominator) => {
                let base = val.take().unwrap_or(1.0);
                val = Some(base / f64::from(denominator));
            }
            NumberWord::Hundred(multiplier) => {
                let base = val.take().unwrap_or(1.0);
                val = Some(base.max(1.0) * multiplier);
            }
            NumberWord::Scale(scale) => {
                let base = val.take().unwrap_or(1.0);
                let applied = base.max(1.0) * scale;
                if rest_has_scale_geq(&tokens[i + 1..], tables, opts, scale) {
                    val = Some(applied);
                } else {
                    // No equal-or-larger scale can follow: this additive
                    // group is finished.
                    to_sum.push(applied);
                    val = None;
                }
            }
        }

        consumed.append(&mut pending_connectors);
        consumed.push(token.clone());
    }

    if consumed.is_empty() {
        return None;
    }

    let mut value = val.unwrap_or(0.0) + to_sum.iter().sum::<f64>();
    if negative {
        value = -value;
    }

    let mut span = negation_tokens;
    span.append(&mut consumed);
    Some(ExtractedNumber::new(value, span))
}

/// Classify one lowercased word against the tables.
fn classify(word: &str, tables: &NumberTables, opts: &ExtractOptions) -> Option<NumberWord> {
    if word.is_empty() {
        return None;
    }
    if let Some(v) = literal_value(word) {
        return Some(NumberWord::Literal(v));
    }
    if let Some(v) = tables.digit_value(word) {
        return Some(NumberWord::Digit(v as f64));
    }
    if let Some(v) = hyphen_compound(word, tables) {
        return Some(NumberWord::Literal(v));
    }
    if let Some(v) = tables.hundred_value(word) {
        return Some(NumberWord::Hundred(v as f64));
    }
    if let Some(v) = tables.scale_value(word, opts.short_scale) {
        return Some(NumberWord::Scale(v));
    }
    if opts.ordinals {
        if let Some(v) = tables.ordinal_value(word) {
            return Some(NumberWord::Ordinal(v));
        }
    }
    if let Some(denominator) = tables.fraction_denominator(word) {
        return Some(NumberWord::Fraction(denominator));
    }
    None
}

/// Literal numerics: plain digits and `N/M` fraction literals. A slash
/// form is accepted only when both sides parse as plain numbers.
fn literal_value(word: &str) -> Option<f64> {
    if let Ok(v) = word.parse::<f64>() {
        return v.is_finite().then_some(v);
    }
    let (numerator, denominator) = word.split_once('/')?;
    let numerator: f64 = numerator.parse().ok()?;
    let denominator: f64 = denominator.parse().ok()?;
    (denominator != 0.0).then(|| numerator / denominator)
}

/// Hyphenated tens-ones compounds ("fifty-seven").
fn hyphen_compound(word: &str, tables: &NumberTables) -> Option<f64> {
    let (tens, ones) = word.split_once('-')?;
    let tens = tables.digit_value(tens)?;
    let ones = tables.digit_value(ones)?;
    (tens >= 20 && tens % 10 == 0 && (1..=9).contains(&ones)).then(|| (tens + ones) as f64)
}

/// Whether a completed value absorbs a following smaller one by addition.
///
/// An exact multiple of one hundred takes anything below one hundred
/// ("six hundred fifty", "six hundred five"); a value ending in a tens
/// place takes a single digit ("twenty two", "one hundred twenty two").
fn sum_adjacent(current: f64, next: f64) -> bool {
    if current <= 0.0 || current.fract() != 0.0 || next.fract() != 0.0 || next < 1.0 {
        return false;
    }
    if current >= 100.0 && current % 100.0 == 0.0 {
        return next < 100.0;
    }
    next < 10.0 && current % 10.0 == 0.0 && current % 100.0 >= 20.0
}

/// Lookahead for the flush rule: does any remaining token map to a scale
/// of at least `scale` in the active scale system?
fn rest_has_scale_geq(
    rest: &[Token],
    tables: &NumberTables,
    opts: &ExtractOptions,
    scale: f64,
) -> bool {
    rest.iter().any(|token| {
        tables
            .scale_value(&normalize(token.word()), opts.short_scale)
            .is_some_and(|v| v >= scale)
    })
}
