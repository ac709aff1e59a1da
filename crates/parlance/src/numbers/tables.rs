//! Per-locale number-word tables and their derived inverses.
//!
//! Tables are built once from a deserialized locale document and are then
//! read-only. The forward maps (word -> value) drive extraction; the derived
//! inverses (value -> word, exponent -> scale name, denominator -> fraction
//! name) drive pronunciation.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Deserialize;

use crate::format::{Template, parse_template};
use crate::locale::LoadError;

/// Raw number-word section of a locale document.
#[derive(Debug, Clone, Deserialize)]
pub struct NumberDocument {
    /// Digit and tens words: `"zero"`…`"nineteen"`, `"twenty"`…`"ninety"`.
    pub digits: BTreeMap<String, i64>,
    /// Hundreds multiplier words (`"hundred"` -> 100).
    pub hundreds: BTreeMap<String, i64>,
    /// Short-scale names, each a power of ten ≥ 10³ at every third power.
    #[serde(default)]
    pub short_scale: BTreeMap<String, f64>,
    /// Long-scale names, powers of ten ≥ 10³ skipping intermediate powers.
    #[serde(default)]
    pub long_scale: BTreeMap<String, f64>,
    /// Ordinal words (`"third"` -> 3, `"millionth"` -> 10⁶).
    #[serde(default)]
    pub ordinals: BTreeMap<String, f64>,
    /// Spoken fraction words mapped to their denominator (`"half"` -> 2).
    #[serde(default)]
    pub fractions: BTreeMap<String, u32>,
    /// Denominator -> `[singular, plural]` names for mixed-fraction output.
    #[serde(default)]
    pub fraction_names: BTreeMap<u32, (String, String)>,
    #[serde(default)]
    pub articles: Vec<String>,
    #[serde(default)]
    pub negatives: Vec<String>,
    #[serde(default)]
    pub connectors: Vec<String>,
    #[serde(default)]
    pub fraction_markers: Vec<String>,
    #[serde(default)]
    pub decimal_markers: Vec<String>,
    pub decimal_word: String,
    pub negative_word: String,
    pub connector_word: String,
    pub ordinal_suffix: String,
    pub infinity_word: String,
    pub not_a_number: String,
    /// Template for scientific form, with `mantissa`/`exponent` placeholders.
    pub scientific: String,
    /// Marker appended to years before the common era.
    pub bc_word: String,
    pub article: String,
    pub article_before_vowel: String,
}

/// A denominator's spoken names.
#[derive(Debug, Clone)]
pub struct FractionName {
    pub singular: String,
    pub plural: String,
}

/// Compiled per-locale number tables.
///
/// Every lookup the extraction and pronunciation engines need, with word
/// sets lowercased at build time so token classification is a plain map hit.
#[derive(Debug, Clone)]
pub struct NumberTables {
    digits: HashMap<String, i64>,
    hundreds: HashMap<String, i64>,
    short_scale: HashMap<String, f64>,
    long_scale: HashMap<String, f64>,
    ordinals: HashMap<String, f64>,
    fractions: HashMap<String, u32>,

    digit_names: BTreeMap<i64, String>,
    hundred_word: String,
    short_scale_names: BTreeMap<u32, String>,
    long_scale_names: BTreeMap<u32, String>,
    ordinal_names: BTreeMap<u128, String>,
    fraction_names: BTreeMap<u32, FractionName>,

    articles: HashSet<String>,
    negatives: HashSet<String>,
    connectors: HashSet<String>,
    fraction_markers: HashSet<String>,
    decimal_markers: HashSet<String>,

    decimal_word: String,
    negative_word: String,
    connector_word: String,
    ordinal_suffix: String,
    infinity_word: String,
    not_a_number: String,
    scientific: Template,
    bc_word: String,
    article: String,
    article_before_vowel: String,
}

impl NumberTables {
    /// Compile tables from a locale document.
    ///
    /// Validates the scale-word invariant: every scale word must map to a
    /// power of ten of at least 10³.
    pub fn from_document(doc: &NumberDocument) -> Result<Self, LoadError> {
        for (word, &value) in doc.short_scale.iter().chain(doc.long_scale.iter()) {
            if !is_scale_power(value) {
                return Err(LoadError::BadScaleWord {
                    word: word.clone(),
                    value,
                });
            }
        }

        let digits = lower_map(&doc.digits);
        let hundreds = lower_map(&doc.hundreds);
        let short_scale = lower_map(&doc.short_scale);
        let long_scale = lower_map(&doc.long_scale);
        let ordinals = lower_map(&doc.ordinals);
        let fractions = lower_map(&doc.fractions);

        let mut digit_names = BTreeMap::new();
        for (word, &value) in &doc.digits {
            digit_names.entry(value).or_insert_with(|| word.clone());
        }

        let hundred_word = doc
            .hundreds
            .iter()
            .min_by_key(|&(_, &value)| value)
            .map(|(word, _)| word.clone())
            .ok_or(LoadError::MissingHundredWord)?;

        let mut ordinal_names = BTreeMap::new();
        for (word, &value) in &doc.ordinals {
            if value >= 0.0 && value.fract() == 0.0 {
                ordinal_names
                    .entry(value as u128)
                    .or_insert_with(|| word.clone());
            }
        }

        let fraction_names = doc
            .fraction_names
            .iter()
            .map(|(&den, (singular, plural))| {
                (
                    den,
                    FractionName {
                        singular: singular.clone(),
                        plural: plural.clone(),
                    },
                )
            })
            .collect();

        let scientific =
            parse_template(&doc.scientific).map_err(|e| LoadError::BadTemplate {
                family: "scientific".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            digits,
            hundreds,
            short_scale,
            long_scale,
            ordinals,
            fractions,
            digit_names,
            hundred_word,
            short_scale_names: scale_names(&doc.short_scale),
            long_scale_names: scale_names(&doc.long_scale),
            ordinal_names,
            fraction_names,
            articles: lower_set(&doc.articles),
            negatives: lower_set(&doc.negatives),
            connectors: lower_set(&doc.connectors),
            fraction_markers: lower_set(&doc.fraction_markers),
            decimal_markers: lower_set(&doc.decimal_markers),
            decimal_word: doc.decimal_word.clone(),
            negative_word: doc.negative_word.clone(),
            connector_word: doc.connector_word.clone(),
            ordinal_suffix: doc.ordinal_suffix.clone(),
            infinity_word: doc.infinity_word.clone(),
            not_a_number: doc.not_a_number.clone(),
            scientific,
            bc_word: doc.bc_word.clone(),
            article: doc.article.clone(),
            article_before_vowel: doc.article_before_vowel.clone(),
        })
    }

    // =========================================================================
    // Forward lookups (extraction)
    // =========================================================================

    pub fn digit_value(&self, word: &str) -> Option<i64> {
        self.digits.get(word).copied()
    }

    pub fn hundred_value(&self, word: &str) -> Option<i64> {
        self.hundreds.get(word).copied()
    }

    /// Scale-word value in the requested scale system.
    pub fn scale_value(&self, word: &str, short_scale: bool) -> Option<f64> {
        if short_scale {
            self.short_scale.get(word).copied()
        } else {
            self.long_scale.get(word).copied()
        }
    }

    pub fn ordinal_value(&self, word: &str) -> Option<f64> {
        self.ordinals.get(word).copied()
    }

    /// Denominator for a spoken fraction word.
    pub fn fraction_denominator(&self, word: &str) -> Option<u32> {
        self.fractions.get(word).copied()
    }

    pub fn is_article(&self, word: &str) -> bool {
        self.articles.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negatives.contains(word)
    }

    pub fn is_connector(&self, word: &str) -> bool {
        self.connectors.contains(word)
    }

    pub fn is_fraction_marker(&self, word: &str) -> bool {
        self.fraction_markers.contains(word)
    }

    pub fn is_decimal_marker(&self, word: &str) -> bool {
        self.decimal_markers.contains(word)
    }

    // =========================================================================
    // Inverse lookups (pronunciation)
    // =========================================================================

    pub fn digit_name(&self, value: i64) -> Option<&str> {
        self.digit_names.get(&value).map(String::as_str)
    }

    pub fn hundred_word(&self) -> &str {
        &self.hundred_word
    }

    /// Scale name for a power-of-ten exponent in the requested system.
    pub fn scale_name(&self, exponent: u32, short_scale: bool) -> Option<&str> {
        let names = if short_scale {
            &self.short_scale_names
        } else {
            &self.long_scale_names
        };
        names.get(&exponent).map(String::as_str)
    }

    /// Largest named scale value in the requested system, or 10³ when the
    /// table is empty.
    pub fn max_scale(&self, short_scale: bool) -> f64 {
        let names = if short_scale {
            &self.short_scale_names
        } else {
            &self.long_scale_names
        };
        names
            .keys()
            .next_back()
            .map_or(1e3, |&exponent| 10f64.powi(exponent as i32))
    }

    /// Irregular ordinal name for an exact integer value.
    pub fn ordinal_name(&self, value: u128) -> Option<&str> {
        self.ordinal_names.get(&value).map(String::as_str)
    }

    pub fn fraction_name(&self, denominator: u32) -> Option<&FractionName> {
        self.fraction_names.get(&denominator)
    }

    /// Value of any cardinal word that can end a rendered number. Used by
    /// ordinal rendering to swap the final component.
    pub fn cardinal_value(&self, word: &str) -> Option<f64> {
        if let Some(v) = self.digits.get(word) {
            return Some(*v as f64);
        }
        if let Some(v) = self.hundreds.get(word) {
            return Some(*v as f64);
        }
        if let Some(v) = self.short_scale.get(word) {
            return Some(*v);
        }
        self.long_scale.get(word).copied()
    }

    // =========================================================================
    // Render words
    // =========================================================================

    pub fn decimal_word(&self) -> &str {
        &self.decimal_word
    }

    pub fn negative_word(&self) -> &str {
        &self.negative_word
    }

    pub fn connector_word(&self) -> &str {
        &self.connector_word
    }

    pub fn ordinal_suffix(&self) -> &str {
        &self.ordinal_suffix
    }

    pub fn infinity_word(&self) -> &str {
        &self.infinity_word
    }

    pub fn not_a_number(&self) -> &str {
        &self.not_a_number
    }

    pub fn scientific_template(&self) -> &Template {
        &self.scientific
    }

    pub fn bc_word(&self) -> &str {
        &self.bc_word
    }

    /// Indefinite article for a following word ("a sixth" / "an eighth").
    pub fn article_for(&self, word: &str) -> &str {
        let vowel_initial = word
            .chars()
            .next()
            .is_some_and(|c| "aeiou".contains(c.to_ascii_lowercase()));
        if vowel_initial {
            &self.article_before_vowel
        } else {
            &self.article
        }
    }
}

/// A scale word must name a power of ten no smaller than one thousand.
///
/// The comparison re-parses the canonical `1e<exp>` form rather than using
/// `powf`, so values like `1e24` that are not exactly representable still
/// validate against the same rounding the document parser applied.
fn is_scale_power(value: f64) -> bool {
    if !value.is_finite() || value < 1e3 {
        return false;
    }
    let exponent = value.log10().round() as i32;
    format!("1e{exponent}")
        .parse::<f64>()
        .is_ok_and(|canonical| canonical == value)
}

fn scale_names(table: &BTreeMap<String, f64>) -> BTreeMap<u32, String> {
    let mut names = BTreeMap::new();
    for (word, &value) in table {
        let exponent = value.log10().round() as u32;
        names.entry(exponent).or_insert_with(|| word.clone());
    }
    names
}

fn lower_map<V: Copy>(map: &BTreeMap<String, V>) -> HashMap<String, V> {
    map.iter()
        .map(|(word, &value)| (word.to_lowercase(), value))
        .collect()
}

fn lower_set(words: &[String]) -> HashSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}
