//! Error types for locale loading and rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading a locale document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a locale document.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parse error with source location.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// A format-family entry key that is neither `"default"` nor a number.
    #[error("format family '{family}': bad entry key '{key}'")]
    BadFamilyKey { family: String, key: String },

    /// A format family without a `"default"` template.
    #[error("format family '{family}' has no default template")]
    MissingDefaultTemplate { family: String },

    /// An override pattern that is not a valid regular expression.
    #[error("format family '{family}' entry {key}: bad pattern: {message}")]
    BadPattern {
        family: String,
        key: u32,
        message: String,
    },

    /// A template string that fails to parse.
    #[error("format family '{family}': bad template: {message}")]
    BadTemplate { family: String, message: String },

    /// A scale word whose value is not a power of ten of at least 10³.
    #[error("scale word '{word}' maps to {value}, not a power of ten >= 1000")]
    BadScaleWord { word: String, value: f64 },

    /// The hundreds table is empty.
    #[error("number tables define no hundreds word")]
    MissingHundredWord,

    /// A weekday or month list of the wrong length.
    #[error("word list '{name}' has {got} entries, expected {expected}")]
    BadWordList {
        name: String,
        expected: usize,
        got: usize,
    },
}

/// An error from template rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No format family with the requested name is loaded.
    #[error("unknown format family '{name}'{}", suggestion_suffix(suggestions))]
    UnknownFamily {
        name: String,
        suggestions: Vec<String>,
    },
}

fn suggestion_suffix(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Rank candidate names by similarity to the input.
///
/// Returns up to three candidates scoring at least 0.7 by Jaro-Winkler
/// distance, best first. Used to build "did you mean" error messages.
pub fn compute_suggestions(input: &str, candidates: &[&str]) -> Vec<String> {
    let mut scored: Vec<(f64, &str)> = candidates
        .iter()
        .map(|&candidate| (strsim::jaro_winkler(input, candidate), candidate))
        .filter(|&(score, _)| score >= 0.7)
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
