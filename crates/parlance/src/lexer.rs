//! Whitespace tokenizer and token-list partitioning.
//!
//! The tokenizer is deliberately small: it splits on whitespace after
//! separating a digit run from an immediately following `%` and a `#` from
//! an immediately following digit run, so `"12%"` and `"#1"` each produce
//! two tokens. Everything smarter (hyphenated compounds, literal fractions)
//! belongs to the extraction engine's token classifier.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::Token;

/// Compiled separation patterns, built once per process.
fn patterns() -> &'static LexPatterns {
    static PATTERNS: OnceLock<LexPatterns> = OnceLock::new();
    PATTERNS.get_or_init(LexPatterns::new)
}

struct LexPatterns {
    // digit run followed by a percent sign: "12%"
    percent: Regex,
    // hash mark followed by a digit run: "#1"
    numbered: Regex,
}

impl LexPatterns {
    fn new() -> Self {
        Self {
            percent: Regex::new(r"([0-9]+)%").expect("static pattern"),
            numbered: Regex::new(r"#([0-9]+)").expect("static pattern"),
        }
    }
}

/// Split text into position-tagged tokens.
///
/// Splits on runs of whitespace; token indices count words from 0. The
/// sequence is finite and the function is pure, so callers may re-tokenize
/// the same text at will.
///
/// # Example
///
/// ```
/// use parlance::lexer::tokenize;
///
/// let tokens = tokenize("rated #1 by 12% of voters");
/// let words: Vec<&str> = tokens.iter().map(|t| t.word()).collect();
/// assert_eq!(words, ["rated", "#", "1", "by", "12", "%", "of", "voters"]);
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    let patterns = patterns();
    let spaced = patterns.percent.replace_all(text, "$1 %");
    let spaced = patterns.numbered.replace_all(&spaced, "# $1");

    spaced
        .split_whitespace()
        .enumerate()
        .map(|(index, word)| Token::new(word, index))
        .collect()
}

/// Split a token list into segments at every token matching `predicate`.
///
/// Each matching token becomes its own one-element segment; runs of
/// non-matching tokens between them form the remaining segments. Empty
/// segments are dropped, so leading/trailing/adjacent separators never
/// produce them.
///
/// Used to locate fraction and decimal marker words: `"2 and 3/4"`
/// partitioned on the marker set yields `[["2"], ["and"], ["3/4"]]`, and the
/// outer segments feed back into recursive sub-extraction.
pub fn partition<F>(tokens: &[Token], predicate: F) -> Vec<Vec<Token>>
where
    F: Fn(&Token) -> bool,
{
    let mut segments = Vec::new();
    let mut current: Vec<Token> = Vec::new();

    for token in tokens {
        if predicate(token) {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
            segments.push(vec![token.clone()]);
        } else {
            current.push(token.clone());
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}
