//! Integration tests for the lexical substrate.

use parlance::lexer::{partition, tokenize};

// =========================================================================
// Tokenization
// =========================================================================

#[test]
fn splits_on_whitespace() {
    let tokens = tokenize("two hundred and one");
    let words: Vec<&str> = tokens.iter().map(|t| t.word()).collect();
    assert_eq!(words, ["two", "hundred", "and", "one"]);
}

#[test]
fn indices_count_from_zero() {
    let tokens = tokenize("a b c");
    let indices: Vec<usize> = tokens.iter().map(|t| t.index()).collect();
    assert_eq!(indices, [0, 1, 2]);
}

#[test]
fn separates_percent_after_digits() {
    let words: Vec<String> = tokenize("12%").iter().map(ToString::to_string).collect();
    assert_eq!(words, ["12", "%"]);
}

#[test]
fn separates_hash_before_digits() {
    let words: Vec<String> = tokenize("#1").iter().map(ToString::to_string).collect();
    assert_eq!(words, ["#", "1"]);
}

#[test]
fn percent_without_digits_is_untouched() {
    let words: Vec<String> = tokenize("%off").iter().map(ToString::to_string).collect();
    assert_eq!(words, ["%off"]);
}

#[test]
fn empty_text_yields_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   ").is_empty());
}

#[test]
fn tokenize_is_restartable() {
    let first = tokenize("one two three");
    let second = tokenize("one two three");
    assert_eq!(first, second);
}

// =========================================================================
// Partition
// =========================================================================

#[test]
fn partition_emits_separator_as_own_segment() {
    let tokens = tokenize("2 and 3/4");
    let segments = partition(&tokens, |t| t.word() == "and");
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].len(), 1);
    assert_eq!(segments[1][0].word(), "and");
    assert_eq!(segments[2][0].word(), "3/4");
}

#[test]
fn partition_drops_empty_segments() {
    let tokens = tokenize("and one and");
    let segments = partition(&tokens, |t| t.word() == "and");
    // leading and trailing separators produce no empty neighbors
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[1][0].word(), "one");
}

#[test]
fn partition_without_matches_is_single_segment() {
    let tokens = tokenize("one two");
    let segments = partition(&tokens, |t| t.word() == "zzz");
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].len(), 2);
}

#[test]
fn partition_preserves_original_indices() {
    let tokens = tokenize("one and two");
    let segments = partition(&tokens, |t| t.word() == "and");
    assert_eq!(segments[2][0].index(), 2);
}
