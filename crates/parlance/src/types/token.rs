use serde::{Deserialize, Serialize};

/// A single word of an utterance together with its position.
///
/// Tokens are produced by [`tokenize`](crate::lexer::tokenize) and carry the
/// 0-based position of the word in the originating utterance. The index is
/// fixed at creation and never renumbered; the only permitted mutation is
/// blanking the word to mark it as consumed by a previous extraction pass.
///
/// # Example
///
/// ```
/// use parlance::lexer::tokenize;
///
/// let tokens = tokenize("twenty two");
/// assert_eq!(tokens[0].word(), "twenty");
/// assert_eq!(tokens[1].index(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    word: String,
    index: usize,
}

impl Token {
    /// Create a token from a word and its position in the utterance.
    pub fn new(word: impl Into<String>, index: usize) -> Self {
        Self {
            word: word.into(),
            index,
        }
    }

    /// The word text. Empty once the token has been consumed.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Position of the word in the originating utterance.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether this token has been blanked by a previous extraction.
    pub fn is_blank(&self) -> bool {
        self.word.is_empty()
    }

    /// Blank the word to mark it as consumed. The index is untouched.
    pub(crate) fn blank(&mut self) {
        self.word.clear();
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.word)
    }
}
