use super::Token;

/// A numeric value extracted from an utterance, with the tokens it came from.
///
/// The token run is ordered by index and contiguous: an extraction never
/// claims words on both sides of an unrelated word. Both fields are fixed at
/// construction; absence of a number is expressed by `Option`, never by a
/// sentinel value, so `0` is an ordinary extracted value.
///
/// # Example
///
/// ```
/// use parlance::LocaleRegistry;
/// use parlance::lexer::tokenize;
/// use parlance::numbers::ExtractOptions;
///
/// let registry = LocaleRegistry::with_builtin();
/// let locale = registry.get("en");
/// let tokens = tokenize("around two hundred and one dollars");
/// let found = locale
///     .extract_number(&tokens, &ExtractOptions::builder().build())
///     .unwrap();
///
/// assert_eq!(found.value(), 201.0);
/// assert_eq!(found.start_index(), 1);
/// assert_eq!(found.end_index(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedNumber {
    value: f64,
    tokens: Vec<Token>,
}

impl ExtractedNumber {
    /// Build an extracted number from a value and its consumed tokens.
    ///
    /// Callers must pass a non-empty token run sorted by index with no gaps;
    /// the extraction engine constructs runs that way by design.
    pub(crate) fn new(value: f64, tokens: Vec<Token>) -> Self {
        debug_assert!(!tokens.is_empty(), "extracted number without tokens");
        debug_assert!(
            tokens
                .windows(2)
                .all(|w| w[1].index() == w[0].index() + 1),
            "extracted token run must be contiguous"
        );
        Self { value, tokens }
    }

    /// The extracted numeric value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The consumed tokens, in utterance order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Index of the first consumed token.
    pub fn start_index(&self) -> usize {
        self.tokens[0].index()
    }

    /// Index of the last consumed token.
    pub fn end_index(&self) -> usize {
        self.tokens[self.tokens.len() - 1].index()
    }

    /// The consumed words joined back into text.
    pub fn text(&self) -> String {
        let words: Vec<&str> = self.tokens.iter().map(Token::word).collect();
        words.join(" ")
    }
}
