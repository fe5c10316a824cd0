//! Character-level tokenizer for the column-list clause of an `INSERT`.
//!
//! The tokenizer is a single forward scan over the query: whitespace is
//! skipped, quoted runs and identifiers are consumed whole, and each
//! punctuation character becomes its own token. It never backtracks, so
//! the cost of a pass is linear in the length of the query.

use crate::columns::ColumnList;
use crate::errors::{TokenizeError, TokenizeErrors};
use crate::token::{QuoteStyle, Token, TokenKind, TokenStream};

/// Bytes allowed in an unquoted identifier.
static IDENTIFIER_BYTES: [bool; 128] = identifier_table();

const fn identifier_table() -> [bool; 128] {
    let mut table = [false; 128];
    let mut b: u8 = 0;
    while b < 128 {
        table[b as usize] = b.is_ascii_alphanumeric() || b == b'_';
        b += 1;
    }
    table
}

/// Check if a character can appear in an unquoted identifier.
fn is_identifier_char(c: char) -> bool {
    IDENTIFIER_BYTES.get(c as usize).copied().unwrap_or(false)
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// How a backslash before a closing quote is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EscapeMode {
    /// A quote is escaped when preceded by an odd number of consecutive
    /// backslashes, so `\\` before a quote is a literal backslash and the
    /// quote closes the token.
    #[default]
    TrailingBackslashRun,
    /// A quote is escaped whenever the character before it is a backslash,
    /// regardless of whether that backslash is itself escaped.
    SingleBackslash,
}

impl EscapeMode {
    /// Returns whether a quote preceded by `backslashes` consecutive
    /// backslashes is escaped.
    #[must_use]
    pub const fn is_escaped(self, backslashes: usize) -> bool {
        match self {
            EscapeMode::TrailingBackslashRun => backslashes % 2 == 1,
            EscapeMode::SingleBackslash => backslashes > 0,
        }
    }
}

/// Tokenizer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenizerConfig {
    /// Escape rule applied inside quoted tokens.
    pub escape_mode: EscapeMode,
}

impl TokenizerConfig {
    /// Returns this configuration with the given escape mode.
    #[must_use]
    pub const fn with_escape_mode(mut self, escape_mode: EscapeMode) -> Self {
        self.escape_mode = escape_mode;
        self
    }
}

/// The outcome of a tokenization pass.
///
/// Tokenization is best-effort: `tokens` holds everything that could be
/// read even when `errors` is not empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized<'input> {
    /// The tokens, in order of appearance.
    pub tokens: TokenStream<'input>,
    /// Every problem found during the pass.
    pub errors: TokenizeErrors,
}

impl<'input> Tokenized<'input> {
    /// Returns whether the pass completed without errors.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Extracts the column list from the tokens that were produced.
    #[must_use]
    pub fn columns(&self) -> ColumnList<'input> {
        self.tokens.columns()
    }

    /// Converts the outcome into a `Result`, failing if any error was found.
    ///
    /// # Errors
    ///
    /// Returns the aggregated errors when the pass was not clean.
    pub fn into_result(self) -> Result<TokenStream<'input>, TokenizeErrors> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

/// Tokenizer over a query string.
///
/// Iterating yields tokens and recoverable errors in input order. An
/// unclosed quote consumes the rest of the input, so it is always the last
/// item yielded.
#[derive(Debug, Clone)]
pub struct Tokenizer<'input> {
    input: &'input str,
    pos: usize,
    config: TokenizerConfig,
}

impl<'input> Tokenizer<'input> {
    /// Create a new tokenizer for the given input.
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self::with_config(input, TokenizerConfig::default())
    }

    /// Create a new tokenizer with explicit options.
    #[must_use]
    pub fn with_config(input: &'input str, config: TokenizerConfig) -> Self {
        Self {
            input,
            pos: 0,
            config,
        }
    }

    /// Get the current byte position in the input.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Run the tokenizer to the end of the input, collecting every token
    /// and every error.
    #[must_use]
    pub fn tokenize(self) -> Tokenized<'input> {
        let mut outcome = Tokenized::default();
        for item in self {
            match item {
                Ok(token) => outcome.tokens.push(token),
                Err(error) => {
                    tracing::debug!(pos = error.pos(), %error, "recoverable tokenizer error");
                    outcome.errors.push(error);
                }
            }
        }
        tracing::trace!(
            tokens = outcome.tokens.len(),
            errors = outcome.errors.len(),
            "tokenization pass finished"
        );
        outcome
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Reads a quoted run whose opening delimiter starts at `start` and has
    /// already been consumed.
    fn read_quoted(
        &mut self,
        style: QuoteStyle,
        start: usize,
    ) -> Result<Token<'input>, TokenizeError> {
        let input = self.input;
        let delimiter = style.delimiter();
        let content_start = self.pos;
        let mut backslashes = 0usize;

        for (offset, c) in input[content_start..].char_indices() {
            if c == delimiter && !self.config.escape_mode.is_escaped(backslashes) {
                self.pos = content_start + offset + c.len_utf8();
                let token = Token::new(TokenKind::Quoted(style), &input[start..self.pos], start);
                return Ok(token);
            }
            backslashes = if c == '\\' { backslashes + 1 } else { 0 };
        }

        self.pos = input.len();
        Err(TokenizeError::UnclosedQuote { style, pos: start })
    }

    /// Reads an identifier whose first character starts at `start` and has
    /// already been consumed.
    fn read_identifier(&mut self, start: usize) -> Token<'input> {
        while let Some(c) = self.peek_char() {
            if !is_identifier_char(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        Token::new(TokenKind::Identifier, &self.input[start..self.pos], start)
    }
}

impl<'input> Iterator for Tokenizer<'input> {
    type Item = Result<Token<'input>, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let c = self.peek_char()?;
            let start = self.pos;
            self.pos += c.len_utf8();

            if is_space(c) {
                continue;
            }
            if let Some(style) = QuoteStyle::from_delimiter(c) {
                return Some(self.read_quoted(style, start));
            }
            if is_identifier_char(c) {
                return Some(Ok(self.read_identifier(start)));
            }
            if let Some(kind) = TokenKind::punctuation(c) {
                let token = Token::new(kind, &self.input[start..self.pos], start);
                return Some(Ok(token));
            }
            return Some(Err(TokenizeError::UnexpectedCharacter {
                char: c,
                pos: start,
            }));
        }
    }
}

impl core::iter::FusedIterator for Tokenizer<'_> {}

/// Tokenize `query` with the default options.
///
/// # Examples
///
/// ```
/// let outcome = insert_columns::tokenize("INSERT INTO db.t(a, `b c`)");
/// assert!(outcome.is_clean());
/// assert_eq!(
///     outcome.tokens.texts(),
///     ["INSERT", "INTO", "db", ".", "t", "(", "a", ",", "`b c`", ")"]
/// );
/// ```
#[must_use]
pub fn tokenize(query: &str) -> Tokenized<'_> {
    Tokenizer::new(query).tokenize()
}
