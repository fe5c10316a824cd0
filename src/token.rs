//! Tokens produced by the [`Tokenizer`](crate::Tokenizer).

use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::ops::Deref;

use crate::columns::{ColumnList, columns};

/// The quote character delimiting a quoted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum QuoteStyle {
    /// Backtick-quoted, as in MySQL and ClickHouse identifiers.
    Backtick,
    /// Single-quoted.
    Single,
}

impl QuoteStyle {
    /// Returns the delimiter character for this quote style.
    #[must_use]
    pub const fn delimiter(self) -> char {
        match self {
            QuoteStyle::Backtick => '`',
            QuoteStyle::Single => '\'',
        }
    }

    /// Returns the quote style opened by `c`, if any.
    #[must_use]
    pub const fn from_delimiter(c: char) -> Option<Self> {
        match c {
            '`' => Some(QuoteStyle::Backtick),
            '\'' => Some(QuoteStyle::Single),
            _ => None,
        }
    }
}

impl Display for QuoteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteStyle::Backtick => f.write_str("backtick"),
            QuoteStyle::Single => f.write_str("single"),
        }
    }
}

/// The different kinds of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// A quoted run, delimiters included.
    Quoted(QuoteStyle),
    /// An unquoted identifier made of ASCII letters, digits and underscores.
    Identifier,
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
    /// Comma
    Comma,
    /// Dot
    Dot,
}

impl TokenKind {
    /// Returns the punctuation kind for `c`, if `c` is punctuation.
    #[must_use]
    pub(crate) const fn punctuation(c: char) -> Option<Self> {
        match c {
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            ',' => Some(TokenKind::Comma),
            '.' => Some(TokenKind::Dot),
            _ => None,
        }
    }
}

/// A token produced by the tokenizer.
///
/// The token borrows its text verbatim from the query, so quoted tokens
/// keep both delimiters and any escape sequences they contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'input> {
    kind: TokenKind,
    text: &'input str,
    pos: usize,
}

impl<'input> Token<'input> {
    pub(crate) fn new(kind: TokenKind, text: &'input str, pos: usize) -> Self {
        debug_assert!(!text.is_empty());
        Self { kind, text, pos }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the verbatim text of this token.
    #[must_use]
    pub fn as_str(&self) -> &'input str {
        self.text
    }

    /// Returns the byte offset in the query where this token starts.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns whether this token is a quoted run.
    #[must_use]
    pub fn is_quoted(&self) -> bool {
        matches!(self.kind, TokenKind::Quoted(_))
    }

    /// Returns the quote style of a quoted token.
    #[must_use]
    pub fn quote_style(&self) -> Option<QuoteStyle> {
        match self.kind {
            TokenKind::Quoted(style) => Some(style),
            _ => None,
        }
    }

    /// Returns the token text with its delimiters stripped.
    ///
    /// The content is returned verbatim: escape sequences are not
    /// interpreted. Unquoted tokens are returned as they are.
    ///
    /// # Examples
    ///
    /// ```
    /// let tokens = insert_columns::tokenize(r"(`WEIGHT (kg)`, 'it\'s')").tokens;
    /// assert_eq!(tokens[1].unquoted(), "WEIGHT (kg)");
    /// assert_eq!(tokens[3].unquoted(), r"it\'s");
    /// ```
    #[must_use]
    pub fn unquoted(&self) -> &'input str {
        match self.kind {
            // Both delimiters are single-byte ASCII.
            TokenKind::Quoted(_) => &self.text[1..self.text.len() - 1],
            _ => self.text,
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

impl PartialEq<str> for Token<'_> {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

/// An ordered sequence of tokens, in order of appearance in the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream<'input> {
    tokens: Vec<Token<'input>>,
}

impl<'input> TokenStream<'input> {
    pub(crate) fn push(&mut self, token: Token<'input>) {
        self.tokens.push(token);
    }

    /// Returns the tokens as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Token<'input>] {
        &self.tokens
    }

    /// Extracts the column list from this stream.
    ///
    /// See [`columns`](crate::columns()) for the extraction rules.
    #[must_use]
    pub fn columns(&self) -> ColumnList<'input> {
        columns(&self.tokens)
    }

    /// Returns the verbatim text of every token.
    #[must_use]
    pub fn texts(&self) -> Vec<&'input str> {
        self.tokens.iter().map(Token::as_str).collect()
    }
}

impl<'input> Deref for TokenStream<'input> {
    type Target = [Token<'input>];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl<'input> From<Vec<Token<'input>>> for TokenStream<'input> {
    fn from(tokens: Vec<Token<'input>>) -> Self {
        Self { tokens }
    }
}

impl<'input> From<TokenStream<'input>> for Vec<Token<'input>> {
    fn from(stream: TokenStream<'input>) -> Self {
        stream.tokens
    }
}

impl<'input> IntoIterator for TokenStream<'input> {
    type Item = Token<'input>;
    type IntoIter = alloc::vec::IntoIter<Token<'input>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a, 'input> IntoIterator for &'a TokenStream<'input> {
    type Item = &'a Token<'input>;
    type IntoIter = core::slice::Iter<'a, Token<'input>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
