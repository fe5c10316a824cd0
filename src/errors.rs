//! Submodule defining the errors used across the crate.

use alloc::vec::Vec;
use core::fmt::{self, Display};

use crate::columns::ColumnList;
use crate::token::QuoteStyle;

/// Errors that can occur during tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenizeError {
    /// The input ended inside a quoted token.
    #[error("Unclosed {style} quote starting at position {pos}")]
    UnclosedQuote {
        /// The quote style of the unterminated token.
        style: QuoteStyle,
        /// Position of the opening quote.
        pos: usize,
    },
    /// A character that cannot start any token.
    #[error("Unexpected character '{char}' at position {pos}")]
    UnexpectedCharacter {
        /// The unexpected character.
        char: char,
        /// Position in input.
        pos: usize,
    },
}

impl TokenizeError {
    /// Returns the byte offset in the query where the error was found.
    #[must_use]
    pub fn pos(&self) -> usize {
        match self {
            TokenizeError::UnclosedQuote { pos, .. }
            | TokenizeError::UnexpectedCharacter { pos, .. } => *pos,
        }
    }
}

/// Every error found during one tokenization pass, in input order.
///
/// An empty aggregate means the pass was clean. A non-empty one means some
/// tokens may be missing or truncated, not that no tokens were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct TokenizeErrors {
    errors: Vec<TokenizeError>,
}

impl TokenizeErrors {
    pub(crate) fn push(&mut self, error: TokenizeError) {
        self.errors.push(error);
    }

    /// Returns whether no error was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates over the recorded errors.
    pub fn iter(&self) -> core::slice::Iter<'_, TokenizeError> {
        self.errors.iter()
    }

    /// Returns the recorded errors as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[TokenizeError] {
        &self.errors
    }
}

impl Display for TokenizeErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl core::error::Error for TokenizeErrors {}

impl From<Vec<TokenizeError>> for TokenizeErrors {
    fn from(errors: Vec<TokenizeError>) -> Self {
        Self { errors }
    }
}

impl<'a> IntoIterator for &'a TokenizeErrors {
    type Item = &'a TokenizeError;
    type IntoIter = core::slice::Iter<'a, TokenizeError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl IntoIterator for TokenizeErrors {
    type Item = TokenizeError;
    type IntoIter = alloc::vec::IntoIter<TokenizeError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Error returned by [`extract_columns`](crate::extract_columns) when the
/// tokenizer reported problems.
///
/// The columns extracted from whatever tokens were produced remain
/// available through [`ExtractError::partial`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{errors}")]
pub struct ExtractError<'input> {
    errors: TokenizeErrors,
    partial: ColumnList<'input>,
}

impl<'input> ExtractError<'input> {
    pub(crate) fn new(errors: TokenizeErrors, partial: ColumnList<'input>) -> Self {
        Self { errors, partial }
    }

    /// Returns the tokenizer errors.
    #[must_use]
    pub fn errors(&self) -> &TokenizeErrors {
        &self.errors
    }

    /// Returns the columns extracted despite the errors.
    #[must_use]
    pub fn partial(&self) -> &ColumnList<'input> {
        &self.partial
    }

    /// Splits the error into its tokenizer errors and partial columns.
    #[must_use]
    pub fn into_parts(self) -> (TokenizeErrors, ColumnList<'input>) {
        (self.errors, self.partial)
    }
}
