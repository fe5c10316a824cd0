//! Column-list extraction over a token stream.

use alloc::vec::Vec;
use core::ops::Index;

use crate::errors::ExtractError;
use crate::lexer::tokenize;
use crate::token::{Token, TokenKind};

/// The column names of an `INSERT`, in source order.
///
/// Quoted names keep their delimiters. Duplicates are kept as they appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ColumnList<'input> {
    columns: Vec<Token<'input>>,
}

impl<'input> ColumnList<'input> {
    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns whether no column was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterates over the column tokens.
    pub fn iter(&self) -> core::slice::Iter<'_, Token<'input>> {
        self.columns.iter()
    }

    /// Returns the column tokens as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Token<'input>] {
        &self.columns
    }

    /// Returns the column names verbatim, delimiters included.
    #[must_use]
    pub fn names(&self) -> Vec<&'input str> {
        self.columns.iter().map(Token::as_str).collect()
    }

    /// Returns the column names with their delimiters stripped.
    #[must_use]
    pub fn unquoted_names(&self) -> Vec<&'input str> {
        self.columns.iter().map(Token::unquoted).collect()
    }
}

impl<'input> Index<usize> for ColumnList<'input> {
    type Output = Token<'input>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.columns[index]
    }
}

impl<'input> IntoIterator for ColumnList<'input> {
    type Item = Token<'input>;
    type IntoIter = alloc::vec::IntoIter<Token<'input>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl<'a, 'input> IntoIterator for &'a ColumnList<'input> {
    type Item = &'a Token<'input>;
    type IntoIter = core::slice::Iter<'a, Token<'input>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

/// Extracts the column list from a token stream.
///
/// Everything before the first `(` token is ignored. After it, every token
/// except `,` is collected until the first `)` token, which is not
/// included. Parentheses do not nest: a second `(` is collected like any
/// other token. A missing `(` yields an empty list and a missing `)` yields
/// every token up to the end of the stream.
#[must_use]
pub fn columns<'input>(tokens: &[Token<'input>]) -> ColumnList<'input> {
    let Some(open) = tokens.iter().position(|t| t.kind() == TokenKind::LParen) else {
        return ColumnList::default();
    };

    let columns = tokens[open + 1..]
        .iter()
        .take_while(|t| t.kind() != TokenKind::RParen)
        .filter(|t| t.kind() != TokenKind::Comma)
        .copied()
        .collect();

    ColumnList { columns }
}

/// Tokenizes `query` and extracts its column list.
///
/// # Errors
///
/// Returns an [`ExtractError`] when the tokenizer reported any problem. The
/// error still carries the columns extracted from the tokens that were read.
///
/// # Examples
///
/// ```
/// let columns = insert_columns::extract_columns("INSERT INTO t (`WEIGHT, in kg`, 'height in cm.')")?;
/// assert_eq!(columns.names(), ["`WEIGHT, in kg`", "'height in cm.'"]);
/// # Ok::<(), insert_columns::ExtractError<'static>>(())
/// ```
pub fn extract_columns(query: &str) -> Result<ColumnList<'_>, ExtractError<'_>> {
    let outcome = tokenize(query);
    let columns = outcome.tokens.columns();
    if outcome.errors.is_empty() {
        Ok(columns)
    } else {
        Err(ExtractError::new(outcome.errors, columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(query: &str) -> Vec<&str> {
        tokenize(query).columns().names()
    }

    #[test]
    fn test_simple() {
        assert_eq!(
            names("INSERT INTO table (column1, column2)"),
            ["column1", "column2"]
        );
    }

    #[test]
    fn test_without_parenthesis() {
        assert!(names("INSERT INTO table VALUES").is_empty());
        assert!(names("").is_empty());
    }

    #[test]
    fn test_without_closing_parenthesis() {
        assert_eq!(names("INSERT INTO t (a, b, c"), ["a", "b", "c"]);
    }

    #[test]
    fn test_stops_at_first_closing_parenthesis() {
        assert_eq!(names("INSERT INTO t (a, b) VALUES (1, 2)"), ["a", "b"]);
        assert_eq!(names("INSERT INTO t (a, (b), c)"), ["a", "(", "b"]);
    }

    #[test]
    fn test_qualifiers_before_parenthesis_are_ignored() {
        assert_eq!(names("INSERT INTO `DATA (BASE`.`A (TABLE)` (x)"), ["x"]);
    }

    #[test]
    fn test_dots_inside_list_are_kept() {
        assert_eq!(names("INSERT INTO t (t.a, b)"), ["t", ".", "a", "b"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(names("INSERT INTO t (a, a)"), ["a", "a"]);
    }

    #[test]
    fn test_empty_list() {
        let list = tokenize("INSERT INTO t ()").columns();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_unquoted_names() {
        let list = tokenize("INSERT INTO t (`a b`, 'c', d)").columns();
        assert_eq!(list.unquoted_names(), ["a b", "c", "d"]);
        assert!(list[0].is_quoted());
        assert!(!list[2].is_quoted());
    }

    #[test]
    fn test_extract_columns_reports_partial() {
        let error = extract_columns("INSERT INTO t (a, b, `c").unwrap_err();
        assert_eq!(error.partial().names(), ["a", "b"]);
        assert_eq!(error.errors().len(), 1);
    }
}
