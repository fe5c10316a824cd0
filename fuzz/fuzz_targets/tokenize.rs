//! Tokenizer fuzzer.
//!
//! Feeds arbitrary UTF-8 strings through the tokenizer and the column
//! extractor and checks the structural invariants of the output:
//! 1. Tokens are never empty and appear in increasing, non-overlapping order
//! 2. Every token is the verbatim slice of the input at its position
//! 3. Quoted tokens are at least two bytes and start and end with their delimiter
//! 4. An unclosed quote is always the last error reported
//! 5. The column list never contains a comma or closing parenthesis token

use honggfuzz::fuzz;
use insert_columns::{TokenKind, TokenizeError, tokenize};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(query) = std::str::from_utf8(data) {
                check_invariants(query);
            }
        });
    }
}

fn check_invariants(query: &str) {
    let outcome = tokenize(query);

    let mut previous_end = 0;
    for token in &outcome.tokens {
        let text = token.as_str();
        assert!(!text.is_empty());
        assert!(token.pos() >= previous_end);
        assert_eq!(&query[token.pos()..token.pos() + text.len()], text);
        if let Some(style) = token.quote_style() {
            assert!(text.len() >= 2);
            assert!(text.starts_with(style.delimiter()));
            assert!(text.ends_with(style.delimiter()));
        }
        previous_end = token.pos() + text.len();
    }

    let errors = outcome.errors.as_slice();
    if let Some(index) = errors
        .iter()
        .position(|e| matches!(e, TokenizeError::UnclosedQuote { .. }))
    {
        assert_eq!(index, errors.len() - 1);
    }

    for column in &outcome.columns() {
        let kind = column.kind();
        assert!(kind != TokenKind::Comma && kind != TokenKind::RParen);
    }
}
