//! Randomized extraction tests.
//!
//! Builds `INSERT` statements from randomly generated column names, with
//! random quoting and spacing, and checks that the extracted column list
//! matches the generated one.

use insert_columns::{QuoteStyle, extract_columns, tokenize};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const ITERATIONS: usize = 500;

/// Characters allowed inside a quoted column name, delimiters excluded.
const QUOTED_ALPHABET: &[char] = &[
    'a', 'Z', '0', '_', ' ', '(', ')', ',', '.', '-', '%', 'é', '\t', '\n', '"', ';',
];

const IDENTIFIER_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

fn random_identifier(rng: &mut StdRng) -> String {
    let len = rng.random_range(1..12);
    (0..len)
        .map(|_| {
            let index = rng.random_range(0..IDENTIFIER_ALPHABET.len());
            char::from(IDENTIFIER_ALPHABET[index])
        })
        .collect()
}

fn random_quoted(rng: &mut StdRng, style: QuoteStyle) -> String {
    let delimiter = style.delimiter();
    let other = match style {
        QuoteStyle::Backtick => QuoteStyle::Single.delimiter(),
        QuoteStyle::Single => QuoteStyle::Backtick.delimiter(),
    };
    let len = rng.random_range(0..16);
    let mut name = String::new();
    name.push(delimiter);
    for _ in 0..len {
        match rng.random_range(0..10) {
            0 => {
                name.push('\\');
                name.push(delimiter);
            }
            1 => name.push(other),
            _ => name.push(QUOTED_ALPHABET[rng.random_range(0..QUOTED_ALPHABET.len())]),
        }
    }
    name.push(delimiter);
    name
}

fn random_column(rng: &mut StdRng) -> String {
    match rng.random_range(0..3) {
        0 => random_identifier(rng),
        1 => random_quoted(rng, QuoteStyle::Backtick),
        _ => random_quoted(rng, QuoteStyle::Single),
    }
}

fn random_space(rng: &mut StdRng) -> &'static str {
    [" ", "", "\n", "\t", "  "][rng.random_range(0..5)]
}

#[test]
fn test_random_column_lists() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..ITERATIONS {
        let expected: Vec<String> = (0..rng.random_range(1..8))
            .map(|_| random_column(&mut rng))
            .collect();
        let table = random_column(&mut rng);

        let mut query = format!("INSERT INTO db.{table}{}(", random_space(&mut rng));
        for (i, column) in expected.iter().enumerate() {
            if i > 0 {
                query.push(',');
            }
            query.push_str(random_space(&mut rng));
            query.push_str(column);
            query.push_str(random_space(&mut rng));
        }
        query.push_str(") VALUES (1, 'x')");

        let columns = extract_columns(&query)
            .unwrap_or_else(|e| panic!("Failed to extract columns from {query:?}: {e}"));
        assert_eq!(columns.names(), expected, "query: {query:?}");
    }
}

#[test]
fn test_random_input_invariants() {
    let mut rng = StdRng::seed_from_u64(7);
    let alphabet = [
        'a', '_', '1', ' ', '`', '\'', '\\', '(', ')', ',', '.', ';', 'é', '\n',
    ];

    for _ in 0..ITERATIONS {
        let len = rng.random_range(0..40);
        let query: String = (0..len)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect();

        let outcome = tokenize(&query);
        let mut previous_end = 0;
        for token in &outcome.tokens {
            let text = token.as_str();
            assert!(!text.is_empty(), "query: {query:?}");
            assert!(token.pos() >= previous_end, "query: {query:?}");
            assert_eq!(&query[token.pos()..token.pos() + text.len()], text);
            if let Some(style) = token.quote_style() {
                assert!(text.len() >= 2, "query: {query:?}");
                assert!(text.starts_with(style.delimiter()), "query: {query:?}");
                assert!(text.ends_with(style.delimiter()), "query: {query:?}");
            }
            previous_end = token.pos() + text.len();
        }

        let names = outcome.columns().names();
        assert!(!names.contains(&",") && !names.contains(&")"));
    }
}
