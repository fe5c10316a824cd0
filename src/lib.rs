#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;

mod columns;
pub mod errors;
mod lexer;
mod token;

pub use columns::{ColumnList, columns, extract_columns};
pub use errors::{ExtractError, TokenizeError, TokenizeErrors};
pub use lexer::{EscapeMode, Tokenized, Tokenizer, TokenizerConfig, tokenize};
pub use token::{QuoteStyle, Token, TokenKind, TokenStream};
