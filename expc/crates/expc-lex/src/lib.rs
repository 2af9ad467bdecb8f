//! expc-lex - Lexical Analyzer for the Express Programming Language
//!
//! This crate turns Express source text into an ordered stream of classified
//! tokens in a single forward pass. It is the front end of the compiler; the
//! token stream it produces is consumed by the parser.
//!
//! # Example Usage
//!
//! ```
//! use expc_lex::{tokenize, Literal, Token};
//!
//! let (tokens, error) = tokenize("var answer = 0x2A;");
//! assert!(error.is_none());
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[3], Token::Literal(Literal::Int(42)));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the token stream
//! - [`symbol_table`] - Static table of symbols and reserved words
//! - [`accumulator`] - Buffer of text awaiting classification
//! - [`classify`] - Literal, keyword and identifier classification
//! - [`lexer`] - The scanner
//! - [`cursor`] - Character cursor for source traversal
//! - [`source`] - Loading source text from strings, readers and files
//! - [`error`] - Error types
//!
//! # How Text Becomes Tokens
//!
//! Characters outside the symbol table accumulate. A symbol ends the
//! accumulated run, which is classified in this order:
//!
//! 1. **Boolean**: `true`, `false`
//! 2. **Integer**: `42`, `0x1A`, `0b101`, `0o17`
//! 3. **Float**: `3.14`, `1e10`
//! 4. **Keyword**: `var`, `int`, `if`, `return`, ...
//! 5. **Identifier**: everything else, verbatim
//!
//! ## Symbols
//!
//! Single characters only: `: = + - * / ( ) { } [ ] ; , # ! < > @ \`.
//! Whitespace (space, tab, newline) separates tokens and is never emitted.
//! A `.` stays inside the accumulated text, so `3.14` and `a.b` are single
//! tokens.
//!
//! ## Comments and Quotes
//!
//! - `// ...` runs to the end of the line, `/* ... */` does not nest.
//! - `"..."` is a string literal, `'.'` a character literal. A backslash takes
//!   the next character literally.
//!
//! # Errors
//!
//! A pass stops at the first [`LexError`]: an unterminated block comment or
//! literal, or a character literal longer than one character. Tokens produced
//! before the error are returned alongside it.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod accumulator;
pub mod classify;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod source;
pub mod symbol_table;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use classify::classify;
pub use cursor::Cursor;
pub use error::{Construct, LexError, LexResult, SourceError, SourceResult};
pub use lexer::{tokenize, Lexer};
pub use source::{SourceOptions, SourceText};
pub use symbol_table::SymbolTable;
pub use token::{Literal, LiteralKind, Symbol, SymbolTag, Token, TokenKind, TokenStream};
