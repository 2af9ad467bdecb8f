//! Literal classification.
//!
//! Turns a run of accumulated text into a concrete token. Classification is
//! best effort and never fails: text that is not a boolean, a number, or a
//! reserved word becomes an identifier, even when it looks like a malformed
//! number (`0xZZ`, `1.2.3`).

use tracing::trace;

use crate::symbol_table::SymbolTable;
use crate::token::{Literal, Token};

/// Classifies accumulated text.
///
/// Decision order:
///
/// 1. `true` / `false` → [`Literal::Bool`]
/// 2. integer, with an optional `0b`, `0o` or `0x` base prefix → [`Literal::Int`]
/// 3. floating point → [`Literal::Float`]
/// 4. exact symbol table hit → that symbol (keywords)
/// 5. anything else → [`Token::Ident`]
///
/// # Example
///
/// ```
/// use expc_lex::classify::classify;
/// use expc_lex::token::{Literal, Token};
///
/// assert_eq!(classify("0x1A"), Token::Literal(Literal::Int(26)));
/// assert_eq!(classify("foo"), Token::Ident("foo".to_string()));
/// ```
pub fn classify(text: &str) -> Token {
    debug_assert!(!text.is_empty(), "classify called with empty text");

    let token = match text {
        "true" => Token::Literal(Literal::Bool(true)),
        "false" => Token::Literal(Literal::Bool(false)),
        _ => parse_int(text)
            .map(Literal::Int)
            .or_else(|| text.parse::<f64>().ok().map(Literal::Float))
            .map(Token::Literal)
            .or_else(|| SymbolTable::global().lookup(text).map(Token::Symbol))
            .unwrap_or_else(|| Token::Ident(text.to_string())),
    };

    trace!(text, kind = %token.kind(), "classified");
    token
}

/// Splits off a base prefix. Anything without one is base 10.
fn split_base(text: &str) -> (u32, &str) {
    if let Some(digits) = text.strip_prefix("0b") {
        (2, digits)
    } else if let Some(digits) = text.strip_prefix("0o") {
        (8, digits)
    } else if let Some(digits) = text.strip_prefix("0x") {
        (16, digits)
    } else {
        (10, text)
    }
}

fn parse_int(text: &str) -> Option<i64> {
    let (base, digits) = split_base(text);
    i64::from_str_radix(digits, base).ok()
}
