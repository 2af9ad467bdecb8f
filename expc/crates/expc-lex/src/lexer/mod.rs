//! Lexer module.
//!
//! The scanner is split into focused components:
//! - `core` - Lexer struct, dispatch and flushing
//! - `comment` - Divide sign versus line and block comments
//! - `string` - String and character literals

mod comment;
mod core;
mod string;

pub use self::core::{tokenize, Lexer};
