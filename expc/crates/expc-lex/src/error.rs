//! Error types for expc-lex.
//!
//! Lexing has exactly two failure modes; source acquisition has its own
//! error type because it happens outside the scanner.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A construct whose closing delimiter was never found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Construct {
    /// `/* ...` without `*/`
    BlockComment,
    /// `"...` without a closing double quote
    StringLiteral,
    /// `'...` without a closing single quote
    CharLiteral,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Construct::BlockComment => "block comment",
            Construct::StringLiteral => "string literal",
            Construct::CharLiteral => "character literal",
        };
        f.write_str(name)
    }
}

/// Error that aborts a tokenization pass.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A single-quoted literal resolved to more than one character.
    #[error("too many values in character literal: '{literal}'")]
    CharLiteralTooLong {
        /// The resolved literal text, escapes already applied.
        literal: String,
    },

    /// Input ended inside a block comment or quoted literal.
    #[error("unterminated {construct}")]
    UnterminatedLiteralOrComment {
        /// What was left open.
        construct: Construct,
    },
}

/// Error raised while acquiring source text.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading from the file system or a reader failed.
    #[error("failed to read source{}: {source}", display_path(.path))]
    Read {
        /// The path being read, if the source came from the file system.
        path: Option<PathBuf>,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The path names something that cannot be loaded as one text blob.
    #[error("unsupported source: {} is a directory", .path.display())]
    Unsupported {
        /// The rejected path.
        path: PathBuf,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" {}", path.display()),
        None => String::new(),
    }
}

/// Result type alias for lexing operations.
pub type LexResult<T> = std::result::Result<T, LexError>;

/// Result type alias for source acquisition.
pub type SourceResult<T> = std::result::Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_literal_too_long_display() {
        let err = LexError::CharLiteralTooLong {
            literal: "ab".to_string(),
        };
        assert_eq!(err.to_string(), "too many values in character literal: 'ab'");
    }

    #[test]
    fn test_unterminated_display() {
        let err = LexError::UnterminatedLiteralOrComment {
            construct: Construct::BlockComment,
        };
        assert_eq!(err.to_string(), "unterminated block comment");
    }

    #[test]
    fn test_unsupported_display() {
        let err = SourceError::Unsupported {
            path: PathBuf::from("src"),
        };
        assert_eq!(err.to_string(), "unsupported source: src is a directory");
    }

    #[test]
    fn test_read_error_without_path() {
        let err = SourceError::Read {
            path: None,
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        };
        assert_eq!(err.to_string(), "failed to read source: boom");
    }
}
