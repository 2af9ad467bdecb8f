//! Token definitions.
//!
//! Every token is one of three kinds: a [`Symbol`] taken from the static
//! symbol table (operators, punctuation, reserved keywords), a [`Literal`]
//! with a typed payload, or an identifier carrying its raw text.

use std::fmt;
use std::ops::Index;
use std::slice;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Subtype tag of a symbol table entry.
///
/// The scanner dispatches on the tag, never on the lexeme itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolTag {
    /// `/`, which may also open a comment.
    Divide,
    /// `'`, opens a character literal.
    SingleQuote,
    /// `"`, opens a string literal.
    DoubleQuote,
    /// `.`, kept inside the accumulated text.
    Period,
    /// Space, tab and newline. Never emitted.
    Whitespace,
    /// Any other single-character symbol.
    Generic,
    /// A reserved word.
    Keyword,
}

/// A symbol table entry: the exact text and its tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
    /// The text this symbol matches.
    pub lexeme: &'static str,
    /// The symbol's subtype.
    pub tag: SymbolTag,
}

impl Symbol {
    /// Creates a symbol entry.
    pub const fn new(lexeme: &'static str, tag: SymbolTag) -> Self {
        Self { lexeme, tag }
    }

    /// Returns true for space, tab and newline.
    pub fn is_whitespace(&self) -> bool {
        self.tag == SymbolTag::Whitespace
    }

    /// Returns true for reserved words.
    pub fn is_keyword(&self) -> bool {
        self.tag == SymbolTag::Keyword
    }
}

/// The kind of a literal payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum LiteralKind {
    /// `true` or `false`
    Bool,
    /// 64-bit signed integer
    Int,
    /// 64-bit float
    Float,
    /// Double-quoted text
    String,
    /// Single-quoted character
    Char,
}

/// A literal value. The variant always matches its [`LiteralKind`].
///
/// Float literals compare NaN equal to NaN, so a token stream always equals
/// itself.
#[derive(Clone, Debug)]
pub enum Literal {
    /// Boolean literal.
    Bool(bool),
    /// Integer literal, any base.
    Int(i64),
    /// Floating-point literal. `inf`, `nan` and out-of-range exponents such
    /// as `1e999` produce non-finite values.
    Float(f64),
    /// String literal with escapes resolved and quotes removed.
    String(String),
    /// Character literal; `None` for the empty literal `''`.
    Char(Option<char>),
}

impl Literal {
    /// Returns the kind of this literal.
    pub fn kind(&self) -> LiteralKind {
        match self {
            Literal::Bool(_) => LiteralKind::Bool,
            Literal::Int(_) => LiteralKind::Int,
            Literal::Float(_) => LiteralKind::Float,
            Literal::String(_) => LiteralKind::String,
            Literal::Char(_) => LiteralKind::Char,
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Literal::Bool(a), Literal::Bool(b)) => a == b,
            (Literal::Int(a), Literal::Int(b)) => a == b,
            (Literal::Float(a), Literal::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Literal::String(a), Literal::String(b)) => a == b,
            (Literal::Char(a), Literal::Char(b)) => a == b,
            _ => false,
        }
    }
}

/// JSON has no non-finite numbers; these are written as strings instead.
fn non_finite_name(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value.is_sign_positive() {
        "inf"
    } else {
        "-inf"
    }
}

/// The three token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Symbol table entry, keywords included.
    Symbol,
    /// Literal with a payload.
    Literal,
    /// Anything else.
    Identifier,
}

impl TokenKind {
    /// Stable name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Symbol => "Symbol",
            TokenKind::Literal => "Literal",
            TokenKind::Identifier => "Identifier",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified token.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A symbol or reserved keyword.
    Symbol(Symbol),
    /// A literal value.
    Literal(Literal),
    /// An identifier, raw text unchanged.
    Ident(String),
}

impl Token {
    /// Returns the kind of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Symbol(_) => TokenKind::Symbol,
            Token::Literal(_) => TokenKind::Literal,
            Token::Ident(_) => TokenKind::Identifier,
        }
    }

    /// Returns the literal kind, or `None` for non-literals.
    pub fn literal_kind(&self) -> Option<LiteralKind> {
        match self {
            Token::Literal(literal) => Some(literal.kind()),
            _ => None,
        }
    }

    /// Returns the symbol table entry, or `None` for literals and identifiers.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Token::Symbol(symbol) => Some(*symbol),
            _ => None,
        }
    }

    /// Convenience constructor for identifier tokens.
    pub fn ident(text: impl Into<String>) -> Self {
        Token::Ident(text.into())
    }
}

impl From<Symbol> for Token {
    fn from(symbol: Symbol) -> Self {
        Token::Symbol(symbol)
    }
}

impl From<Literal> for Token {
    fn from(literal: Literal) -> Self {
        Token::Literal(literal)
    }
}

// Serialized as `{ kind, literalKind?, value?, tag? }` for downstream stages.
// Non-finite floats serialize their value as "inf", "-inf" or "NaN".
impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Token::Symbol(symbol) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("kind", self.kind().as_str())?;
                map.serialize_entry("value", symbol.lexeme)?;
                map.serialize_entry("tag", &symbol.tag)?;
                map.end()
            },
            Token::Literal(literal) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("kind", self.kind().as_str())?;
                map.serialize_entry("literalKind", &literal.kind())?;
                match literal {
                    Literal::Bool(value) => map.serialize_entry("value", value)?,
                    Literal::Int(value) => map.serialize_entry("value", value)?,
                    Literal::Float(value) if value.is_finite() => {
                        map.serialize_entry("value", value)?
                    },
                    Literal::Float(value) => {
                        map.serialize_entry("value", non_finite_name(*value))?
                    },
                    Literal::String(value) => map.serialize_entry("value", value)?,
                    Literal::Char(value) => map.serialize_entry("value", value)?,
                }
                map.end()
            },
            Token::Ident(text) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("kind", self.kind().as_str())?;
                map.serialize_entry("value", text)?;
                map.end()
            },
        }
    }
}

/// The ordered output of one tokenization pass.
///
/// Only the scanner appends; callers get read access and ownership.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Creates an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no token was produced.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates in source order.
    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Returns the tokens as a slice.
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Consumes the stream, returning the tokens.
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl From<TokenStream> for Vec<Token> {
    fn from(stream: TokenStream) -> Self {
        stream.tokens
    }
}
