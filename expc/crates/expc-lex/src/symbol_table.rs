//! The static symbol table.
//!
//! One read-only map from exact text to [`Symbol`], built on first use and
//! shared by every tokenization pass. Single characters drive the scanner;
//! the multi-character entries are the reserved keywords consulted by the
//! classifier.
//!
//! Only single characters are ever matched by the scanner, so a compound
//! operator such as `==` lexes as two `=` symbols.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::token::{Symbol, SymbolTag};

/// Single-character entries.
const CHAR_SYMBOLS: &[Symbol] = &[
    Symbol::new("/", SymbolTag::Divide),
    Symbol::new("'", SymbolTag::SingleQuote),
    Symbol::new("\"", SymbolTag::DoubleQuote),
    Symbol::new(".", SymbolTag::Period),
    Symbol::new(" ", SymbolTag::Whitespace),
    Symbol::new("\t", SymbolTag::Whitespace),
    Symbol::new("\n", SymbolTag::Whitespace),
    Symbol::new(":", SymbolTag::Generic),
    Symbol::new("=", SymbolTag::Generic),
    Symbol::new("+", SymbolTag::Generic),
    Symbol::new("-", SymbolTag::Generic),
    Symbol::new("*", SymbolTag::Generic),
    Symbol::new("(", SymbolTag::Generic),
    Symbol::new(")", SymbolTag::Generic),
    Symbol::new("{", SymbolTag::Generic),
    Symbol::new("}", SymbolTag::Generic),
    Symbol::new("[", SymbolTag::Generic),
    Symbol::new("]", SymbolTag::Generic),
    Symbol::new(";", SymbolTag::Generic),
    Symbol::new(",", SymbolTag::Generic),
    Symbol::new("#", SymbolTag::Generic),
    Symbol::new("!", SymbolTag::Generic),
    Symbol::new("<", SymbolTag::Generic),
    Symbol::new(">", SymbolTag::Generic),
    Symbol::new("@", SymbolTag::Generic),
    Symbol::new("\\", SymbolTag::Generic),
];

/// Reserved words.
pub const KEYWORDS: &[&str] = &[
    "var", "int", "float", "string", "bool", "char", "object", "if", "else", "for", "while",
    "return", "fn", "import", "struct", "type",
];

static SYMBOL_TABLE: LazyLock<SymbolTable> = LazyLock::new(SymbolTable::build);

/// Immutable lookup table from text to symbol.
pub struct SymbolTable {
    entries: FxHashMap<&'static str, Symbol>,
}

impl SymbolTable {
    fn build() -> Self {
        let capacity = CHAR_SYMBOLS.len() + KEYWORDS.len();
        let mut entries = FxHashMap::with_capacity_and_hasher(capacity, Default::default());
        for symbol in CHAR_SYMBOLS {
            entries.insert(symbol.lexeme, *symbol);
        }
        for &keyword in KEYWORDS {
            entries.insert(keyword, Symbol::new(keyword, SymbolTag::Keyword));
        }
        Self { entries }
    }

    /// Returns the process-wide table.
    pub fn global() -> &'static SymbolTable {
        &SYMBOL_TABLE
    }

    /// Exact-match lookup on arbitrary text.
    pub fn lookup(&self, text: &str) -> Option<Symbol> {
        self.entries.get(text).copied()
    }

    /// Lookup of the single character the scanner is looking at.
    pub fn lookup_char(&self, c: char) -> Option<Symbol> {
        let mut buf = [0u8; 4];
        self.lookup(c.encode_utf8(&mut buf))
    }

    /// Returns true if `text` is a reserved word.
    pub fn is_keyword(&self, text: &str) -> bool {
        self.lookup(text).is_some_and(|symbol| symbol.is_keyword())
    }

    /// Number of entries, keywords included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
