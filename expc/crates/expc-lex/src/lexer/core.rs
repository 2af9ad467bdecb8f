//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and the per-character dispatch.

use tracing::{debug, trace, warn};

use crate::accumulator::Accumulator;
use crate::classify::classify;
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::symbol_table::SymbolTable;
use crate::token::{Symbol, SymbolTag, Token, TokenStream};

/// Lexer for Express source text.
///
/// One lexer performs one pass. Characters that are not in the symbol table
/// pile up in an accumulator; each symbol either extends the accumulated text
/// (`.`), or flushes it through the classifier and then emits itself (or,
/// for whitespace, nothing). Quotes and `/` start sub-scans that move the
/// cursor ahead by a data-dependent amount.
///
/// # Example
///
/// ```
/// use expc_lex::{Lexer, Literal, Token};
///
/// let mut lexer = Lexer::new("x 0x1A");
/// lexer.tokenize().unwrap();
///
/// assert_eq!(lexer.tokens()[0], Token::Ident("x".to_string()));
/// assert_eq!(lexer.tokens()[1], Token::Literal(Literal::Int(26)));
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Text seen since the last flush boundary.
    accumulator: Accumulator,

    /// Output of the pass.
    tokens: TokenStream,

    /// Shared symbol table.
    table: &'static SymbolTable,

    /// Result of the pass, once it has run.
    outcome: Option<LexResult<()>>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            accumulator: Accumulator::new(),
            tokens: TokenStream::new(),
            table: SymbolTable::global(),
            outcome: None,
        }
    }

    /// Runs the pass over the whole source.
    ///
    /// The pass runs once; later calls return the first outcome. On error the
    /// tokens produced before the failure stay available through
    /// [`Lexer::tokens`].
    pub fn tokenize(&mut self) -> LexResult<()> {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }

        let outcome = self.run();
        match &outcome {
            Ok(()) => debug!(
                bytes = self.source().len(),
                tokens = self.tokens.len(),
                "tokenized source"
            ),
            Err(error) => warn!(
                %error,
                offset = self.cursor.position(),
                tokens = self.tokens.len(),
                "tokenization aborted"
            ),
        }
        self.outcome = Some(outcome.clone());
        outcome
    }

    /// Returns the source text fed to the lexer.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Returns the tokens collected so far.
    pub fn tokens(&self) -> &TokenStream {
        &self.tokens
    }

    /// Consumes the lexer, returning its tokens.
    pub fn into_tokens(self) -> TokenStream {
        self.tokens
    }

    fn run(&mut self) -> LexResult<()> {
        while let Some(c) = self.cursor.current_char() {
            match self.table.lookup_char(c) {
                Some(symbol) => self.lex_symbol(symbol)?,
                None => {
                    self.accumulator.push(c);
                    self.cursor.advance();
                },
            }
        }

        self.flush();
        Ok(())
    }

    /// Dispatches on the tag of the symbol under the cursor.
    fn lex_symbol(&mut self, symbol: Symbol) -> LexResult<()> {
        match symbol.tag {
            SymbolTag::Divide => self.lex_divide(symbol)?,
            SymbolTag::SingleQuote | SymbolTag::DoubleQuote => self.lex_quoted(symbol)?,
            SymbolTag::Period => {
                // Member access versus decimal point is the parser's call.
                self.accumulator.push('.');
                self.cursor.advance();
            },
            SymbolTag::Whitespace => {
                self.flush();
                self.cursor.advance();
            },
            // Keywords are multi-character, so only the classifier yields them.
            SymbolTag::Generic | SymbolTag::Keyword => {
                self.flush();
                self.cursor.advance();
                self.emit(Token::Symbol(symbol));
            },
        }
        Ok(())
    }

    /// Classifies and emits pending text, if any.
    pub(crate) fn flush(&mut self) {
        if let Some(text) = self.accumulator.take() {
            trace!(text = %text, "flush");
            let token = classify(&text);
            self.emit(token);
        }
    }

    pub(crate) fn emit(&mut self, token: Token) {
        self.tokens.push(token);
    }
}

/// Tokenizes `source` in one pass.
///
/// Returns every token produced, plus the error that stopped the pass early,
/// if any. Tokens emitted before an error are kept.
///
/// # Example
///
/// ```
/// use expc_lex::{tokenize, LexError, Literal, Token};
///
/// let (tokens, error) = tokenize("1 // one\n2");
/// assert!(error.is_none());
/// assert_eq!(
///     tokens.as_slice(),
///     [Token::Literal(Literal::Int(1)), Token::Literal(Literal::Int(2))]
/// );
///
/// let (tokens, error) = tokenize("x 'ab'");
/// assert_eq!(tokens.len(), 1);
/// assert!(matches!(error, Some(LexError::CharLiteralTooLong { .. })));
/// ```
pub fn tokenize(source: &str) -> (TokenStream, Option<LexError>) {
    let mut lexer = Lexer::new(source);
    let error = lexer.tokenize().err();
    (lexer.into_tokens(), error)
}
