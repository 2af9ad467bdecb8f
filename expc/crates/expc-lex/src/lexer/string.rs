//! String and character literal lexing.
//!
//! Quoted text is captured verbatim with a single escape rule: a backslash
//! takes the next character literally, whatever it is. `\n` therefore yields
//! `n`, and `\"` yields `"`.

use crate::error::{Construct, LexError, LexResult};
use crate::token::{Literal, Symbol, SymbolTag, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a quoted literal starting at the quote under the cursor.
    ///
    /// Pending accumulated text is flushed first. A double quote yields a
    /// [`Literal::String`]; a single quote yields a [`Literal::Char`] and
    /// fails if the captured text is longer than one character.
    pub(crate) fn lex_quoted(&mut self, quote: Symbol) -> LexResult<()> {
        self.flush();

        let (delimiter, construct) = match quote.tag {
            SymbolTag::SingleQuote => ('\'', Construct::CharLiteral),
            _ => ('"', Construct::StringLiteral),
        };
        let unterminated = LexError::UnterminatedLiteralOrComment { construct };

        self.cursor.advance();

        let mut content = String::new();
        loop {
            match self.cursor.bump() {
                None => return Err(unterminated),
                Some(c) if c == delimiter => break,
                Some('\\') => match self.cursor.bump() {
                    Some(escaped) => content.push(escaped),
                    None => return Err(unterminated),
                },
                Some(c) => content.push(c),
            }
        }

        let literal = match construct {
            Construct::CharLiteral => char_literal(content)?,
            _ => Literal::String(content),
        };
        self.emit(Token::Literal(literal));
        Ok(())
    }
}

/// Builds a character literal from captured text.
fn char_literal(content: String) -> LexResult<Literal> {
    let mut chars = content.chars();
    match (chars.next(), chars.next()) {
        (first, None) => Ok(Literal::Char(first)),
        _ => Err(LexError::CharLiteralTooLong { literal: content }),
    }
}
