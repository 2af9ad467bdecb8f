//! Divide sign and comments.
//!
//! A `/` is a flush boundary. The character after it decides whether it
//! starts a line comment, a block comment, or is the divide symbol itself.
//! Comments produce no tokens.

use crate::error::{Construct, LexError, LexResult};
use crate::token::{Symbol, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `/` under the cursor.
    pub(crate) fn lex_divide(&mut self, divide: Symbol) -> LexResult<()> {
        self.flush();
        self.cursor.advance();

        if self.cursor.match_char('/') {
            self.skip_line_comment();
        } else if self.cursor.match_char('*') {
            self.skip_block_comment()?;
        } else {
            self.emit(Token::Symbol(divide));
        }
        Ok(())
    }

    /// Skips to the next newline, leaving it for the whitespace rule.
    fn skip_line_comment(&mut self) {
        self.cursor.eat_until('\n');
    }

    /// Skips through the closing `*/`. Block comments do not nest.
    fn skip_block_comment(&mut self) -> LexResult<()> {
        if self.cursor.eat_past("*/") {
            Ok(())
        } else {
            Err(LexError::UnterminatedLiteralOrComment {
                construct: Construct::BlockComment,
            })
        }
    }
}
