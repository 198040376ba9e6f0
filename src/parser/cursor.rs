//! Consumable token sequence
//!
//! [`TokenCursor`] is the only mutable state the parser has. Tokens leave it
//! strictly in the order the lexer produced them. Lookahead is limited to the
//! next token plus the one after it.

use std::collections::VecDeque;

use super::ast::Line;
use super::lexer::{Token, TokenKind};
use super::parse::ParseError;

#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: VecDeque<Token>,
    last_line: Line,
}

impl TokenCursor {
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
            last_line: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Line of the most recently consumed token (1 before anything is consumed)
    pub fn last_line(&self) -> Line {
        self.last_line
    }

    /// Line of the next token, or of the last consumed one at end of input
    pub fn current_line(&self) -> Line {
        self.tokens.front().map_or(self.last_line, |t| t.line)
    }

    /// Look at the next token without consuming it
    pub fn peek(&self) -> Result<&Token, ParseError> {
        self.tokens.front().ok_or_else(|| self.end_of_input("a token"))
    }

    /// Look at the token after the next one
    pub fn peek_second(&self) -> Option<&Token> {
        self.tokens.get(1)
    }

    /// True if the next token has the given kind; false at end of input
    pub fn peek_type_is(&self, kind: TokenKind) -> bool {
        self.tokens.front().is_some_and(|t| t.kind == kind)
    }

    /// True if the next token has the given kind and text; false at end of input
    pub fn peek_is(&self, kind: TokenKind, text: &str) -> bool {
        self.tokens.front().is_some_and(|t| t.is(kind, text))
    }

    /// True if the token after the next one has the given kind and text
    pub fn peek_second_is(&self, kind: TokenKind, text: &str) -> bool {
        self.peek_second().is_some_and(|t| t.is(kind, text))
    }

    /// Remove and return the next token
    pub fn consume(&mut self, expected: &str) -> Result<Token, ParseError> {
        let token = self
            .tokens
            .pop_front()
            .ok_or_else(|| self.end_of_input(expected))?;
        self.last_line = token.line;
        Ok(token)
    }

    /// Consume the next token, failing unless it has the given kind and text.
    ///
    /// A mismatch reports the line of the token following the offending one,
    /// falling back to the offending token's own line at end of input.
    pub fn expect_and_consume(&mut self, kind: TokenKind, text: &str) -> Result<Token, ParseError> {
        let token = self.consume(&format!("'{}'", text))?;
        if token.is(kind, text) {
            Ok(token)
        } else {
            Err(ParseError::TokenMismatch {
                expected: text.to_string(),
                found: token.text,
                line: self.current_line(),
            })
        }
    }

    pub(crate) fn end_of_input(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedEndOfInput {
            expected: expected.to_string(),
            line: self.last_line,
        }
    }
}
