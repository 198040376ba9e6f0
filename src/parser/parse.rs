//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, helper methods, and the main parse entry points.
//!
//! # Parser Architecture
//!
//! The Parser uses a predictive recursive descent approach with the following
//! organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `primitives`: types, identifiers, and literals
//! - `declarations`: variable and function declarations, whole programs
//! - `statements`: blocks and statements (if, while, return, ...)
//! - `expressions`: expressions with one function per precedence level
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared cursor. No rule ever rewinds the cursor:
//! every choice is made by looking at most two tokens ahead.

use thiserror::Error;

use crate::parser::ast::*;
use crate::parser::constants::TYPE_KEYWORDS;
use crate::parser::cursor::TokenCursor;
use crate::parser::lexer::{LexError, Lexer, Token, TokenKind};
use crate::parser::options::ParseOptions;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A rule needed a token but the sequence was empty
    #[error("Parse error after line {line}: unexpected end of input (expected {expected})")]
    UnexpectedEndOfInput { expected: String, line: Line },

    /// The next token did not have the required type or text
    #[error("Parse error on line {line}: expected '{expected}' but found '{found}'")]
    TokenMismatch {
        expected: String,
        found: String,
        line: Line,
    },

    #[error("Parse error on line {line}: invalid type '{found}'")]
    InvalidType { found: String, line: Line },

    #[error("Parse error on line {line}: invalid identifier '{found}'")]
    InvalidIdentifier { found: String, line: Line },

    #[error("Parse error on line {line}: invalid literal '{found}' ({reason})")]
    InvalidLiteral {
        found: String,
        reason: String,
        line: Line,
    },

    #[error("Parse error on line {line}: invalid statement starting with '{found}'")]
    InvalidStatement { found: String, line: Line },

    #[error("Parse error on line {line}: invalid base expression '{found}'")]
    InvalidBaseExpression { found: String, line: Line },

    /// Blocks or expressions nested past the configured depth
    #[error("Parse error on line {line}: nesting exceeds the maximum depth of {limit}")]
    NestingTooDeep { limit: usize, line: Line },

    #[error(transparent)]
    Lex(#[from] LexError),
}

impl ParseError {
    /// Line the error concerns
    pub fn line(&self) -> Line {
        match self {
            ParseError::UnexpectedEndOfInput { line, .. }
            | ParseError::TokenMismatch { line, .. }
            | ParseError::InvalidType { line, .. }
            | ParseError::InvalidIdentifier { line, .. }
            | ParseError::InvalidLiteral { line, .. }
            | ParseError::InvalidStatement { line, .. }
            | ParseError::InvalidBaseExpression { line, .. }
            | ParseError::NestingTooDeep { line, .. } => *line,
            ParseError::Lex(err) => err.line,
        }
    }
}

/// Recursive descent parser for Decaf
pub struct Parser {
    pub(crate) cursor: TokenCursor,
    pub(crate) options: ParseOptions,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self::with_options(tokens, ParseOptions::default())
    }

    pub fn with_options(tokens: impl IntoIterator<Item = Token>, options: ParseOptions) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            options,
            depth: 0,
        }
    }

    /// Tokenize `source` and prepare a parser over the result
    pub fn from_source(source: &str, options: ParseOptions) -> Result<Self, ParseError> {
        let tokens = Lexer::new(source).tokenize()?;
        Ok(Self::with_options(tokens, options))
    }

    /// Parse the entire program (top-level declarations)
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();
        program.line = self.cursor.current_line();

        while !self.cursor.is_empty() {
            let decl = self.parse_top_level_declaration()?;
            tracing::debug!(line = decl.line(), "parsed top-level declaration");
            program.push(decl);
        }

        Ok(program)
    }

    /// True once every token has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_empty()
    }

    // ===== Helper methods =====

    pub(crate) fn check_symbol(&self, text: &str) -> bool {
        self.cursor.peek_is(TokenKind::Symbol, text)
    }

    pub(crate) fn check_keyword(&self, text: &str) -> bool {
        self.cursor.peek_is(TokenKind::Keyword, text)
    }

    /// Consume the next token if it is the given symbol
    pub(crate) fn match_symbol(&mut self, text: &str) -> Result<bool, ParseError> {
        if self.check_symbol(text) {
            self.cursor.consume(text)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub(crate) fn expect_symbol(&mut self, text: &str) -> Result<(), ParseError> {
        self.cursor.expect_and_consume(TokenKind::Symbol, text)?;
        Ok(())
    }

    pub(crate) fn expect_keyword(&mut self, text: &str) -> Result<(), ParseError> {
        self.cursor.expect_and_consume(TokenKind::Keyword, text)?;
        Ok(())
    }

    pub(crate) fn is_type_keyword(&self) -> bool {
        TYPE_KEYWORDS.iter().any(|kw| self.check_keyword(kw))
    }

    /// Identifier immediately followed by `(`
    pub(crate) fn at_call(&self) -> bool {
        self.cursor.peek_type_is(TokenKind::Identifier)
            && self.cursor.peek_second_is(TokenKind::Symbol, "(")
    }

    /// Line of the next token; fails at end of input with `expected` as context
    pub(crate) fn start_line(&self, expected: &str) -> Result<Line, ParseError> {
        match self.cursor.peek() {
            Ok(token) => Ok(token.line),
            Err(_) => Err(self.cursor.end_of_input(expected)),
        }
    }

    /// Run `rule` one nesting level deeper, failing once the configured
    /// maximum depth is reached
    pub(crate) fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let limit = self.options.max_nesting_depth;
        if self.depth >= limit {
            return Err(ParseError::NestingTooDeep {
                limit,
                line: self.cursor.current_line(),
            });
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn trace_rule(&self, rule: &str) {
        tracing::trace!(
            "{}: next token = {:?}",
            rule,
            self.cursor.peek().ok().map(|t| t.text.as_str())
        );
    }
}

/// Parse a complete token sequence into a program
pub fn parse(tokens: impl IntoIterator<Item = Token>) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Parse a complete token sequence with explicit options
pub fn parse_with_options(
    tokens: impl IntoIterator<Item = Token>,
    options: ParseOptions,
) -> Result<Program, ParseError> {
    Parser::with_options(tokens, options).parse_program()
}

/// Tokenize and parse Decaf source text
pub fn parse_source(source: &str) -> Result<Program, ParseError> {
    Parser::from_source(source, ParseOptions::default())?.parse_program()
}
