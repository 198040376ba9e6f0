//! Statement parsing implementation
//!
//! This module handles blocks and every Decaf statement form:
//!
//! - Jump statements: `break`, `continue`, `return`
//! - Control flow: `if`/`else`, `while`
//! - Assignments: `loc = expr;`
//! - Call statements: `f(args);`
//!
//! # Grammar
//!
//! ```text
//! block     ::= "{" (var_decl | statement)* "}"
//! statement ::= "break" ";" | "continue" ";" | "return" expr? ";"
//!             | "while" "(" expr ")" block
//!             | "if" "(" expr ")" block ("else" block)?
//!             | call ";" | location "=" expr ";"
//! ```
//!
//! Locals and statements inside a block are collected into two separate lists,
//! each in source order, even when the source interleaves them.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a braced block with its local declarations and statements
    pub fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.trace_rule("parse_block");
        let line = self.start_line("'{'")?;
        self.nested(|parser| parser.parse_block_contents(line))
    }

    fn parse_block_contents(&mut self, line: Line) -> Result<Block, ParseError> {
        self.expect_symbol("{")?;

        let mut locals = Vec::new();
        let mut statements = Vec::new();

        while !self.check_symbol("}") && !self.cursor.is_empty() {
            if self.is_type_keyword() {
                locals.push(self.parse_var_decl()?);
            } else {
                statements.push(self.parse_statement()?);
            }
        }

        self.expect_symbol("}")?;

        Ok(Block {
            locals,
            statements,
            line,
        })
    }

    /// Parse a statement
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        self.trace_rule("parse_statement");
        let line = self.start_line("statement")?;

        if self.check_keyword("break") {
            self.expect_keyword("break")?;
            self.expect_symbol(";")?;
            return Ok(Statement::Break { line });
        }

        if self.check_keyword("continue") {
            self.expect_keyword("continue")?;
            self.expect_symbol(";")?;
            return Ok(Statement::Continue { line });
        }

        if self.check_keyword("return") {
            return self.parse_return_statement();
        }

        if self.check_keyword("while") {
            return self.parse_while_statement();
        }

        if self.check_keyword("if") {
            return self.parse_if_statement();
        }

        if self.at_call() {
            let call = self.parse_call()?;
            self.expect_symbol(";")?;
            return Ok(Statement::Call(call));
        }

        if self.cursor.peek_type_is(TokenKind::Identifier) {
            let target = self.parse_location()?;
            self.expect_symbol("=")?;
            let value = self.parse_expression()?;
            self.expect_symbol(";")?;
            return Ok(Statement::Assignment {
                target,
                value,
                line,
            });
        }

        let found = self.cursor.peek()?.text.clone();
        Err(ParseError::InvalidStatement { found, line })
    }

    /// Parse return statement
    fn parse_return_statement(&mut self) -> Result<Statement, ParseError> {
        let line = self.start_line("'return'")?;
        self.expect_keyword("return")?;

        let value = if self.check_symbol(";") {
            None
        } else {
            Some(self.parse_expression()?)
        };

        self.expect_symbol(";")?;

        Ok(Statement::Return { value, line })
    }

    /// Parse while statement
    fn parse_while_statement(&mut self) -> Result<Statement, ParseError> {
        let line = self.start_line("'while'")?;
        self.expect_keyword("while")?;

        self.expect_symbol("(")?;
        let condition = self.parse_expression()?;
        self.expect_symbol(")")?;

        let body = self.parse_block()?;

        Ok(Statement::While {
            condition,
            body,
            line,
        })
    }

    /// Parse if statement
    fn parse_if_statement(&mut self) -> Result<Statement, ParseError> {
        let line = self.start_line("'if'")?;
        self.expect_keyword("if")?;

        self.expect_symbol("(")?;
        let condition = self.parse_expression()?;
        self.expect_symbol(")")?;

        let then_block = self.parse_block()?;

        let else_block = if self.check_keyword("else") {
            self.expect_keyword("else")?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Statement::If {
            condition,
            then_block,
            else_block,
            line,
        })
    }
}
