//! Expression parsing implementation
//!
//! One method per precedence level, each reading its operands through the next
//! tighter-binding level and folding operators left to right.
//!
//! # Grammar
//!
//! ```text
//! expr       ::= or
//! or         ::= and ("||" and)*
//! and        ::= equality ("&&" equality)*
//! equality   ::= relational (("==" | "!=") relational)*
//! relational ::= arith (("<" | "<=" | ">" | ">=") arith)*
//! arith      ::= mult (("+" | "-") mult)*
//! mult       ::= unary (("*" | "/" | "%") unary)*
//! unary      ::= ("-" | "!") base | base
//! base       ::= "(" expr ")" | call | location | literal
//! ```
//!
//! A unary operator applies to a base expression, not to another unary, so
//! `--x` is rejected while `-(-x)` is accepted.
//!
//! All parsing methods are implemented as methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse expression (top-level entry point)
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.trace_rule("parse_expression");
        self.start_line("expression")?;
        self.nested(Self::parse_logical_or)
    }

    /// Parse logical OR (||)
    ///
    /// Every binary node built by a ladder rule carries the line on which that
    /// rule started, i.e. the first line of its leftmost operand.
    fn parse_logical_or(&mut self) -> Result<Expr, ParseError> {
        let line = self.cursor.current_line();
        let mut left = self.parse_logical_and()?;

        loop {
            if !self.match_symbol("||")? {
                break;
            }
            let right = self.parse_logical_and()?;
            left = binary(BinOp::Or, left, right, line);
        }

        Ok(left)
    }

    /// Parse logical AND (&&)
    fn parse_logical_and(&mut self) -> Result<Expr, ParseError> {
        let line = self.cursor.current_line();
        let mut left = self.parse_equality()?;

        loop {
            if !self.match_symbol("&&")? {
                break;
            }
            let right = self.parse_equality()?;
            left = binary(BinOp::And, left, right, line);
        }

        Ok(left)
    }

    /// Parse equality (== !=)
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let line = self.cursor.current_line();
        let mut left = self.parse_relational()?;

        loop {
            let op = if self.match_symbol("==")? {
                BinOp::Eq
            } else if self.match_symbol("!=")? {
                BinOp::Neq
            } else {
                break;
            };

            let right = self.parse_relational()?;
            left = binary(op, left, right, line);
        }

        Ok(left)
    }

    /// Parse relational (< <= > >=)
    fn parse_relational(&mut self) -> Result<Expr, ParseError> {
        let line = self.cursor.current_line();
        let mut left = self.parse_additive()?;

        loop {
            let op = if self.match_symbol("<")? {
                BinOp::Lt
            } else if self.match_symbol("<=")? {
                BinOp::Le
            } else if self.match_symbol(">")? {
                BinOp::Gt
            } else if self.match_symbol(">=")? {
                BinOp::Ge
            } else {
                break;
            };

            let right = self.parse_additive()?;
            left = binary(op, left, right, line);
        }

        Ok(left)
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let line = self.cursor.current_line();
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = if self.match_symbol("+")? {
                BinOp::Add
            } else if self.match_symbol("-")? {
                BinOp::Sub
            } else {
                break;
            };

            let right = self.parse_multiplicative()?;
            left = binary(op, left, right, line);
        }

        Ok(left)
    }

    /// Parse multiplicative (* / %)
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let line = self.cursor.current_line();
        let mut left = self.parse_unary()?;

        loop {
            let op = if self.match_symbol("*")? {
                BinOp::Mul
            } else if self.match_symbol("/")? {
                BinOp::Div
            } else if self.match_symbol("%")? {
                BinOp::Mod
            } else {
                break;
            };

            let right = self.parse_unary()?;
            left = binary(op, left, right, line);
        }

        Ok(left)
    }

    /// Parse unary (- !); at most one prefix operator
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let line = self.start_line("unary operator or base expression")?;

        let op = if self.match_symbol("-")? {
            UnOp::Neg
        } else if self.match_symbol("!")? {
            UnOp::Not
        } else {
            return self.parse_base_expression();
        };

        let operand = Box::new(self.parse_base_expression()?);
        Ok(Expr::UnaryOp { op, operand, line })
    }

    /// Parse base expression (parenthesized, call, location, literal)
    fn parse_base_expression(&mut self) -> Result<Expr, ParseError> {
        self.trace_rule("parse_base_expression");
        let line =
            self.start_line("another expression, location, function call, or literal")?;

        if self.match_symbol("(")? {
            let expr = self.parse_expression()?;
            self.expect_symbol(")")?;
            return Ok(expr);
        }

        if self.at_call() {
            return Ok(Expr::Call(self.parse_call()?));
        }

        if self.cursor.peek_type_is(TokenKind::Identifier) {
            return Ok(Expr::Location(self.parse_location()?));
        }

        if self.at_literal() {
            return self.parse_literal();
        }

        let token = self.cursor.consume("base expression")?;
        Err(ParseError::InvalidBaseExpression {
            found: token.text,
            line,
        })
    }

    /// Parse location: name or name[expr]
    pub fn parse_location(&mut self) -> Result<Location, ParseError> {
        self.trace_rule("parse_location");
        let line = self.start_line("location")?;
        let name = self.parse_identifier()?;

        let index = if self.match_symbol("[")? {
            let index = self.parse_expression()?;
            self.expect_symbol("]")?;
            Some(Box::new(index))
        } else {
            None
        };

        Ok(Location { name, index, line })
    }

    /// Parse function call: name(args)
    pub fn parse_call(&mut self) -> Result<FuncCall, ParseError> {
        self.trace_rule("parse_call");
        let line = self.start_line("function name")?;
        let name = self.parse_identifier()?;

        self.expect_symbol("(")?;
        let arguments = self.parse_argument_list()?;
        self.expect_symbol(")")?;

        Ok(FuncCall {
            name,
            arguments,
            line,
        })
    }

    /// Parse argument list: expr, expr, ... (possibly empty)
    fn parse_argument_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();

        if self.check_symbol(")") {
            return Ok(args);
        }

        loop {
            args.push(self.parse_expression()?);

            if !self.match_symbol(",")? {
                break;
            }
        }

        Ok(args)
    }

    fn at_literal(&self) -> bool {
        self.cursor.peek_type_is(TokenKind::DecimalLiteral)
            || self.cursor.peek_type_is(TokenKind::HexLiteral)
            || self.cursor.peek_type_is(TokenKind::StringLiteral)
            || self.check_keyword("true")
            || self.check_keyword("false")
    }
}

fn binary(op: BinOp, left: Expr, right: Expr, line: Line) -> Expr {
    Expr::BinaryOp {
        op,
        left: Box::new(left),
        right: Box::new(right),
        line,
    }
}
