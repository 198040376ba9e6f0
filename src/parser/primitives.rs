//! Primitive parsers: types, identifiers, and literals
//!
//! These are the leaves of the grammar. Each consumes exactly one token and
//! turns it into a value, failing with a category-specific error when the
//! token is not a valid instance.
//!
//! Integer literals follow 32-bit two's-complement arithmetic: values too large
//! for an `i32` wrap rather than fail. String literals are unescaped according
//! to [`EscapeMode`].

use crate::parser::ast::*;
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::options::EscapeMode;
use crate::parser::parse::{ParseError, Parser};

/// Escape forms in the order legacy unescaping looks for them
const ESCAPES: [(&str, &str); 4] = [("\\n", "\n"), ("\\t", "\t"), ("\\\\", "\\"), ("\\\"", "\"")];

impl Parser {
    /// Parse type: int | bool | void
    ///
    /// Like a token mismatch, an invalid type reports the line of the token
    /// after the offending one.
    pub fn parse_type(&mut self) -> Result<DecafType, ParseError> {
        let token = self.cursor.consume("int, bool, or void")?;
        let parsed = match token.kind {
            TokenKind::Keyword => DecafType::from_keyword(&token.text),
            _ => None,
        };

        parsed.ok_or_else(|| ParseError::InvalidType {
            found: token.text,
            line: self.cursor.current_line(),
        })
    }

    /// Parse identifier, returning an owned name.
    ///
    /// Names longer than the configured maximum are cut at a char boundary;
    /// the cut is logged at `warn` level.
    pub fn parse_identifier(&mut self) -> Result<String, ParseError> {
        let token = self.cursor.consume("identifier")?;
        if token.kind != TokenKind::Identifier {
            return Err(ParseError::InvalidIdentifier {
                found: token.text,
                line: self.cursor.current_line(),
            });
        }

        let mut name = token.text;
        let limit = self.options.max_identifier_len;
        if name.len() > limit {
            let mut end = limit;
            while !name.is_char_boundary(end) {
                end -= 1;
            }
            tracing::warn!(
                line = token.line,
                limit,
                "identifier '{}' exceeds the maximum length and was truncated",
                name
            );
            name.truncate(end);
        }

        Ok(name)
    }

    /// Parse literal: decimal, hex, true/false, or string
    pub fn parse_literal(&mut self) -> Result<Expr, ParseError> {
        self.trace_rule("parse_literal");
        let token = self.cursor.consume("DEC, HEX, STR, true, or false")?;
        let line = token.line;

        let value = match token.kind {
            TokenKind::DecimalLiteral => Literal::Int(parse_int(&token, 10)?),
            TokenKind::HexLiteral => Literal::Int(parse_int(&token, 16)?),
            TokenKind::Keyword if token.text == "true" => Literal::Bool(true),
            TokenKind::Keyword if token.text == "false" => Literal::Bool(false),
            TokenKind::StringLiteral => {
                Literal::Str(unquote(&token, self.options.escape_mode)?)
            }
            _ => {
                return Err(ParseError::InvalidLiteral {
                    found: token.text,
                    reason: "not a literal".to_string(),
                    line,
                });
            }
        };

        Ok(Expr::Literal { value, line })
    }

    /// Parse the integer literal of an array length
    pub(crate) fn parse_int_literal(&mut self) -> Result<i32, ParseError> {
        let token = self.cursor.consume("integer literal")?;
        match token.kind {
            TokenKind::DecimalLiteral => parse_int(&token, 10),
            TokenKind::HexLiteral => parse_int(&token, 16),
            _ => Err(ParseError::InvalidLiteral {
                found: token.text,
                reason: "expected an integer literal".to_string(),
                line: token.line,
            }),
        }
    }
}

/// Convert literal digits to an `i32`, wrapping modulo 2^32
fn parse_int(token: &Token, radix: u32) -> Result<i32, ParseError> {
    let digits = if radix == 16 {
        token
            .text
            .strip_prefix("0x")
            .or_else(|| token.text.strip_prefix("0X"))
            .unwrap_or(&token.text)
    } else {
        &token.text
    };

    let invalid = |reason: &str| ParseError::InvalidLiteral {
        found: token.text.clone(),
        reason: reason.to_string(),
        line: token.line,
    };

    if digits.is_empty() {
        return Err(invalid("no digits"));
    }

    let mut value: u32 = 0;
    for ch in digits.chars() {
        let digit = ch
            .to_digit(radix)
            .ok_or_else(|| invalid(&format!("'{}' is not a base-{} digit", ch, radix)))?;
        value = value.wrapping_mul(radix).wrapping_add(digit);
    }

    Ok(value as i32)
}

/// Strip the quotes from a string token and resolve its escapes
fn unquote(token: &Token, mode: EscapeMode) -> Result<String, ParseError> {
    let inner = token
        .text
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(|| ParseError::InvalidLiteral {
            found: token.text.clone(),
            reason: "string literal is not quoted".to_string(),
            line: token.line,
        })?;

    Ok(match mode {
        EscapeMode::All => unescape_all(inner),
        EscapeMode::Legacy => unescape_first(inner),
    })
}

/// Resolve every escape in one left-to-right pass; unknown escapes are kept
pub(crate) fn unescape_all(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            _ => {
                out.push('\\');
                continue;
            }
        }
        chars.next();
    }

    out
}

/// Replace only the first occurrence of the highest-priority escape present
pub(crate) fn unescape_first(raw: &str) -> String {
    ESCAPES
        .iter()
        .find(|(escape, _)| raw.contains(escape))
        .map_or_else(
            || raw.to_string(),
            |(escape, replacement)| raw.replacen(escape, replacement, 1),
        )
}
