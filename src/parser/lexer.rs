//! Lexer (tokenizer) for Decaf source code
//!
//! Converts raw source text into the flat [`Token`] sequence consumed by the
//! parser. Tokens carry their classification, their literal source text, and
//! the 1-based line they start on. There is no end-of-file token: the sequence
//! simply ends.
//!
//! String literals are kept verbatim, quotes and escape sequences included;
//! unescaping is the parser's job.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

use super::ast::Line;
use super::constants::{KEYWORDS, SYMBOLS};

/// Token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Symbol,
    DecimalLiteral,
    HexLiteral,
    StringLiteral,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword => write!(f, "keyword"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Symbol => write!(f, "symbol"),
            TokenKind::DecimalLiteral => write!(f, "decimal literal"),
            TokenKind::HexLiteral => write!(f, "hex literal"),
            TokenKind::StringLiteral => write!(f, "string literal"),
        }
    }
}

/// A classified lexeme with the line it appeared on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: Line,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: Line) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    pub fn keyword(text: &str, line: Line) -> Self {
        Self::new(TokenKind::Keyword, text, line)
    }

    pub fn ident(text: &str, line: Line) -> Self {
        Self::new(TokenKind::Identifier, text, line)
    }

    pub fn symbol(text: &str, line: Line) -> Self {
        Self::new(TokenKind::Symbol, text, line)
    }

    pub fn dec(text: &str, line: Line) -> Self {
        Self::new(TokenKind::DecimalLiteral, text, line)
    }

    pub fn hex(text: &str, line: Line) -> Self {
        Self::new(TokenKind::HexLiteral, text, line)
    }

    pub fn string(text: &str, line: Line) -> Self {
        Self::new(TokenKind::StringLiteral, text, line)
    }

    /// True if this token has the given kind and text
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text)
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Lexer error on line {line}: {message}")]
pub struct LexError {
    pub message: String,
    pub line: Line,
}

/// Lexer for Decaf source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: Line,
    keywords: FxHashSet<&'static str>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            keywords: KEYWORDS.iter().copied().collect(),
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();

            if self.is_at_end() {
                break;
            }

            tokens.push(self.next_token()?);
        }

        tracing::trace!(count = tokens.len(), "tokenized input");
        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let line = self.line;
        let ch = self.advance().ok_or_else(|| LexError {
            message: "Unexpected end of file".to_string(),
            line,
        })?;

        match ch {
            '"' => self.string_literal(),
            '0'..='9' => self.number_literal(ch),
            'a'..='z' | 'A'..='Z' => Ok(self.identifier_or_keyword(ch)),
            _ => self.symbol(ch),
        }
    }

    /// Parse a symbol, preferring the two-character form when one exists
    fn symbol(&mut self, first: char) -> Result<Token, LexError> {
        let line = self.line;

        if let Some(second) = self.peek() {
            let pair: String = [first, second].iter().collect();
            if SYMBOLS.contains(&pair.as_str()) {
                self.advance();
                return Ok(Token::new(TokenKind::Symbol, pair, line));
            }
        }

        let single = first.to_string();
        if SYMBOLS.contains(&single.as_str()) {
            Ok(Token::new(TokenKind::Symbol, single, line))
        } else {
            Err(LexError {
                message: format!("Unexpected character: '{}'", first),
                line,
            })
        }
    }

    /// Parse string literal, keeping quotes and escapes as written
    fn string_literal(&mut self) -> Result<Token, LexError> {
        let line = self.line;
        let mut text = String::from('"');

        while let Some(ch) = self.peek() {
            match ch {
                '"' => {
                    self.advance();
                    text.push('"');
                    return Ok(Token::new(TokenKind::StringLiteral, text, line));
                }
                '\n' => break,
                '\\' => {
                    self.advance();
                    let escaped = self.advance().ok_or_else(|| LexError {
                        message: "Unexpected end of file in string literal".to_string(),
                        line: self.line,
                    })?;
                    if !matches!(escaped, 'n' | 't' | '\\' | '"') {
                        return Err(LexError {
                            message: format!("Unknown escape sequence: \\{}", escaped),
                            line: self.line,
                        });
                    }
                    text.push('\\');
                    text.push(escaped);
                }
                _ => {
                    text.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError {
            message: "Unterminated string literal".to_string(),
            line,
        })
    }

    /// Parse numeric literal: decimal digits or `0x` followed by hex digits
    fn number_literal(&mut self, first_digit: char) -> Result<Token, LexError> {
        let line = self.line;
        let mut text = String::new();
        text.push(first_digit);

        if first_digit == '0' && matches!(self.peek(), Some('x') | Some('X')) {
            if let Some(x) = self.advance() {
                text.push(x);
            }
            while let Some(ch) = self.peek() {
                if ch.is_ascii_hexdigit() {
                    text.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
            if text.len() == 2 {
                return Err(LexError {
                    message: format!("Hex literal '{}' has no digits", text),
                    line,
                });
            }
            return Ok(Token::new(TokenKind::HexLiteral, text, line));
        }

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Ok(Token::new(TokenKind::DecimalLiteral, text, line))
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, first_char: char) -> Token {
        let line = self.line;
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = if self.keywords.contains(ident.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Token::new(kind, ident, line)
    }

    /// Skip whitespace and `//` comments
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\r') | Some('\n') => {
                    self.advance();
                }
                Some('/') if self.peek_ahead(1) == Some('/') => {
                    while let Some(ch) = self.advance() {
                        if ch == '\n' {
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = *self.input.get(self.position)?;
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        Lexer::new(source).tokenize().unwrap()
    }

    #[test]
    fn test_simple_function() {
        let tokens = lex("def int main() { return 0; }");

        assert_eq!(tokens[0], Token::keyword("def", 1));
        assert_eq!(tokens[1], Token::keyword("int", 1));
        assert_eq!(tokens[2], Token::ident("main", 1));
        assert_eq!(tokens[3], Token::symbol("(", 1));
        assert_eq!(tokens[4], Token::symbol(")", 1));
        assert_eq!(tokens[5], Token::symbol("{", 1));
        assert_eq!(tokens[6], Token::keyword("return", 1));
        assert_eq!(tokens[7], Token::dec("0", 1));
        assert_eq!(tokens[8], Token::symbol(";", 1));
        assert_eq!(tokens[9], Token::symbol("}", 1));
        assert_eq!(tokens.len(), 10);
    }

    #[test]
    fn test_two_char_symbols() {
        let texts: Vec<String> = lex("<= >= == != && || < = !")
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, ["<=", ">=", "==", "!=", "&&", "||", "<", "=", "!"]);
    }

    #[test]
    fn test_line_numbers_and_comments() {
        let tokens = lex("int x; // comment\nbool y;\n\nx");

        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[3], Token::keyword("bool", 2));
        assert_eq!(tokens[6], Token::ident("x", 4));
    }

    #[test]
    fn test_hex_and_decimal() {
        let tokens = lex("0x1F 42 0");
        assert_eq!(tokens[0], Token::hex("0x1F", 1));
        assert_eq!(tokens[1], Token::dec("42", 1));
        assert_eq!(tokens[2], Token::dec("0", 1));
    }

    #[test]
    fn test_string_literal_kept_raw() {
        let tokens = lex(r#""hello\nworld""#);
        assert_eq!(tokens[0], Token::string(r#""hello\nworld""#, 1));
    }

    #[test]
    fn test_reserved_words_are_keywords() {
        let tokens = lex("true false callout foo_1");
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[1].kind, TokenKind::Keyword);
        assert_eq!(tokens[2].kind, TokenKind::Keyword);
        assert_eq!(tokens[3], Token::ident("foo_1", 1));
    }

    #[test]
    fn test_errors() {
        assert!(Lexer::new("int $x;").tokenize().is_err());
        assert!(Lexer::new("\"open").tokenize().is_err());
        assert!(Lexer::new(r#""bad \q""#).tokenize().is_err());
        assert!(Lexer::new("0x").tokenize().is_err());

        let err = Lexer::new("\n\n&").tokenize().unwrap_err();
        assert_eq!(err.line, 3);
    }
}
