//! # Introduction
//!
//! decaf-parser is the syntactic-analysis stage of a Decaf compiler front end.
//! It consumes a classified token sequence and produces an abstract syntax tree
//! that semantic analysis and code generation can walk.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST
//! ```
//!
//! 1. [`parser::lexer`] — turns source text into [`Token`]s (kind, text, line).
//! 2. [`parser::parse`] — predictive recursive descent over a
//!    [`parser::cursor::TokenCursor`], building a [`Program`].
//! 3. [`parser::ast`] — the tree: declarations, blocks, statements and
//!    expressions, every node tagged with its source line.
//!
//! ## Example
//!
//! ```
//! use decaf_parser::parse_source;
//!
//! let program = parse_source("int total; def int main() { total = 1 + 2; return total; }")?;
//! assert_eq!(program.globals.len(), 1);
//! assert_eq!(program.functions[0].name, "main");
//! # Ok::<(), decaf_parser::ParseError>(())
//! ```
//!
//! The parser stops at the first malformed construct and reports it as a
//! [`ParseError`] carrying the offending line.

pub mod parser;

pub use parser::ast::Program;
pub use parser::lexer::{Lexer, Token, TokenKind};
pub use parser::options::{EscapeMode, ParseOptions};
pub use parser::parse::{parse, parse_source, parse_with_options, ParseError, Parser};
