//! Decaf source code parser
//!
//! This module transforms Decaf tokens into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`cursor`]: The consumable token sequence the parser reads from
//! - [`parse`]: Parsing (tokens → AST) and the [`parse::ParseError`] type
//! - [`ast`]: AST node definitions
//! - [`options`]: Parser configuration
//!
//! # Supported Language
//!
//! - Types: `int`, `bool`, `void`
//! - Global scalar and array variables, block-scoped locals
//! - Functions declared with `def`
//! - Statements: assignment, call, `if`/`else`, `while`, `break`,
//!   `continue`, `return`
//! - Expressions: arithmetic, relational, equality, logical, unary `-`/`!`,
//!   array locations, function calls, int/bool/string literals
//!
//! # Parser Implementation
//!
//! Hand-written predictive recursive descent parser with one function per
//! precedence level for binary operators. The first malformed construct aborts
//! the parse; there is no error recovery.

pub mod ast;
pub mod constants;
pub mod cursor;
mod declarations;
mod expressions;
pub mod lexer;
pub mod options;
pub mod parse;
mod primitives;
mod statements;
