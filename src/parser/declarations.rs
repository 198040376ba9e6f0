//! Declaration parsing implementation
//!
//! This module handles parsing of Decaf declarations:
//!
//! - Variable declarations: `int x;`, `bool flags[8];`
//! - Function declarations: `def int f(int a, bool b) { ... }`
//! - Parameter lists
//!
//! # Grammar
//!
//! ```text
//! declaration ::= func_decl | var_decl
//! var_decl    ::= type identifier ("[" int_literal "]")? ";"
//! func_decl   ::= "def" type identifier "(" params? ")" block
//! params      ::= type identifier ("," type identifier)*
//! type        ::= "int" | "bool" | "void"
//! ```
//!
//! `void` variables and duplicate parameter names are accepted here; rejecting
//! them is left to semantic analysis.

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a top-level declaration (function or variable)
    pub(crate) fn parse_top_level_declaration(&mut self) -> Result<Declaration, ParseError> {
        if self.check_keyword("def") {
            Ok(Declaration::Func(self.parse_func_decl()?))
        } else {
            Ok(Declaration::Var(self.parse_var_decl()?))
        }
    }

    /// Parse variable declaration: type name; or type name[len];
    pub fn parse_var_decl(&mut self) -> Result<VarDecl, ParseError> {
        self.trace_rule("parse_var_decl");
        let line = self.start_line("type")?;
        let var_type = self.parse_type()?;
        let name = self.parse_identifier()?;

        let (is_array, array_length) = if self.match_symbol("[")? {
            let length_line = self.cursor.current_line();
            let length = self.parse_int_literal()?;
            let length = usize::try_from(length).map_err(|_| ParseError::InvalidLiteral {
                found: length.to_string(),
                reason: "array length must not be negative".to_string(),
                line: length_line,
            })?;
            self.expect_symbol("]")?;
            (true, length)
        } else {
            (false, 1)
        };

        self.expect_symbol(";")?;

        Ok(VarDecl {
            name,
            var_type,
            is_array,
            array_length,
            line,
        })
    }

    /// Parse function declaration: def type name(params) { body }
    pub fn parse_func_decl(&mut self) -> Result<FuncDecl, ParseError> {
        self.trace_rule("parse_func_decl");
        let line = self.start_line("'def'")?;
        self.expect_keyword("def")?;

        let return_type = self.parse_type()?;
        let name = self.parse_identifier()?;

        self.expect_symbol("(")?;
        let parameters = self.parse_parameter_list()?;
        self.expect_symbol(")")?;

        let body = self.parse_block()?;

        Ok(FuncDecl {
            name,
            return_type,
            parameters,
            body,
            line,
        })
    }

    /// Parse parameter list: type name, type name, ... (possibly empty)
    fn parse_parameter_list(&mut self) -> Result<Vec<Parameter>, ParseError> {
        let mut params = Vec::new();

        if self.check_symbol(")") {
            return Ok(params);
        }

        loop {
            let param_type = self.parse_type()?;
            let name = self.parse_identifier()?;
            params.push(Parameter { name, param_type });

            if !self.match_symbol(",")? {
                break;
            }
        }

        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::{Lexer, Token};

    fn parser(source: &str) -> Parser {
        Parser::new(Lexer::new(source).tokenize().unwrap())
    }

    #[test]
    fn test_scalar_and_array() {
        assert_eq!(
            parser("int a[10];").parse_var_decl().unwrap(),
            VarDecl {
                name: "a".to_string(),
                var_type: DecafType::Int,
                is_array: true,
                array_length: 10,
                line: 1,
            }
        );
        assert_eq!(
            parser("int a;").parse_var_decl().unwrap(),
            VarDecl {
                name: "a".to_string(),
                var_type: DecafType::Int,
                is_array: false,
                array_length: 1,
                line: 1,
            }
        );
    }

    #[test]
    fn test_hex_array_length() {
        let decl = parser("bool bits[0x20];").parse_var_decl().unwrap();
        assert_eq!(decl.array_length, 32);
        assert_eq!(decl.var_type, DecafType::Bool);
    }

    #[test]
    fn test_void_variable_accepted() {
        let decl = parser("void nothing;").parse_var_decl().unwrap();
        assert_eq!(decl.var_type, DecafType::Void);
    }

    #[test]
    fn test_negative_array_length_rejected() {
        // 0x80000000 wraps to i32::MIN
        let err = parser("int a[0x80000000];").parse_var_decl().unwrap_err();
        assert!(matches!(err, ParseError::InvalidLiteral { .. }));
    }

    #[test]
    fn test_bad_array_length() {
        assert!(matches!(
            parser("int a[n];").parse_var_decl(),
            Err(ParseError::InvalidLiteral { .. })
        ));
        assert!(matches!(
            parser("int a[3;").parse_var_decl(),
            Err(ParseError::TokenMismatch { .. })
        ));
    }

    #[test]
    fn test_var_decl_errors() {
        assert!(matches!(
            parser("string s;").parse_var_decl(),
            Err(ParseError::InvalidType { .. })
        ));
        assert!(matches!(
            parser("int 5;").parse_var_decl(),
            Err(ParseError::InvalidIdentifier { .. })
        ));
        assert!(matches!(
            parser("int x").parse_var_decl(),
            Err(ParseError::UnexpectedEndOfInput { .. })
        ));
    }

    #[test]
    fn test_function_with_params() {
        let func = parser("def bool less(int a, int b) { return a < b; }")
            .parse_func_decl()
            .unwrap();

        assert_eq!(func.name, "less");
        assert_eq!(func.return_type, DecafType::Bool);
        assert_eq!(
            func.parameters,
            vec![
                Parameter {
                    name: "a".to_string(),
                    param_type: DecafType::Int
                },
                Parameter {
                    name: "b".to_string(),
                    param_type: DecafType::Int
                },
            ]
        );
        assert_eq!(func.body.statements.len(), 1);
    }

    #[test]
    fn test_duplicate_params_accepted() {
        let func = parser("def void f(int a, bool a) {}").parse_func_decl().unwrap();
        assert_eq!(func.parameters.len(), 2);
    }

    #[test]
    fn test_bad_parameter_lists() {
        assert!(matches!(
            parser("def int f(int a,) {}").parse_func_decl(),
            Err(ParseError::InvalidType { .. })
        ));
        assert!(matches!(
            parser("def int f(int) {}").parse_func_decl(),
            Err(ParseError::InvalidIdentifier { .. })
        ));
        assert!(matches!(
            parser("def f() {}").parse_func_decl(),
            Err(ParseError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_top_level_dispatch() {
        let mut p = Parser::new(vec![
            Token::keyword("def", 1),
            Token::keyword("void", 1),
            Token::ident("main", 1),
            Token::symbol("(", 1),
            Token::symbol(")", 1),
            Token::symbol("{", 1),
            Token::symbol("}", 1),
            Token::keyword("int", 2),
            Token::ident("g", 2),
            Token::symbol(";", 2),
        ]);

        assert!(matches!(
            p.parse_top_level_declaration().unwrap(),
            Declaration::Func(ref f) if f.name == "main"
        ));
        let var = p.parse_top_level_declaration().unwrap();
        assert_eq!(var.line(), 2);
        assert!(matches!(var, Declaration::Var(ref v) if v.name == "g"));
        assert!(p.is_exhausted());
    }
}
