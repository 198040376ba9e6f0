// Integration tests for the Decaf parser

use decaf_parser::parser::ast::*;
use decaf_parser::{parse, parse_source, Lexer, Parser, ParseOptions, Token};

#[test]
fn test_factorial_program() {
    let source = r#"
        // iterative factorial
        int cache[16];

        def int fact(int n) {
            int result;
            result = 1;
            while (n > 1) {
                result = result * n;
                n = n - 1;
            }
            return result;
        }

        def void main() {
            int i;
            i = 0;
            while (i < 16) {
                cache[i] = fact(i);
                i = i + 1;
            }
            print_int(cache[5]);
            return;
        }
    "#;

    let program = parse_source(source).expect("Parsing failed");

    assert_eq!(program.globals.len(), 1);
    assert_eq!(program.globals[0].name, "cache");
    assert!(program.globals[0].is_array);
    assert_eq!(program.globals[0].array_length, 16);
    assert_eq!(program.globals[0].line, 3);

    assert_eq!(program.functions.len(), 2);
    let fact = &program.functions[0];
    assert_eq!(fact.name, "fact");
    assert_eq!(fact.line, 5);
    assert_eq!(fact.body.locals.len(), 1);
    assert_eq!(fact.body.statements.len(), 3);

    let main = &program.functions[1];
    assert_eq!(main.return_type, DecafType::Void);
    match &main.body.statements[1] {
        Statement::While { body, .. } => match &body.statements[0] {
            Statement::Assignment { target, value, .. } => {
                assert_eq!(target.name, "cache");
                assert!(matches!(value, Expr::Call(call) if call.name == "fact"));
            }
            other => panic!("Expected assignment, got {:?}", other),
        },
        other => panic!("Expected while, got {:?}", other),
    }
    assert!(matches!(main.body.statements[2], Statement::Call(_)));
    assert_eq!(
        main.body.statements[3],
        Statement::Return {
            value: None,
            line: 23
        }
    );
}

#[test]
fn test_whole_sequence_is_consumed() {
    let source = r#"
        bool flag;
        def bool check(int x, bool strict) {
            if (strict && x != 0 || !flag) {
                return true;
            } else {
                return x % 2 == 0;
            }
        }
    "#;

    let tokens = Lexer::new(source).tokenize().expect("Lexing failed");
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program().expect("Parsing failed");

    assert!(parser.is_exhausted());
    assert_eq!(program.functions[0].parameters.len(), 2);
}

#[test]
fn test_condition_groups_by_precedence() {
    let program = parse_source("def void f() { if (a && b || c) { } }").unwrap();

    match &program.functions[0].body.statements[0] {
        Statement::If { condition, .. } => match condition {
            Expr::BinaryOp { op, left, .. } => {
                assert_eq!(*op, BinOp::Or);
                assert!(matches!(**left, Expr::BinaryOp { op: BinOp::And, .. }));
            }
            other => panic!("Expected binary op, got {:?}", other),
        },
        other => panic!("Expected if, got {:?}", other),
    }
}

#[test]
fn test_string_argument_escapes() {
    let program = parse_source(r#"def void main() { print_str("a\nb\t\"c\""); }"#).unwrap();

    match &program.functions[0].body.statements[0] {
        Statement::Call(call) => assert_eq!(
            call.arguments[0],
            Expr::Literal {
                value: Literal::Str("a\nb\t\"c\"".to_string()),
                line: 1
            }
        ),
        other => panic!("Expected call, got {:?}", other),
    }
}

#[test]
fn test_parse_from_hand_built_tokens() {
    // int x; def int main() { x = 0x10; return x; }
    let tokens = vec![
        Token::keyword("int", 1),
        Token::ident("x", 1),
        Token::symbol(";", 1),
        Token::keyword("def", 2),
        Token::keyword("int", 2),
        Token::ident("main", 2),
        Token::symbol("(", 2),
        Token::symbol(")", 2),
        Token::symbol("{", 2),
        Token::ident("x", 3),
        Token::symbol("=", 3),
        Token::hex("0x10", 3),
        Token::symbol(";", 3),
        Token::keyword("return", 4),
        Token::ident("x", 4),
        Token::symbol(";", 4),
        Token::symbol("}", 5),
    ];

    let program = parse(tokens).expect("Parsing failed");
    let body = &program.functions[0].body;

    assert_eq!(
        body.statements[0],
        Statement::Assignment {
            target: Location {
                name: "x".to_string(),
                index: None,
                line: 3,
            },
            value: Expr::Literal {
                value: Literal::Int(16),
                line: 3,
            },
            line: 3,
        }
    );
    assert_eq!(body.statements[1].line(), 4);
}

#[test]
fn test_options_flow_through_from_source() {
    let options = ParseOptions::default().with_max_identifier_len(3);
    let mut parser = Parser::from_source("int counter;", options).unwrap();
    let program = parser.parse_program().unwrap();

    assert_eq!(program.globals[0].name, "cou");
}

#[test]
fn test_empty_and_comment_only_sources() {
    assert!(parse_source("").unwrap().is_empty());
    assert!(parse_source("  // nothing here\n").unwrap().is_empty());
}
