// Error reporting through the public entry points

use decaf_parser::{parse, parse_source, ParseError, Token};

#[test]
fn test_first_error_wins() {
    // Both declarations are malformed; only the first is reported
    let err = parse_source("int a[;\nbool 7;").unwrap_err();

    assert!(matches!(err, ParseError::InvalidLiteral { .. }));
    assert_eq!(err.line(), 1);
}

#[test]
fn test_mismatch_message_names_expected_and_found() {
    let err = parse_source("def int main() {\n  x = 1\n  return x;\n}").unwrap_err();

    assert_eq!(
        err,
        ParseError::TokenMismatch {
            expected: ";".to_string(),
            found: "return".to_string(),
            line: 3,
        }
    );
    assert_eq!(
        err.to_string(),
        "Parse error on line 3: expected ';' but found 'return'"
    );
}

#[test]
fn test_truncated_function() {
    for source in [
        "def",
        "def int",
        "def int f",
        "def int f(",
        "def int f(int a",
        "def int f()",
        "def int f() { return",
        "def int f() { if (x) { }",
    ] {
        let err = parse_source(source).unwrap_err();
        assert!(
            matches!(err, ParseError::UnexpectedEndOfInput { .. }),
            "{}: {:?}",
            source,
            err
        );
    }
}

#[test]
fn test_invalid_statement_line() {
    let err = parse_source("def void f() {\n\n  ;\n}").unwrap_err();

    assert_eq!(
        err,
        ParseError::InvalidStatement {
            found: ";".to_string(),
            line: 3,
        }
    );
}

#[test]
fn test_top_level_statement_rejected() {
    let err = parse_source("x = 1;").unwrap_err();
    assert!(matches!(err, ParseError::InvalidType { .. }));
}

#[test]
fn test_invalid_base_expression_reported() {
    let err = parse(vec![
        Token::keyword("def", 1),
        Token::keyword("int", 1),
        Token::ident("f", 1),
        Token::symbol("(", 1),
        Token::symbol(")", 1),
        Token::symbol("{", 1),
        Token::keyword("return", 2),
        Token::symbol("*", 2),
        Token::symbol(";", 2),
        Token::symbol("}", 3),
    ])
    .unwrap_err();

    assert_eq!(
        err,
        ParseError::InvalidBaseExpression {
            found: "*".to_string(),
            line: 2,
        }
    );
}

#[test]
fn test_lex_errors_surface_as_parse_errors() {
    let err = parse_source("int x;\n\"unterminated").unwrap_err();
    assert!(matches!(err, ParseError::Lex(_)));
    assert_eq!(err.line(), 2);
}

#[test]
fn test_deeply_nested_parentheses_return_error() {
    let source = |depth: usize| {
        format!(
            "def int f() {{\n return {}1{}; }}",
            "(".repeat(depth),
            ")".repeat(depth)
        )
    };

    assert!(parse_source(&source(50)).is_ok());

    let err = parse_source(&source(200)).unwrap_err();
    assert!(matches!(err, ParseError::NestingTooDeep { limit: 64, .. }));
    assert_eq!(err.line(), 2);
}
