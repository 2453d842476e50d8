#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

fn tokens(source: &str) -> TokenList {
    monkey_lexer::lex(source)
}

#[test]
fn test_cursor_navigation() {
    let tokens = tokens("let x = 42");
    let mut cursor = Cursor::new(&tokens);

    assert!(cursor.check(TokenKind::Let));
    assert!(!cursor.is_at_end());

    cursor.advance();
    assert_eq!(cursor.current().literal, "x");

    cursor.advance();
    assert!(cursor.check(TokenKind::Assign));

    cursor.advance();
    assert!(cursor.check(TokenKind::Int));

    assert_eq!(cursor.current_span(), Span::new(8, 10));

    cursor.advance();
    assert!(cursor.is_at_end());
}

#[test]
fn test_advance_stops_at_eof() {
    let tokens = tokens("x");
    let mut cursor = Cursor::new(&tokens);

    cursor.advance();
    let position = cursor.position();
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert_eq!(cursor.position(), position);
}

#[test]
fn test_eat() {
    let tokens = tokens("; x");
    let mut cursor = Cursor::new(&tokens);

    assert!(!cursor.eat(TokenKind::Comma));
    assert!(cursor.eat(TokenKind::Semicolon));
    assert!(cursor.check(TokenKind::Ident));
}

#[test]
fn test_expect_success() {
    let tokens = tokens("let x");
    let mut cursor = Cursor::new(&tokens);

    let token = cursor.expect(TokenKind::Let).unwrap();
    assert_eq!(token.literal, "let");
    assert!(cursor.check(TokenKind::Ident));
}

#[test]
fn test_expect_failure_reports_found_kind() {
    let tokens = tokens("let 5");
    let mut cursor = Cursor::new(&tokens);
    cursor.advance();

    let err = cursor.expect(TokenKind::Ident).unwrap_err();
    assert_eq!(err.to_string(), "expected identifier, got integer");
    assert_eq!(err.span, Span::new(4, 5));
    // A failed expect consumes nothing.
    assert!(cursor.check(TokenKind::Int));
}
