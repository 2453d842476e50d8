use super::*;

#[test]
fn test_from_vec_appends_eof() {
    let list = TokenList::from_vec(vec![Token::new(TokenKind::Int, "5", Span::new(0, 1))]);
    assert_eq!(list.iter().count(), 2);
    assert_eq!(list[1].kind, TokenKind::Eof);
    assert_eq!(list[1].span, Span::point(1));
}

#[test]
fn test_from_vec_keeps_single_eof() {
    let list = TokenList::from_vec(vec![
        Token::new(TokenKind::Ident, "x", Span::new(0, 1)),
        Token::new(TokenKind::Eof, "", Span::point(1)),
    ]);
    assert_eq!(list.iter().count(), 2);
    assert_eq!(list.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
}

#[test]
fn test_empty_input_is_just_eof() {
    let list = TokenList::from_vec(Vec::new());
    assert_eq!(list.iter().count(), 1);
    assert_eq!(list[0].kind, TokenKind::Eof);
    assert_eq!(list[0].span, Span::point(0));
}

#[test]
fn test_display_name() {
    assert_eq!(TokenKind::RParen.to_string(), "`)`");
    assert_eq!(TokenKind::Eof.to_string(), "end of input");
}
