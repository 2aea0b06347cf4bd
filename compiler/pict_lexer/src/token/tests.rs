use super::*;

#[test]
fn span_len_and_empty() {
    let span = Span::new(3, 7);
    assert_eq!(span.len(), 4);
    assert!(!span.is_empty());
    assert!(Span::new(5, 5).is_empty());
}

#[test]
fn token_kind_is_small() {
    // Two bytes: discriminant plus the largest payload.
    assert!(std::mem::size_of::<TokenKind>() <= 2);
}

#[test]
fn value_accessors() {
    let tok = Token {
        kind: TokenKind::Number,
        text: "2.5",
        span: Span::new(0, 3),
        value: Some(LitValue::Number(2.5)),
        line: 1,
    };
    assert_eq!(tok.number(), Some(2.5));
    assert_eq!(tok.string(), None);
    assert_eq!(tok.block(), None);

    let tok = Token {
        kind: TokenKind::Str,
        text: "\"hi\"",
        span: Span::new(0, 4),
        value: Some(LitValue::Str("hi".to_owned())),
        line: 1,
    };
    assert_eq!(tok.string(), Some("hi"));
    assert_eq!(tok.number(), None);
}
