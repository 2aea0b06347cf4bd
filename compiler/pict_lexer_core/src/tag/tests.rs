use super::*;

// === RawTag discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    // Words & literals: 0-15
    assert_eq!(RawTag::Ident as u8, 0);
    assert_eq!(RawTag::Number as u8, 1);
    assert_eq!(RawTag::String as u8, 2);
    assert_eq!(RawTag::CodeBlock as u8, 3);
    assert_eq!(RawTag::DotWord as u8, 4);

    // Operators: 32-63
    assert_eq!(RawTag::Plus as u8, 32);
    assert_eq!(RawTag::BidirArrow as u8, 47);

    // Delimiters: 80-95
    assert_eq!(RawTag::LeftParen as u8, 80);
    assert_eq!(RawTag::Semicolon as u8, 86);

    // Trivia: 112-127
    assert_eq!(RawTag::Whitespace as u8, 112);
    assert_eq!(RawTag::LineContinuation as u8, 115);

    // Errors: 240-254
    assert_eq!(RawTag::UnexpectedByte as u8, 240);
    assert_eq!(RawTag::UnterminatedBlock as u8, 242);

    // EOF
    assert_eq!(RawTag::Eof as u8, 255);
}

// === Classification helpers ===

#[test]
fn trivia_tags() {
    assert!(RawTag::Whitespace.is_trivia());
    assert!(RawTag::LineComment.is_trivia());
    assert!(RawTag::LineContinuation.is_trivia());

    // Newlines become statement terminators, not trivia.
    assert!(!RawTag::Newline.is_trivia());
    assert!(!RawTag::Ident.is_trivia());
    assert!(!RawTag::Eof.is_trivia());
}

#[test]
fn error_tags() {
    assert!(RawTag::UnexpectedByte.is_error());
    assert!(RawTag::UnterminatedString.is_error());
    assert!(RawTag::UnterminatedBlock.is_error());

    assert!(!RawTag::String.is_error());
    assert!(!RawTag::Eof.is_error());
}

// === RawToken ===

#[test]
fn raw_token_is_8_bytes() {
    assert_eq!(std::mem::size_of::<RawToken>(), 8);
}

#[test]
fn raw_token_new() {
    let tok = RawToken::new(RawTag::Number, 4);
    assert_eq!(tok.tag, RawTag::Number);
    assert_eq!(tok.len, 4);
}
