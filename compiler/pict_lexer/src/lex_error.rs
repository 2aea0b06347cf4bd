//! Lexer error types.
//!
//! One structured error value per failure: what went wrong, the byte offset,
//! and the 1-based line. No recovery and no message formatting beyond
//! `Display`; rendering with source context belongs to the caller.

use thiserror::Error;

/// What kind of lexical failure occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// String literal still open at end of input.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Code block with unbalanced braces at end of input.
    #[error("unterminated code block")]
    UnterminatedBlock,
    /// Numeric literal that does not parse: second decimal point, bad
    /// exponent, or an unrecognized suffix.
    #[error("malformed number")]
    InvalidNumber,
    /// A character no lexical rule accepts.
    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(char),
}

/// A lexical error at a known position.
///
/// Returned by [`Lexer::next`](crate::Lexer::next); after the first error
/// the lexer is stuck and every further call returns the same value.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error("{kind} at offset {offset} on line {line}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Byte offset of the failure. For the unterminated kinds this is the
    /// end of input, where the missing delimiter was expected.
    pub offset: u32,
    /// 1-based line of the failure.
    pub line: u32,
}

impl LexError {
    #[cold]
    pub(crate) fn unterminated_string(offset: u32, line: u32) -> Self {
        Self {
            kind: LexErrorKind::UnterminatedString,
            offset,
            line,
        }
    }

    #[cold]
    pub(crate) fn unterminated_block(offset: u32, line: u32) -> Self {
        Self {
            kind: LexErrorKind::UnterminatedBlock,
            offset,
            line,
        }
    }

    #[cold]
    pub(crate) fn invalid_number(offset: u32, line: u32) -> Self {
        Self {
            kind: LexErrorKind::InvalidNumber,
            offset,
            line,
        }
    }

    #[cold]
    pub(crate) fn unexpected_character(ch: char, offset: u32, line: u32) -> Self {
        Self {
            kind: LexErrorKind::UnexpectedCharacter(ch),
            offset,
            line,
        }
    }
}
