//! Lexer for the pict diagram language.
//!
//! Cooks the raw tokens produced by `pict_lexer_core` into full [`Token`]s:
//! keywords and class names are recognized case-insensitively, numeric
//! literals are decoded (units scaled to inches, hex color constants,
//! ordinals), string and code-block literals are captured, and newlines and
//! semicolons collapse into statement-separating [`TokenKind::Eol`] tokens.
//!
//! The main entry point is [`Lexer`], a fallible pull interface with
//! one-token lookahead:
//!
//! ```
//! use pict_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("box \"hello\"");
//! assert_eq!(lexer.next().unwrap().kind, TokenKind::Classname);
//! assert_eq!(lexer.next().unwrap().kind, TokenKind::Str);
//! assert_eq!(lexer.next().unwrap().kind, TokenKind::Eof);
//! ```
//!
//! [`tokenize`] drives a [`Lexer`] to completion for callers that want the
//! whole token stream up front.

mod keywords;
mod lex_error;
mod lexer;
mod token;

pub use lex_error::{LexError, LexErrorKind};
pub use lexer::Lexer;
pub use token::{
    AssignOp, Axis, BuiltinFn, Compass, LitValue, Prop, Span, Token, TokenKind,
};

/// Lexes `source` to completion, returning every token before `Eof`.
///
/// Stops at the first lexical error. Callers that want incremental
/// tokenization or lookahead should drive a [`Lexer`] directly.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next()?;
        if token.kind == TokenKind::Eof {
            return Ok(tokens);
        }
        tokens.push(token);
    }
}
