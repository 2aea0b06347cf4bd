//! The pull-based lexer: raw tags cooked into classified tokens.
//!
//! Construction runs the `pict_lexer_core` raw scanner over the whole
//! source once, collecting `(tag, len)` pairs; `next()` then walks that
//! list, skipping trivia, counting lines, suppressing redundant `Eol`s, and
//! decoding literal values on demand. Token text borrows from the caller's
//! source string, so tokens outlive the lexer's internal state.
//!
//! Error handling is strict: the first lexical problem puts the lexer into
//! a terminal errored state, and every later `next()`/`peek()` returns the
//! same [`LexError`]. Past the end of input, `next()` returns the `Eof`
//! token forever.

use pict_lexer_core::{RawScanner, RawTag, RawToken, SourceBuffer};

use crate::keywords;
use crate::lex_error::LexError;
use crate::token::{AssignOp, LitValue, Span, Token, TokenKind};

#[derive(Clone, Copy, Debug)]
enum State {
    Scanning,
    AtEnd,
    Errored(LexError),
}

/// Streaming lexer over a pict source text.
pub struct Lexer<'a> {
    source: &'a str,
    /// Raw tokens for the whole source, ending with the `Eof` tag.
    raw: Vec<RawToken>,
    /// Index of the next raw token to consume.
    idx: usize,
    /// Byte offset of `raw[idx]` in `source`.
    offset: u32,
    /// 1-based line of `raw[idx]`.
    line: u32,
    /// Whether any non-`Eol` token has been emitted yet.
    emitted_any: bool,
    /// Whether the previous emitted token was `Eol`.
    last_was_eol: bool,
    peeked: Option<Token<'a>>,
    state: State,
}

impl<'a> Lexer<'a> {
    /// Lex `source` starting at line 1.
    pub fn new(source: &'a str) -> Self {
        Self::with_start_line(source, 1)
    }

    /// Lex `source` with an explicit starting line number, for callers
    /// embedding pict fragments in a larger document.
    pub fn with_start_line(source: &'a str, start_line: u32) -> Self {
        let buf = SourceBuffer::new(source);
        let mut scanner = RawScanner::new(buf.cursor());
        let mut raw = Vec::new();
        loop {
            let tok = scanner.next_token();
            let done = tok.tag == RawTag::Eof;
            raw.push(tok);
            if done {
                break;
            }
        }
        Self {
            source,
            raw,
            idx: 0,
            offset: 0,
            line: start_line,
            emitted_any: false,
            last_was_eol: false,
            peeked: None,
            state: State::Scanning,
        }
    }

    /// Pull the next token.
    ///
    /// Returns the `Eof` token (repeatedly) once the input is exhausted,
    /// and the same error (repeatedly) once one has occurred.
    #[allow(
        clippy::should_implement_trait,
        reason = "fallible pull interface; Iterator's infallible contract does not fit"
    )]
    pub fn next(&mut self) -> Result<Token<'a>, LexError> {
        if let Some(tok) = self.peeked.take() {
            return Ok(tok);
        }
        self.advance_token()
    }

    /// Look at the next token without consuming it.
    pub fn peek(&mut self) -> Result<&Token<'a>, LexError> {
        if self.peeked.is_none() {
            let tok = self.advance_token()?;
            self.peeked = Some(tok);
        }
        match self.peeked.as_ref() {
            Some(tok) => Ok(tok),
            None => unreachable!("peeked was filled above"),
        }
    }

    /// The line the lexer is currently positioned on.
    pub fn line(&self) -> u32 {
        self.line
    }

    fn advance_token(&mut self) -> Result<Token<'a>, LexError> {
        match self.state {
            State::Errored(err) => return Err(err),
            State::AtEnd => return Ok(self.eof_token()),
            State::Scanning => {}
        }

        loop {
            let raw = self.raw[self.idx];
            match raw.tag {
                RawTag::Whitespace | RawTag::LineComment | RawTag::LineContinuation => {
                    self.consume(raw);
                }
                RawTag::Newline | RawTag::Semicolon => {
                    // A terminator is only worth emitting after a real
                    // token; leading and repeated terminators are trivia.
                    if self.emitted_any && !self.last_was_eol {
                        let tok = self.make_token(TokenKind::Eol, raw, None);
                        self.consume(raw);
                        self.last_was_eol = true;
                        return Ok(tok);
                    }
                    self.consume(raw);
                }
                RawTag::Eof => {
                    self.state = State::AtEnd;
                    return Ok(self.eof_token());
                }
                _ => return self.cook(raw),
            }
        }
    }

    /// Cook one significant raw token into a full token, or fail.
    fn cook(&mut self, raw: RawToken) -> Result<Token<'a>, LexError> {
        let start = self.offset;
        let end = start + raw.len;

        // Error tags first: their text may not lie on UTF-8 boundaries, so
        // they must not be sliced.
        match raw.tag {
            RawTag::UnterminatedString => {
                let line = self.line + self.newlines_in(start, end);
                return Err(self.fail(LexError::unterminated_string(end, line)));
            }
            RawTag::UnterminatedBlock => {
                let line = self.line + self.newlines_in(start, end);
                return Err(self.fail(LexError::unterminated_block(end, line)));
            }
            RawTag::UnexpectedByte => {
                let ch = self.source[start as usize..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(self.fail(LexError::unexpected_character(ch, start, self.line)));
            }
            _ => {}
        }

        let text = &self.source[start as usize..end as usize];
        let (kind, value) = match raw.tag {
            RawTag::Ident => cook_ident(text),
            RawTag::Number => match cook_number(text) {
                Some(cooked) => cooked,
                None => return Err(self.fail(LexError::invalid_number(start, self.line))),
            },
            RawTag::String => {
                let interior = &text[1..text.len() - 1];
                (TokenKind::Str, Some(LitValue::Str(unescape(interior))))
            }
            RawTag::CodeBlock => {
                let interior = &text[1..text.len() - 1];
                (TokenKind::CodeBlock, Some(LitValue::Block(interior)))
            }
            RawTag::DotWord => match keywords::dot_lookup(&text[1..]) {
                Some(kind) => (kind, None),
                None => {
                    return Err(self.fail(LexError::unexpected_character('.', start, self.line)))
                }
            },

            RawTag::Plus => (TokenKind::Plus, None),
            RawTag::Minus => (TokenKind::Minus, None),
            RawTag::Star => (TokenKind::Star, None),
            RawTag::Slash => (TokenKind::Slash, None),
            RawTag::Percent => (TokenKind::Percent, None),
            RawTag::Assign => (TokenKind::Assign(AssignOp::Set), None),
            RawTag::PlusAssign => (TokenKind::Assign(AssignOp::Add), None),
            RawTag::MinusAssign => (TokenKind::Assign(AssignOp::Sub), None),
            RawTag::StarAssign => (TokenKind::Assign(AssignOp::Mul), None),
            RawTag::SlashAssign => (TokenKind::Assign(AssignOp::Div), None),
            RawTag::EqEq => (TokenKind::Eq, None),
            RawTag::Less => (TokenKind::Lt, None),
            RawTag::Greater => (TokenKind::Gt, None),
            RawTag::LeftArrow => (TokenKind::Larrow, None),
            RawTag::RightArrow => (TokenKind::Rarrow, None),
            RawTag::BidirArrow => (TokenKind::Lrarrow, None),
            RawTag::LeftParen => (TokenKind::LParen, None),
            RawTag::RightParen => (TokenKind::RParen, None),
            RawTag::LeftBracket => (TokenKind::LBracket, None),
            RawTag::RightBracket => (TokenKind::RBracket, None),
            RawTag::Comma => (TokenKind::Comma, None),
            RawTag::Colon => (TokenKind::Colon, None),

            RawTag::Whitespace
            | RawTag::Newline
            | RawTag::LineComment
            | RawTag::LineContinuation
            | RawTag::Semicolon
            | RawTag::UnexpectedByte
            | RawTag::UnterminatedString
            | RawTag::UnterminatedBlock
            | RawTag::Eof => unreachable!("handled by the driver loop"),
        };

        let tok = Token {
            kind,
            text,
            span: Span::new(start, end),
            value,
            line: self.line,
        };
        self.consume(raw);
        self.emitted_any = true;
        self.last_was_eol = false;
        Ok(tok)
    }

    fn make_token(&self, kind: TokenKind, raw: RawToken, value: Option<LitValue<'a>>) -> Token<'a> {
        let start = self.offset;
        let end = start + raw.len;
        Token {
            kind,
            text: &self.source[start as usize..end as usize],
            span: Span::new(start, end),
            value,
            line: self.line,
        }
    }

    fn eof_token(&self) -> Token<'a> {
        let len = u32::try_from(self.source.len()).unwrap_or(u32::MAX);
        Token {
            kind: TokenKind::Eof,
            text: "",
            span: Span::new(len, len),
            value: None,
            line: self.line,
        }
    }

    /// Step past `raw`, advancing the byte offset and the line counter.
    fn consume(&mut self, raw: RawToken) {
        let end = self.offset + raw.len;
        self.line += self.newlines_in(self.offset, end);
        self.offset = end;
        self.idx += 1;
    }

    fn newlines_in(&self, start: u32, end: u32) -> u32 {
        let bytes = &self.source.as_bytes()[start as usize..end as usize];
        u32::try_from(memchr::memchr_iter(b'\n', bytes).count()).unwrap_or(u32::MAX)
    }

    fn fail(&mut self, err: LexError) -> LexError {
        self.state = State::Errored(err);
        err
    }
}

/// Classify an identifier run: reserved word, class name, place name, or
/// plain identifier, in that order.
fn cook_ident(text: &str) -> (TokenKind, Option<LitValue<'_>>) {
    if let Some(kind) = keywords::lookup(text) {
        // `first` selects object number one; spelled `nth` carries no value.
        let value = if kind == TokenKind::Nth && text.eq_ignore_ascii_case("first") {
            Some(LitValue::Number(1.0))
        } else {
            None
        };
        return (kind, value);
    }
    if keywords::is_class(text) {
        return (TokenKind::Classname, None);
    }
    if text.as_bytes().first().is_some_and(u8::is_ascii_uppercase) {
        return (TokenKind::Placename, None);
    }
    (TokenKind::Id, None)
}

/// Parse a numeric run into its value. `None` means the run is not a valid
/// number (second decimal point, dangling exponent, unknown suffix).
#[allow(
    clippy::cast_precision_loss,
    reason = "hex constants are color values well below 2^53"
)]
fn cook_number(text: &str) -> Option<(TokenKind, Option<LitValue<'static>>)> {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        let v = u64::from_str_radix(hex, 16).ok()?;
        return Some((TokenKind::Number, Some(LitValue::Number(v as f64))));
    }

    // Split off the trailing letter run: a unit, an ordinal suffix, or junk.
    let bytes = text.as_bytes();
    let mut split = bytes.len();
    while split > 0 && bytes[split - 1].is_ascii_alphabetic() {
        split -= 1;
    }
    let (num, suffix) = text.split_at(split);

    if suffix.is_empty() {
        let v = num.parse::<f64>().ok()?;
        return Some((TokenKind::Number, Some(LitValue::Number(v))));
    }

    if is_ordinal_suffix(suffix) && !num.is_empty() && bytes[..split].iter().all(u8::is_ascii_digit)
    {
        let v = num.parse::<f64>().ok()?;
        return Some((TokenKind::Nth, Some(LitValue::Number(v))));
    }

    let scale = unit_scale(suffix)?;
    let v = num.parse::<f64>().ok()?;
    Some((TokenKind::Number, Some(LitValue::Number(v * scale))))
}

fn is_ordinal_suffix(suffix: &str) -> bool {
    suffix.eq_ignore_ascii_case("st")
        || suffix.eq_ignore_ascii_case("nd")
        || suffix.eq_ignore_ascii_case("rd")
        || suffix.eq_ignore_ascii_case("th")
}

/// Multiplier converting a suffixed dimension to inches.
fn unit_scale(suffix: &str) -> Option<f64> {
    if suffix.eq_ignore_ascii_case("in") {
        Some(1.0)
    } else if suffix.eq_ignore_ascii_case("cm") {
        Some(1.0 / 2.54)
    } else if suffix.eq_ignore_ascii_case("mm") {
        Some(1.0 / 25.4)
    } else if suffix.eq_ignore_ascii_case("pt") {
        Some(1.0 / 72.0)
    } else if suffix.eq_ignore_ascii_case("px") {
        Some(1.0 / 96.0)
    } else if suffix.eq_ignore_ascii_case("pc") {
        Some(1.0 / 6.0)
    } else {
        None
    }
}

/// Decode string-literal escapes: `\"`, `\\`, and `\n` (newline). Any other
/// backslash pair is kept verbatim.
fn unescape(interior: &str) -> String {
    let mut out = String::with_capacity(interior.len());
    let mut chars = interior.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            // A terminated string cannot end in a lone backslash, but keep
            // the byte if it somehow does.
            None => out.push('\\'),
        }
    }
    out
}
