//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner walks a sentinel-terminated [`Cursor`] and emits [`RawToken`]
//! values with zero heap allocation. It does not resolve keywords, decode
//! escapes, or parse numeric values; the cooking layer in `pict_lexer` does
//! that. Error conditions are encoded as `RawTag` variants, never panics.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. The sentinel
//! byte (`0x00`) dispatches to `eof()`.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Calls after EOF keep returning `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.newline(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'.' => self.dot(start),
            b'"' => self.string(start),
            b'{' => self.code_block(start),
            b'#' => self.hash_comment(start),
            b'/' => self.slash(start),
            b'\\' => self.backslash(start),
            b'+' => self.plus(start),
            b'-' => self.minus(start),
            b'*' => self.star(start),
            b'%' => self.single(start, RawTag::Percent),
            b'=' => self.equal(start),
            b'<' => self.less(start),
            b'>' => self.single(start, RawTag::Greater),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b',' => self.single(start, RawTag::Comma),
            b':' => self.single(start, RawTag::Colon),
            b';' => self.single(start, RawTag::Semicolon),
            // Everything else: stray `}`, punctuation with no meaning in
            // pict, control characters, and non-ASCII lead/continuation
            // bytes at statement level.
            _ => self.single(start, RawTag::UnexpectedByte),
        }
    }

    fn token(&self, tag: RawTag, start: u32) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(tag, start)
    }

    // ─── EOF ───────────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte at statement level.
            self.single(start, RawTag::UnexpectedByte)
        }
    }

    // ─── Whitespace & Newlines ─────────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(RawTag::Whitespace, start)
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'\n' {
            // CRLF counts as a single newline with len 2.
            self.cursor.advance();
            self.token(RawTag::Newline, start)
        } else {
            // Lone \r is horizontal whitespace.
            self.token(RawTag::Whitespace, start)
        }
    }

    fn newline(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.token(RawTag::Newline, start)
    }

    // ─── Comments & Slash ──────────────────────────────────────────────

    fn hash_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_until_newline_or_eof();
        self.token(RawTag::LineComment, start)
    }

    fn slash(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        match self.cursor.current() {
            b'/' => {
                self.cursor.advance();
                self.cursor.eat_until_newline_or_eof();
                self.token(RawTag::LineComment, start)
            }
            b'=' => {
                self.cursor.advance();
                self.token(RawTag::SlashAssign, start)
            }
            _ => self.token(RawTag::Slash, start),
        }
    }

    // ─── Line continuation ─────────────────────────────────────────────

    /// Backslash, optional spaces/tabs, then a newline joins two physical
    /// lines. A backslash not followed by a newline is an error byte.
    fn backslash(&mut self, start: u32) -> RawToken {
        let checkpoint = self.cursor;
        self.cursor.advance();
        self.cursor.eat_whitespace();
        match self.cursor.current() {
            b'\n' => {
                self.cursor.advance();
                self.token(RawTag::LineContinuation, start)
            }
            b'\r' if self.cursor.peek() == b'\n' => {
                self.cursor.advance_n(2);
                self.token(RawTag::LineContinuation, start)
            }
            _ => {
                // Not a continuation. Give back the whitespace we ate and
                // report just the backslash.
                self.cursor = checkpoint;
                self.single(start, RawTag::UnexpectedByte)
            }
        }
    }

    // ─── Identifiers ───────────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        self.token(RawTag::Ident, start)
    }

    // ─── Numbers ───────────────────────────────────────────────────────

    /// Consume a maximal numeric run: digits, embedded `.digit` groups,
    /// an optional exponent, a `0x` hex form, and any trailing letter run
    /// (unit or ordinal suffix). Validation happens in the cooker, so
    /// `3.1.4` and `2fe` each come out as one Number token that will fail
    /// to cook.
    fn number(&mut self, start: u32) -> RawToken {
        if self.cursor.current() == b'0'
            && matches!(self.cursor.peek(), b'x' | b'X')
            && self.cursor.peek2().is_ascii_hexdigit()
        {
            self.cursor.advance_n(2);
            self.cursor.eat_while(|b| b.is_ascii_hexdigit());
            self.cursor.eat_while(is_ident_continue);
            return self.token(RawTag::Number, start);
        }

        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.number_rest(start)
    }

    /// Continue a numeric run after its leading digits (or after a leading
    /// dot, which arrives here with the dot already consumed).
    fn number_rest(&mut self, start: u32) -> RawToken {
        // Fraction groups. A second group (as in `3.1.4`) is deliberately
        // swallowed into the same token.
        while self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        // Exponent: only consumed when digits actually follow, otherwise
        // the `e` is left for the suffix run below.
        if matches!(self.cursor.current(), b'e' | b'E') {
            if self.cursor.peek().is_ascii_digit() {
                self.cursor.advance();
                self.cursor.eat_while(|b| b.is_ascii_digit());
            } else if matches!(self.cursor.peek(), b'+' | b'-') && self.cursor.peek2().is_ascii_digit()
            {
                self.cursor.advance_n(2);
                self.cursor.eat_while(|b| b.is_ascii_digit());
            }
        }

        // Suffix run: unit names (`in`, `cm`), ordinals (`nd`, `th`), or
        // junk the cooker will reject.
        self.cursor.eat_while(is_ident_continue);
        self.token(RawTag::Number, start)
    }

    // ─── Dot forms ─────────────────────────────────────────────────────

    /// `.5` starts a number, `.nw` starts a dot-word accessor, and a bare
    /// dot is an error byte.
    fn dot(&mut self, start: u32) -> RawToken {
        if self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
            return self.number_rest(start);
        }
        if self.cursor.peek().is_ascii_alphabetic() {
            self.cursor.advance();
            self.cursor.eat_while(is_ident_continue);
            return self.token(RawTag::DotWord, start);
        }
        self.single(start, RawTag::UnexpectedByte)
    }

    // ─── Strings ───────────────────────────────────────────────────────

    /// Double-quoted string. Backslash escapes any byte; the literal runs
    /// across newlines until the closing quote or EOF.
    fn string(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // opening quote
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance();
                    return self.token(RawTag::String, start);
                }
                b'\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_eof() {
                        self.cursor.advance(); // the escaped byte
                    }
                }
                _ => {
                    // EOF before the closing quote.
                    return self.token(RawTag::UnterminatedString, start);
                }
            }
        }
    }

    // ─── Code blocks ───────────────────────────────────────────────────

    /// `{...}` captured verbatim with brace balancing. No escapes; nested
    /// braces just bump the depth.
    fn code_block(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // opening brace
        let mut depth: u32 = 1;
        loop {
            match self.cursor.skip_to_block_delim() {
                b'{' => {
                    depth += 1;
                    self.cursor.advance();
                }
                b'}' => {
                    depth -= 1;
                    self.cursor.advance();
                    if depth == 0 {
                        return self.token(RawTag::CodeBlock, start);
                    }
                }
                _ => {
                    return self.token(RawTag::UnterminatedBlock, start);
                }
            }
        }
    }

    // ─── Operators ─────────────────────────────────────────────────────

    fn plus(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.token(RawTag::PlusAssign, start)
        } else {
            self.token(RawTag::Plus, start)
        }
    }

    fn minus(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        match self.cursor.current() {
            b'>' => {
                self.cursor.advance();
                self.token(RawTag::RightArrow, start)
            }
            b'=' => {
                self.cursor.advance();
                self.token(RawTag::MinusAssign, start)
            }
            _ => self.token(RawTag::Minus, start),
        }
    }

    fn star(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.token(RawTag::StarAssign, start)
        } else {
            self.token(RawTag::Star, start)
        }
    }

    fn equal(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.token(RawTag::EqEq, start)
        } else {
            self.token(RawTag::Assign, start)
        }
    }

    fn less(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'-' {
            self.cursor.advance();
            if self.cursor.current() == b'>' {
                self.cursor.advance();
                self.token(RawTag::BidirArrow, start)
            } else {
                self.token(RawTag::LeftArrow, start)
            }
        } else {
            self.token(RawTag::Less, start)
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    /// Yields tokens until EOF; the `Eof` token itself is not yielded.
    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Bytes that may continue an identifier or a numeric suffix run.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Scan an entire source into raw tokens, excluding the trailing `Eof`.
pub fn raw_tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}
