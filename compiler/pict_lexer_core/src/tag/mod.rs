//! Raw token tags.
//!
//! A [`RawTag`] classifies a byte run without interpreting it: identifiers
//! and keywords share [`RawTag::Ident`], every numeric shape is
//! [`RawTag::Number`], and lexical problems are ordinary tags rather than
//! errors. The `pict_lexer` crate cooks raw tags into full token kinds.
//!
//! Discriminants are grouped into semantic ranges so a tag's category can
//! be read off its numeric value in debug output:
//!
//! - `0..=15`: words and literals
//! - `32..=63`: operators
//! - `80..=95`: delimiters
//! - `112..=127`: trivia
//! - `240..=254`: errors
//! - `255`: EOF

/// Classification of a raw byte run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Words & Literals: 0-15 ===
    /// Letter/underscore run: identifier, keyword, place name, or class name.
    Ident = 0,
    /// Digit run with optional dots, exponent, hex prefix, or suffix letters.
    /// The cooker validates; `3.1.4` is one Number token that fails to cook.
    Number = 1,
    /// Double-quoted string including both quotes. May span newlines.
    String = 2,
    /// Brace-balanced `{...}` run including both outer braces.
    CodeBlock = 3,
    /// Dot followed by a letter run, e.g. `.nw` or `.start`.
    DotWord = 4,

    // === Operators: 32-63 ===
    Plus = 32,
    Minus = 33,
    Star = 34,
    Slash = 35,
    Percent = 36,
    Assign = 37,
    PlusAssign = 38,
    MinusAssign = 39,
    StarAssign = 40,
    SlashAssign = 41,
    EqEq = 42,
    Less = 43,
    Greater = 44,
    /// `<-`
    LeftArrow = 45,
    /// `->`
    RightArrow = 46,
    /// `<->`
    BidirArrow = 47,

    // === Delimiters: 80-95 ===
    LeftParen = 80,
    RightParen = 81,
    LeftBracket = 82,
    RightBracket = 83,
    Comma = 84,
    Colon = 85,
    Semicolon = 86,

    // === Trivia: 112-127 ===
    /// Horizontal whitespace (spaces, tabs, lone `\r`).
    Whitespace = 112,
    /// `\n` or `\r\n`.
    Newline = 113,
    /// `#` or `//` to end of line (newline not included).
    LineComment = 114,
    /// Backslash, optional horizontal whitespace, then a newline.
    LineContinuation = 115,

    // === Errors: 240-254 ===
    /// A byte no rule accepts, consumed as a single-byte token.
    UnexpectedByte = 240,
    /// String literal still open at EOF.
    UnterminatedString = 241,
    /// Code block with unbalanced braces at EOF.
    UnterminatedBlock = 242,

    // === End of input ===
    Eof = 255,
}

impl RawTag {
    /// Trivia is skipped silently by the cooker. Newlines are not trivia;
    /// they cook into statement terminators.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            RawTag::Whitespace | RawTag::LineComment | RawTag::LineContinuation
        )
    }

    /// Returns `true` for tags the cooker turns into lex errors.
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(
            self,
            RawTag::UnexpectedByte | RawTag::UnterminatedString | RawTag::UnterminatedBlock
        )
    }
}

/// A raw token: a tag and the byte length of its text.
///
/// Raw tokens carry no position; consumers track the running byte offset by
/// summing lengths, which keeps the token itself at 8 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

impl RawToken {
    #[inline]
    pub fn new(tag: RawTag, len: u32) -> Self {
        Self { tag, len }
    }
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
