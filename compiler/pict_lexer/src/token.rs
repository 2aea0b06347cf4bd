//! Token types for the pict language.
//!
//! [`TokenKind`] is the closed vocabulary the parser consumes. Word keywords
//! carry no payload; families that the grammar treats uniformly (compass
//! edge points, built-in functions, assignment operators, dotted property
//! accessors) carry a small `Copy` payload instead of one variant per
//! spelling, so `max` and `min` are both `Func2` and the parser matches the
//! family once.

/// Byte range of a token in the source, end exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start {start} exceeds end {end}");
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Compass points for edge references (`ne`, `.sw`, `north`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Compass {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
    C,
}

/// Coordinate axis for `.x` / `.y` accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Built-in numeric functions.
///
/// `Abs`/`Cos`/`Int`/`Sin`/`Sqrt` take one argument (`Func1`); `Max`/`Min`
/// take two (`Func2`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinFn {
    Abs,
    Cos,
    Int,
    Max,
    Min,
    Sin,
    Sqrt,
}

/// Which assignment operator produced an `Assign` token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssignOp {
    /// `=`
    Set,
    /// `+=`
    Add,
    /// `-=`
    Sub,
    /// `*=`
    Mul,
    /// `/=`
    Div,
}

/// Numeric object property named by a `.width`-style accessor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prop {
    Width,
    Height,
    Radius,
    Diameter,
    Thickness,
    Color,
    Fill,
}

/// The closed token vocabulary of the pict language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Literals & names ===
    /// Lowercase-led identifier that is not reserved and not a class name.
    Id,
    /// Uppercase-led identifier: a place label like `Origin` or `B1`.
    Placename,
    /// Object class: `box`, `circle`, `arrow`, ... (exact lowercase only).
    Classname,
    /// Numeric literal; value scaled to inches when a unit suffix appears.
    Number,
    /// Ordinal (`3rd`, `first`) selecting the n-th object of a class.
    Nth,
    /// Double-quoted string literal.
    Str,
    /// Brace-balanced `{...}` body captured verbatim.
    CodeBlock,

    // === Directions ===
    Up,
    Down,
    Left,
    Right,
    Cw,
    Ccw,

    // === Numeric attributes ===
    Height,
    Width,
    Radius,
    Diameter,
    Thickness,
    Fill,
    Color,

    // === Relational & positional ===
    Of,
    From,
    To,
    At,
    With,
    Between,
    Behind,
    Above,
    Below,
    Same,
    As,
    Until,
    Even,
    Close,
    Chop,
    Fit,
    Way,
    In,
    On,
    And,
    Go,
    Heading,
    Then,

    // === Ordinal & selector ===
    The,
    Vertex,
    Top,
    Bottom,
    Start,
    End,
    Last,
    This,

    // === Style ===
    Dotted,
    Dashed,
    Solid,
    Invis,
    Thick,
    Thin,
    Bold,
    Italic,
    Aligned,
    Big,
    Small,
    Center,
    Ljust,
    Rjust,

    // === Arrowheads (operators `<-` `->` `<->` and spelled keywords) ===
    Larrow,
    Rarrow,
    Lrarrow,

    // === Structural ===
    Define,
    Assert,
    Print,

    // === Edge points & coordinates ===
    /// Bare compass word: `n`, `north`, `ne`, ..., `c`.
    EdgePt(Compass),
    X,
    Y,

    // === Functions ===
    /// One-argument built-in: `abs`, `cos`, `int`, `sin`, `sqrt`.
    Func1(BuiltinFn),
    /// Two-argument built-in: `max`, `min`.
    Func2(BuiltinFn),
    /// `dist(a, b)`.
    Dist,

    // === Dotted accessors (single token covering dot + word) ===
    /// `.ne`, `.top`, `.left`, ... edge of a named object.
    DotEdge(Compass),
    /// `.start`
    DotStart,
    /// `.end`
    DotEnd,
    /// `.last`
    DotLast,
    /// `.x` / `.y`
    DotXy(Axis),
    /// `.width`, `.ht`, `.color`, ... numeric property of a named object.
    DotProp(Prop),

    // === Operators & punctuation ===
    Plus,
    /// Always `Minus` from the lexer; unary-vs-binary is the parser's call.
    Minus,
    /// Precedence-only marker for the parser. The lexer never emits it.
    UMinus,
    Star,
    Slash,
    Percent,
    /// `=` and the compound forms; the payload says which.
    Assign(AssignOp),
    /// `==`
    Eq,
    Lt,
    Gt,
    LParen,
    RParen,
    /// `[` opens a sub-diagram group (`{` opens a code block instead).
    LBracket,
    RBracket,
    Comma,
    Colon,
    /// Statement terminator: newline or `;`. Suppressed at start of input
    /// and after another `Eol`.
    Eol,
    Eof,
}

/// Decoded literal payload carried by `Number`/`Nth`/`Str`/`CodeBlock`.
#[derive(Clone, Debug, PartialEq)]
pub enum LitValue<'a> {
    /// Numeric value, in inches when a unit suffix was present.
    Number(f64),
    /// String contents with escapes decoded.
    Str(String),
    /// Code-block interior, verbatim, outer braces excluded.
    Block(&'a str),
}

/// One token: classification, raw text, position, decoded value.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Raw source text of the token (empty for `Eof`).
    pub text: &'a str,
    pub span: Span,
    /// Decoded literal payload, `None` for non-literals.
    pub value: Option<LitValue<'a>>,
    /// 1-based line on which the token starts.
    pub line: u32,
}

impl<'a> Token<'a> {
    /// The decoded numeric value, if this token carries one.
    pub fn number(&self) -> Option<f64> {
        match self.value {
            Some(LitValue::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// The decoded string contents, if this token carries them.
    pub fn string(&self) -> Option<&str> {
        match &self.value {
            Some(LitValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// The verbatim code-block interior, if this token carries one.
    pub fn block(&self) -> Option<&'a str> {
        match self.value {
            Some(LitValue::Block(b)) => Some(b),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
