//! Reserved-word, class-name, and dotted-accessor tables.
//!
//! Three lookups with different matching rules:
//!
//! 1. **Reserved words** — case-insensitive. `UP`, `Up`, and `up` are all
//!    the `Up` keyword; no capitalization turns a keyword into a place or
//!    class name.
//! 2. **Class names** — exact lowercase only. `box` is a class, `Box` is a
//!    place label.
//! 3. **Dotted accessors** — case-insensitive, applied to the word after a
//!    `.` in tokens like `A.nw` or `B.width`.
//!
//! All lookups lowercase the candidate into a stack buffer and length-bucket
//! before comparing, so non-keywords are rejected after at most a handful of
//! byte comparisons.

use crate::token::{Axis, BuiltinFn, Compass, Prop, TokenKind};

/// Longest reserved word (`thickness`, `invisible`).
const MAX_KEYWORD_LEN: usize = 9;

/// Lowercase `text` into `buf`. Returns `None` when the text cannot be a
/// keyword: wrong length or a non-alphabetic byte (every table entry is
/// pure ASCII letters).
fn fold_case(text: &str, buf: &mut [u8; MAX_KEYWORD_LEN]) -> Option<usize> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    if !(1..=MAX_KEYWORD_LEN).contains(&len) {
        return None;
    }
    for (dst, &b) in buf.iter_mut().zip(bytes) {
        if !b.is_ascii_alphabetic() {
            return None;
        }
        *dst = b.to_ascii_lowercase();
    }
    Some(len)
}

/// Look up a reserved word, case-insensitively.
///
/// Returns `None` for plain identifiers, place names, and class names;
/// those shapes are classified by the caller.
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    use TokenKind::{
        Above, Aligned, And, As, Assert, At, Behind, Below, Between, Big, Bold, Bottom, Ccw,
        Center, Chop, Close, Color, Cw, Dashed, Define, Diameter, Dist, Dotted, Down, EdgePt, End,
        Even, Fill, Fit, From, Func1, Func2, Go, Heading, Height, In, Invis, Italic, Larrow, Last,
        Left, Ljust, Lrarrow, Nth, Of, On, Print, Radius, Rarrow, Right, Rjust, Same, Small, Solid,
        Start, The, Then, Thick, Thickness, Thin, This, To, Top, Until, Up, Vertex, Way, Width,
        With, X, Y,
    };

    let mut buf = [0u8; MAX_KEYWORD_LEN];
    let len = fold_case(text, &mut buf)?;
    let word = &buf[..len];

    match len {
        1 => match word {
            b"c" => Some(EdgePt(Compass::C)),
            b"e" => Some(EdgePt(Compass::E)),
            b"n" => Some(EdgePt(Compass::N)),
            b"s" => Some(EdgePt(Compass::S)),
            b"w" => Some(EdgePt(Compass::W)),
            b"x" => Some(X),
            b"y" => Some(Y),
            _ => None,
        },
        2 => match word {
            b"as" => Some(As),
            b"at" => Some(At),
            b"cw" => Some(Cw),
            b"go" => Some(Go),
            b"ht" => Some(Height),
            b"in" => Some(In),
            b"ne" => Some(EdgePt(Compass::Ne)),
            b"nw" => Some(EdgePt(Compass::Nw)),
            b"of" => Some(Of),
            b"on" => Some(On),
            b"se" => Some(EdgePt(Compass::Se)),
            b"sw" => Some(EdgePt(Compass::Sw)),
            b"to" => Some(To),
            b"up" => Some(Up),
            _ => None,
        },
        3 => match word {
            b"abs" => Some(Func1(BuiltinFn::Abs)),
            b"and" => Some(And),
            b"big" => Some(Big),
            b"bot" => Some(Bottom),
            b"ccw" => Some(Ccw),
            b"cos" => Some(Func1(BuiltinFn::Cos)),
            b"end" => Some(End),
            b"fit" => Some(Fit),
            b"int" => Some(Func1(BuiltinFn::Int)),
            b"max" => Some(Func2(BuiltinFn::Max)),
            b"min" => Some(Func2(BuiltinFn::Min)),
            b"nth" => Some(Nth),
            b"rad" => Some(Radius),
            b"sin" => Some(Func1(BuiltinFn::Sin)),
            b"the" => Some(The),
            b"top" => Some(Top),
            b"way" => Some(Way),
            b"wid" => Some(Width),
            _ => None,
        },
        4 => match word {
            b"bold" => Some(Bold),
            b"chop" => Some(Chop),
            b"dist" => Some(Dist),
            b"down" => Some(Down),
            b"east" => Some(EdgePt(Compass::E)),
            b"even" => Some(Even),
            b"fill" => Some(Fill),
            b"from" => Some(From),
            b"last" => Some(Last),
            b"left" => Some(Left),
            b"same" => Some(Same),
            b"sqrt" => Some(Func1(BuiltinFn::Sqrt)),
            b"then" => Some(Then),
            b"thin" => Some(Thin),
            b"this" => Some(This),
            b"west" => Some(EdgePt(Compass::W)),
            b"with" => Some(With),
            _ => None,
        },
        5 => match word {
            b"above" => Some(Above),
            b"below" => Some(Below),
            b"close" => Some(Close),
            b"color" => Some(Color),
            b"first" => Some(Nth),
            b"invis" => Some(Invis),
            b"ljust" => Some(Ljust),
            b"north" => Some(EdgePt(Compass::N)),
            b"print" => Some(Print),
            b"right" => Some(Right),
            b"rjust" => Some(Rjust),
            b"small" => Some(Small),
            b"solid" => Some(Solid),
            b"south" => Some(EdgePt(Compass::S)),
            b"start" => Some(Start),
            b"thick" => Some(Thick),
            b"until" => Some(Until),
            b"width" => Some(Width),
            _ => None,
        },
        6 => match word {
            b"assert" => Some(Assert),
            b"behind" => Some(Behind),
            b"bottom" => Some(Bottom),
            b"center" => Some(Center),
            b"dashed" => Some(Dashed),
            b"define" => Some(Define),
            b"dotted" => Some(Dotted),
            b"height" => Some(Height),
            b"italic" => Some(Italic),
            b"larrow" => Some(Larrow),
            b"radius" => Some(Radius),
            b"rarrow" => Some(Rarrow),
            b"vertex" => Some(Vertex),
            _ => None,
        },
        7 => match word {
            b"aligned" => Some(Aligned),
            b"between" => Some(Between),
            b"heading" => Some(Heading),
            b"lrarrow" => Some(Lrarrow),
            _ => None,
        },
        8 => match word {
            b"diameter" => Some(Diameter),
            b"previous" => Some(Last),
            _ => None,
        },
        9 => match word {
            b"invisible" => Some(Invis),
            b"thickness" => Some(Thickness),
            _ => None,
        },
        _ => None,
    }
}

/// Returns `true` when `text` names an object class, exact lowercase only.
pub(crate) fn is_class(text: &str) -> bool {
    matches!(
        text,
        "arc" | "arrow"
            | "box"
            | "circle"
            | "cylinder"
            | "dot"
            | "ellipse"
            | "file"
            | "line"
            | "move"
            | "oval"
            | "spline"
            | "text"
    )
}

/// Look up the word after a `.`, case-insensitively.
///
/// Returns the full dotted-accessor token kind, or `None` when the word is
/// not in the fixed table (which the caller reports as a lex error at the
/// dot).
pub(crate) fn dot_lookup(word: &str) -> Option<TokenKind> {
    use TokenKind::{DotEdge, DotEnd, DotLast, DotProp, DotStart, DotXy};

    let mut buf = [0u8; MAX_KEYWORD_LEN];
    let len = fold_case(word, &mut buf)?;
    let word = &buf[..len];

    match len {
        1 => match word {
            b"b" => Some(DotEdge(Compass::S)),
            b"c" => Some(DotEdge(Compass::C)),
            b"e" => Some(DotEdge(Compass::E)),
            b"n" => Some(DotEdge(Compass::N)),
            b"s" => Some(DotEdge(Compass::S)),
            b"t" => Some(DotEdge(Compass::N)),
            b"w" => Some(DotEdge(Compass::W)),
            b"x" => Some(DotXy(Axis::X)),
            b"y" => Some(DotXy(Axis::Y)),
            _ => None,
        },
        2 => match word {
            b"ht" => Some(DotProp(Prop::Height)),
            b"ne" => Some(DotEdge(Compass::Ne)),
            b"nw" => Some(DotEdge(Compass::Nw)),
            b"se" => Some(DotEdge(Compass::Se)),
            b"sw" => Some(DotEdge(Compass::Sw)),
            _ => None,
        },
        3 => match word {
            b"bot" => Some(DotEdge(Compass::S)),
            b"end" => Some(DotEnd),
            b"rad" => Some(DotProp(Prop::Radius)),
            b"top" => Some(DotEdge(Compass::N)),
            b"wid" => Some(DotProp(Prop::Width)),
            _ => None,
        },
        4 => match word {
            b"east" => Some(DotEdge(Compass::E)),
            b"fill" => Some(DotProp(Prop::Fill)),
            b"last" => Some(DotLast),
            b"left" => Some(DotEdge(Compass::W)),
            b"west" => Some(DotEdge(Compass::W)),
            _ => None,
        },
        5 => match word {
            b"color" => Some(DotProp(Prop::Color)),
            b"north" => Some(DotEdge(Compass::N)),
            b"right" => Some(DotEdge(Compass::E)),
            b"south" => Some(DotEdge(Compass::S)),
            b"start" => Some(DotStart),
            b"width" => Some(DotProp(Prop::Width)),
            _ => None,
        },
        6 => match word {
            b"bottom" => Some(DotEdge(Compass::S)),
            b"center" => Some(DotEdge(Compass::C)),
            b"height" => Some(DotProp(Prop::Height)),
            b"radius" => Some(DotProp(Prop::Radius)),
            _ => None,
        },
        8 => match word {
            b"diameter" => Some(DotProp(Prop::Diameter)),
            _ => None,
        },
        9 => match word {
            b"thickness" => Some(DotProp(Prop::Thickness)),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
