use super::*;
use crate::token::{Axis, BuiltinFn, Compass, Prop, TokenKind};

// === Reserved words ===

#[test]
fn keywords_are_case_insensitive() {
    assert_eq!(lookup("up"), Some(TokenKind::Up));
    assert_eq!(lookup("Up"), Some(TokenKind::Up));
    assert_eq!(lookup("UP"), Some(TokenKind::Up));
    assert_eq!(lookup("hEaDiNg"), Some(TokenKind::Heading));
}

#[test]
fn aliases_share_a_kind() {
    assert_eq!(lookup("ht"), Some(TokenKind::Height));
    assert_eq!(lookup("height"), Some(TokenKind::Height));
    assert_eq!(lookup("wid"), Some(TokenKind::Width));
    assert_eq!(lookup("width"), Some(TokenKind::Width));
    assert_eq!(lookup("rad"), Some(TokenKind::Radius));
    assert_eq!(lookup("bot"), Some(TokenKind::Bottom));
    assert_eq!(lookup("invisible"), Some(TokenKind::Invis));
    assert_eq!(lookup("previous"), Some(TokenKind::Last));
}

#[test]
fn compass_words_map_to_edge_points() {
    assert_eq!(lookup("n"), Some(TokenKind::EdgePt(Compass::N)));
    assert_eq!(lookup("north"), Some(TokenKind::EdgePt(Compass::N)));
    assert_eq!(lookup("NE"), Some(TokenKind::EdgePt(Compass::Ne)));
    assert_eq!(lookup("c"), Some(TokenKind::EdgePt(Compass::C)));
    assert_eq!(lookup("West"), Some(TokenKind::EdgePt(Compass::W)));
}

#[test]
fn builtin_functions() {
    assert_eq!(lookup("abs"), Some(TokenKind::Func1(BuiltinFn::Abs)));
    assert_eq!(lookup("sqrt"), Some(TokenKind::Func1(BuiltinFn::Sqrt)));
    assert_eq!(lookup("max"), Some(TokenKind::Func2(BuiltinFn::Max)));
    assert_eq!(lookup("min"), Some(TokenKind::Func2(BuiltinFn::Min)));
    assert_eq!(lookup("dist"), Some(TokenKind::Dist));
}

#[test]
fn selector_words() {
    assert_eq!(lookup("first"), Some(TokenKind::Nth));
    assert_eq!(lookup("nth"), Some(TokenKind::Nth));
    assert_eq!(lookup("last"), Some(TokenKind::Last));
    assert_eq!(lookup("vertex"), Some(TokenKind::Vertex));
    assert_eq!(lookup("the"), Some(TokenKind::The));
}

#[test]
fn spelled_arrowheads() {
    assert_eq!(lookup("larrow"), Some(TokenKind::Larrow));
    assert_eq!(lookup("rarrow"), Some(TokenKind::Rarrow));
    assert_eq!(lookup("lrarrow"), Some(TokenKind::Lrarrow));
}

#[test]
fn non_keywords_miss() {
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("boxes"), None);
    assert_eq!(lookup("Origin"), None);
    assert_eq!(lookup("x1"), None); // digit: cannot be a keyword
    assert_eq!(lookup("_up"), None); // underscore: cannot be a keyword
    assert_eq!(lookup("thicknesses"), None); // too long
}

#[test]
fn class_names_are_not_reserved() {
    // Classes classify separately, exact lowercase only.
    assert_eq!(lookup("box"), None);
    assert_eq!(lookup("circle"), None);
    assert_eq!(lookup("arrow"), None);
}

// === Class names ===

#[test]
fn class_table_exact_lowercase() {
    assert!(is_class("box"));
    assert!(is_class("cylinder"));
    assert!(is_class("spline"));
    assert!(!is_class("Box"));
    assert!(!is_class("BOX"));
    assert!(!is_class("boxes"));
}

// === Dotted accessors ===

#[test]
fn dot_edges() {
    assert_eq!(dot_lookup("nw"), Some(TokenKind::DotEdge(Compass::Nw)));
    assert_eq!(dot_lookup("NW"), Some(TokenKind::DotEdge(Compass::Nw)));
    assert_eq!(dot_lookup("north"), Some(TokenKind::DotEdge(Compass::N)));
    assert_eq!(dot_lookup("t"), Some(TokenKind::DotEdge(Compass::N)));
    assert_eq!(dot_lookup("b"), Some(TokenKind::DotEdge(Compass::S)));
    assert_eq!(dot_lookup("left"), Some(TokenKind::DotEdge(Compass::W)));
    assert_eq!(dot_lookup("right"), Some(TokenKind::DotEdge(Compass::E)));
    assert_eq!(dot_lookup("center"), Some(TokenKind::DotEdge(Compass::C)));
}

#[test]
fn dot_start_end_last() {
    assert_eq!(dot_lookup("start"), Some(TokenKind::DotStart));
    assert_eq!(dot_lookup("end"), Some(TokenKind::DotEnd));
    assert_eq!(dot_lookup("last"), Some(TokenKind::DotLast));
}

#[test]
fn dot_coordinates() {
    assert_eq!(dot_lookup("x"), Some(TokenKind::DotXy(Axis::X)));
    assert_eq!(dot_lookup("Y"), Some(TokenKind::DotXy(Axis::Y)));
}

#[test]
fn dot_properties() {
    assert_eq!(dot_lookup("width"), Some(TokenKind::DotProp(Prop::Width)));
    assert_eq!(dot_lookup("wid"), Some(TokenKind::DotProp(Prop::Width)));
    assert_eq!(dot_lookup("ht"), Some(TokenKind::DotProp(Prop::Height)));
    assert_eq!(
        dot_lookup("thickness"),
        Some(TokenKind::DotProp(Prop::Thickness))
    );
    assert_eq!(dot_lookup("fill"), Some(TokenKind::DotProp(Prop::Fill)));
}

#[test]
fn dot_misses() {
    assert_eq!(dot_lookup("middle"), None);
    assert_eq!(dot_lookup("up"), None); // direction word, not an accessor
    assert_eq!(dot_lookup(""), None);
}
