use super::*;
use crate::ast::{TokenId, UnitBuilder};

fn find(unit: &AnalysisUnit, text: &str) -> TokenId {
    unit.tokens
        .iter()
        .filter(|(_, tok)| tok.text == text)
        .map(|(id, _)| id)
        .last()
        .unwrap()
}

#[test]
fn container_names_are_exact() {
    for name in COMPLEX_CONTAINERS {
        assert!(is_complex_container_type_name(name), "{name}");
    }
    assert!(!is_complex_container_type_name("Vector"));
    assert!(!is_complex_container_type_name("std::vector"));
    assert!(!is_complex_container_type_name("string"));
    assert!(!is_complex_container_type_name("bitset"));
}

#[test]
fn floating_and_time_names() {
    assert!(is_floating_type_name("float"));
    assert!(is_floating_type_name("double"));
    assert!(is_floating_type_name("long double"));
    assert!(!is_floating_type_name("int"));
    assert!(!is_floating_type_name("Double"));

    assert!(is_time_value_type_name("time_t"));
    assert!(!is_time_value_type_name("clock_t"));
}

#[test]
fn declared_type_name_reads_the_token_before_the_name() {
    let unit = UnitBuilder::new("t.cpp")
        .global("long double a")
        .global("double b")
        .global("std :: time_t c")
        .global("double * p")
        .build();
    let vars = &unit.symbols.variables;

    assert_eq!(declared_type_name(&unit, &vars[0]), Some("long double"));
    assert_eq!(declared_type_name(&unit, &vars[1]), Some("double"));
    assert_eq!(declared_type_name(&unit, &vars[2]), Some("time_t"));
    // Pointers are not floating variables.
    assert_eq!(declared_type_name(&unit, &vars[3]), Some("*"));
}

#[test]
fn unsigned_comes_from_the_type_end_token() {
    let unit = UnitBuilder::new("t.cpp")
        .global("unsigned int u")
        .global("int s")
        .global("signed char c")
        .build();
    let vars = &unit.symbols.variables;

    assert!(is_unsigned_variable(&unit, &vars[0]));
    assert!(!is_signed_char_variable(&unit, &vars[0]));
    assert!(!is_unsigned_variable(&unit, &vars[1]));
    assert!(is_signed_char_variable(&unit, &vars[2]));
}

#[test]
fn token_predicates_need_a_variable_token() {
    let unit = UnitBuilder::new("t.cpp")
        .global("double d")
        .global("time_t t")
        .global("unsigned u")
        .code("d t u 3 other")
        .build();
    let view = ScopeView::whole(&unit).unwrap();

    let d = find(&unit, "d");
    let t = find(&unit, "t");
    let u = find(&unit, "u");
    let three = find(&unit, "3");
    let other = find(&unit, "other");

    assert!(is_float_variable(&view, d));
    assert!(!is_float_variable(&view, t));
    assert!(is_time_variable(&view, t));
    assert!(is_confirmed_unsigned(&view, u));
    assert!(!is_confirmed_unsigned(&view, three));

    assert!(is_signed_char_token(&view, d));
    assert!(!is_signed_char_token(&view, u));
    assert!(!is_signed_char_token(&view, other));

    assert!(is_number(&view, three));
    assert!(is_number_or_variable(&view, three));
    assert!(is_number_or_variable(&view, d));
    assert!(!is_number_or_variable(&view, other));
}

#[test]
fn unresolved_variable_is_not_float_but_counts_as_signed() {
    let mut unit = UnitBuilder::new("t.cpp").code("ghost").build();
    if let Some(tok) = unit.tokens.get_mut(TokenId(0)) {
        tok.kind = TokenKind::Variable;
        tok.var_id = Some(crate::ast::VarId(42));
    }
    let view = ScopeView::whole(&unit).unwrap();

    assert!(!is_float_variable(&view, TokenId(0)));
    assert!(!is_time_variable(&view, TokenId(0)));
    assert!(!is_confirmed_unsigned(&view, TokenId(0)));
    assert!(is_signed_char_token(&view, TokenId(0)));
}
