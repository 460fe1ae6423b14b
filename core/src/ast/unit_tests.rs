use super::*;
use crate::ast::builder::UnitBuilder;
use crate::ast::symbol::{Scope, ScopeKind, VarId};

#[test]
fn json_dump_round_trips_and_validates() {
    let unit = UnitBuilder::new("dump.cpp")
        .function("void", "f", &["double d"], |body| {
            body.code("d == 0.5 ;");
        })
        .build();

    let json = unit.to_json().unwrap();
    let loaded = AnalysisUnit::from_json(&json).unwrap();
    assert_eq!(loaded, unit);
}

#[test]
fn minimal_dump_uses_defaults() {
    let json = r#"{
        "files": ["a.c"],
        "tokens": [
            {"text": "return", "kind": "keyword", "line": 4},
            {"text": "errno", "kind": "name", "line": 4},
            {"text": ";", "kind": "other", "line": 4}
        ]
    }"#;
    let unit = AnalysisUnit::from_json(json).unwrap();
    assert_eq!(unit.tokens.len(), 3);
    assert!(unit.symbols.scopes.is_empty());
    assert_eq!(unit.location(TokenId(1)).line, 4);
    assert_eq!(unit.location(TokenId(1)).file, "a.c");
}

#[test]
fn dangling_token_reference_is_rejected() {
    let mut unit = UnitBuilder::new("bad.cpp").code("int x ;").build();
    unit.symbols
        .scopes
        .push(Scope::new(ScopeKind::Namespace, "std").with_class_def(TokenId(99)));

    let err = unit.validate().unwrap_err();
    assert!(matches!(err, CoreError::InvalidUnit(_)));
    assert!(err.to_string().contains("token 99"));
}

#[test]
fn unresolved_variable_link_is_tolerated() {
    let mut unit = UnitBuilder::new("t.cpp").code("x").build();
    if let Some(tok) = unit.tokens.get_mut(TokenId(0)) {
        tok.kind = TokenKind::Variable;
        tok.var_id = Some(VarId(7));
    }
    assert!(unit.validate().is_ok());
    assert!(unit.variable_of(TokenId(0)).is_none());
}

#[test]
fn location_of_missing_token_falls_back_to_main_file() {
    let unit = UnitBuilder::new("main.cpp").build();
    let loc = unit.location(TokenId(3));
    assert_eq!(loc.file, "main.cpp");
    assert_eq!(loc.line, 0);
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = AnalysisUnit::from_json("{ not json").unwrap_err();
    assert!(matches!(err, CoreError::Json(_)));
}
