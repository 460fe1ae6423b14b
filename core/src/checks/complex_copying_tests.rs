use super::*;
use crate::ast::UnitBuilder;
use crate::report::{format_diagnostic, Diagnostic, DEFAULT_TEMPLATE};
use crate::rules::Severity;

fn check(unit: &AnalysisUnit) -> Vec<Diagnostic> {
    let mut sink = Vec::new();
    let mut reporter = ErrorReporter::new(unit, &mut sink);
    ComplexCopyingCheck::new().check_complex_parameters(unit, &mut reporter);
    sink
}

#[test]
fn vector_copying() {
    let unit = UnitBuilder::new("test.cpp")
        .function("void", "foo", &["stl :: vector < std :: string > p"], |body| {
            body.newline()
                .declare("stl :: vector < std :: string > a")
                .code("= p ;")
                .newline();
        })
        .build();

    let diagnostics = check(&unit);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Performance);
    assert_eq!(diagnostics[0].rule, RuleId::ComplexObjectCopying);
    assert_eq!(
        format_diagnostic(DEFAULT_TEMPLATE, &diagnostics[0]),
        "[test.cpp:1]: (performance) Complex objects copying in Function foo may slow down system performance.\n\
         Please use pointer or reference instead."
    );
}

#[test]
fn one_finding_per_qualifying_argument_anchored_at_the_function() {
    let unit = UnitBuilder::new("test.cpp")
        .function(
            "int",
            "merge",
            &[
                "std :: map < int , std :: list < int > > m",
                "int n",
                "std :: unordered_set < int > s",
            ],
            |body| {
                body.code("return n ;");
            },
        )
        .build();

    let diagnostics = check(&unit);
    assert_eq!(diagnostics.len(), 2);
    let anchor = unit.symbols.functions[0].token;
    assert!(diagnostics.iter().all(|d| d.anchor == anchor));
}

#[test]
fn references_and_pointers_are_exempt() {
    let unit = UnitBuilder::new("test.cpp")
        .function(
            "void",
            "f",
            &[
                "const std :: vector < int > & v",
                "std :: deque < int > * d",
                "std :: set < int > && s",
            ],
            |_| {},
        )
        .build();
    assert!(check(&unit).is_empty());
}

#[test]
fn bare_container_type_is_scanned() {
    let unit = UnitBuilder::new("test.cpp")
        .function("void", "f", &["vector v"], |_| {})
        .build();
    assert_eq!(check(&unit).len(), 1);
}

#[test]
fn every_container_name_triggers() {
    for name in crate::checks::classify::COMPLEX_CONTAINERS {
        let decl = format!("std :: {name} < int > c");
        let unit = UnitBuilder::new("test.cpp")
            .function("void", "f", &[decl.as_str()], |_| {})
            .build();
        assert_eq!(check(&unit).len(), 1, "{name}");
    }
}

#[test]
fn prototypes_and_plain_types_are_ignored() {
    let unit = UnitBuilder::new("test.cpp")
        .declare_function("void", "proto", &["std :: vector < int > v"])
        .function("void", "g", &["std :: string s", "int n", "my_vector m"], |_| {})
        .build();
    assert!(check(&unit).is_empty());
}

#[test]
fn unresolved_argument_is_skipped() {
    let mut unit = UnitBuilder::new("test.cpp")
        .function("void", "f", &["std :: vector < int > v"], |_| {})
        .build();
    unit.symbols.variables.clear();
    assert!(check(&unit).is_empty());
}

#[test]
fn local_containers_are_not_parameters() {
    let unit = UnitBuilder::new("test.cpp")
        .function("void", "f", &[], |body| {
            body.local("std :: vector < int > v");
        })
        .build();
    assert!(check(&unit).is_empty());
}
