use seccheck_core::loader::{load_unit, load_units_from_dir};
use seccheck_core::report::{json_report, render_text};
use seccheck_core::{
    catalog, AnalysisUnit, CheckRegistry, RuleId, Settings, Severity, UnitBuilder,
};
use std::fs;
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn mixed_unit(file: &str) -> AnalysisUnit {
    UnitBuilder::new(file)
        .function("void", "foo", &["stl :: vector < std :: string > p"], |body| {
            body.newline()
                .declare("stl :: vector < std :: string > a")
                .code("= p ;")
                .newline();
        })
        .newline()
        .function("int", "bar", &["char c", "double d", "time_t t", "int flags"], |body| {
            body.newline()
                .code("if ( isalpha ( c ) ) { }")
                .newline()
                .code("if ( d == 0.0 ) { }")
                .newline()
                .code("t = t + 1 ;")
                .newline()
                .code("flags = flags & 2 ;")
                .newline()
                .code("return errno ;")
                .newline();
        })
        .newline()
        .namespace("std", |ns| ns.code("int extra ;"))
        .build()
}

#[test]
fn complex_copying_text_output() {
    init_tracing();
    let unit = UnitBuilder::new("test.cpp")
        .function("void", "foo", &["stl :: vector < std :: string > p"], |body| {
            body.newline()
                .declare("stl :: vector < std :: string > a")
                .code("= p ;")
                .newline();
        })
        .build();

    let settings = Settings::default();
    let diagnostics = CheckRegistry::with_default_checks().check_unit(&unit, &settings);
    assert_eq!(
        render_text(&diagnostics, &settings.template),
        "[test.cpp:1]: (performance) Complex objects copying in Function foo may slow down system performance.\n\
         Please use pointer or reference instead."
    );
}

#[test]
fn every_rule_fires_on_the_mixed_unit() {
    init_tracing();
    let unit = mixed_unit("mixed.cpp");
    let diagnostics = CheckRegistry::with_default_checks().check_unit(&unit, &Settings::default());

    let mut rules: Vec<RuleId> = diagnostics.iter().map(|d| d.rule).collect();
    rules.sort();
    rules.dedup();
    let mut expected: Vec<RuleId> = RuleId::ALL
        .into_iter()
        .filter(|rule| *rule != RuleId::FloatLoopCounter)
        .collect();
    expected.sort();
    assert_eq!(rules, expected);
}

#[test]
fn performance_only_output() {
    let unit = mixed_unit("mixed.cpp");
    let settings = Settings::with_enabled(&[Severity::Performance]);
    let diagnostics = CheckRegistry::with_default_checks().check_unit(&unit, &settings);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule, RuleId::ComplexObjectCopying);
}

#[test]
fn dumps_round_trip_through_the_loader() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    for name in ["one", "two", "three"] {
        let unit = mixed_unit(&format!("{name}.cpp"));
        fs::write(dir.path().join(format!("{name}.json")), unit.to_json().unwrap()).unwrap();
    }

    let single = load_unit(dir.path().join("one.json")).unwrap();
    assert_eq!(single, mixed_unit("one.cpp"));

    let units = load_units_from_dir(dir.path()).unwrap();
    let registry = CheckRegistry::with_default_checks();
    let batch = registry.check_units(&units, &Settings::default());

    let sequential: Vec<_> = units
        .iter()
        .flat_map(|unit| registry.check_unit(unit, &Settings::default()))
        .collect();
    assert_eq!(batch, sequential);
    assert_eq!(batch.first().map(|d| d.location.file.as_str()), Some("one.cpp"));
}

#[test]
fn json_report_lists_every_finding() {
    let unit = mixed_unit("mixed.cpp");
    let diagnostics = CheckRegistry::with_default_checks().check_unit(&unit, &Settings::default());
    let report: serde_json::Value = serde_json::from_str(&json_report(&diagnostics).unwrap()).unwrap();

    let findings = report["findings"].as_array().unwrap();
    assert_eq!(findings.len(), diagnostics.len());
    assert!(findings.iter().all(|f| f["file_path"] == "mixed.cpp"));
}

#[test]
fn catalog_matches_the_registry() {
    let registry = CheckRegistry::with_default_checks();
    let ids: Vec<RuleId> = catalog().rules.iter().map(|rule| rule.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(sorted, registry.rules());
}
