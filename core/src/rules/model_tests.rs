use super::*;

#[test]
fn identifiers_are_stable() {
    let ids: Vec<_> = RuleId::ALL.iter().map(|rule| rule.as_str()).collect();
    assert_eq!(
        ids,
        [
            "complexObjectCopying",
            "FloatEqualsError",
            "time_tArithmeticError",
            "SignedBitoperError",
            "SignedCharError",
            "FunctionReturnErrnoError",
            "FloatNumberAsLoopCounterError",
            "ModifyStdNamespaceError",
        ]
    );
}

#[test]
fn serde_names_match_identifiers() {
    for rule in RuleId::ALL {
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, format!("\"{}\"", rule.as_str()));
        assert_eq!(RuleId::from_id(rule.as_str()), Some(rule));
    }
    assert_eq!(RuleId::from_id("nope"), None);
}

#[test]
fn only_copying_is_a_performance_finding() {
    for rule in RuleId::ALL {
        let expected = if rule == RuleId::ComplexObjectCopying {
            Severity::Performance
        } else {
            Severity::Warning
        };
        assert_eq!(rule.severity(), expected, "{rule}");
    }
}

#[test]
fn messages_have_summary_and_details() {
    for rule in RuleId::ALL {
        let (summary, details) = rule.message().split_once('\n').unwrap();
        assert_eq!(rule.summary(), summary);
        assert!(!details.is_empty());
    }
}

#[test]
fn complex_copying_message_names_the_function() {
    assert_eq!(
        complex_copying_message("foo"),
        "Complex objects copying in Function foo may slow down system performance.\n\
         Please use pointer or reference instead."
    );
}

#[test]
fn catalog_lists_every_rule_and_serializes_to_yaml() {
    let set = catalog();
    assert_eq!(set.name, "seccheck-core");
    assert_eq!(set.rules.len(), RuleId::ALL.len());

    let signed_char = set
        .rules
        .iter()
        .find(|rule| rule.id == RuleId::SignedChar)
        .unwrap();
    assert_eq!(signed_char.reference.as_deref(), Some("STR37-C"));

    let yaml = serde_yaml::to_string(&set).unwrap();
    let back: RuleSet = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, set);
}

#[test]
fn severity_parses_lowercase() {
    let severity: Severity = serde_yaml::from_str("performance").unwrap();
    assert_eq!(severity, Severity::Performance);
    assert_eq!(Severity::Information.to_string(), "information");
}
