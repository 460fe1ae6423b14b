use super::classify::is_complex_container_type_name;
use super::Check;
use crate::ast::{AnalysisUnit, Function};
use crate::report::ErrorReporter;
use crate::rules::{complex_copying_message, RuleId};

/// Flags standard containers passed by value into functions.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComplexCopyingCheck;

impl ComplexCopyingCheck {
    pub fn new() -> Self {
        Self
    }

    /// One pass over every function scope.
    pub fn check_complex_parameters(&self, unit: &AnalysisUnit, reporter: &mut ErrorReporter<'_>) {
        for (_, scope) in unit.symbols.function_scopes() {
            if let Some(function) = unit.symbols.scope_function(scope) {
                self.check_arguments(unit, function, reporter);
            }
        }
    }

    /// At most one finding per by-value argument, all anchored at the function.
    fn check_arguments(&self, unit: &AnalysisUnit, function: &Function, reporter: &mut ErrorReporter<'_>) {
        if !function.has_body {
            return;
        }

        for index in 0..function.arg_count() {
            let Some(var) = function.argument(index).and_then(|id| unit.symbols.variable(id)) else {
                continue;
            };
            if var.is_ref_or_pointer() {
                continue;
            }

            let copies_container = unit
                .tokens
                .range(var.type_start, var.type_end)
                .any(|(_, tok)| is_complex_container_type_name(&tok.text));
            if copies_container {
                reporter.report_error(
                    function.token,
                    RuleId::ComplexObjectCopying,
                    complex_copying_message(&function.name),
                );
            }
        }
    }
}

impl Check for ComplexCopyingCheck {
    fn name(&self) -> &'static str {
        "Complex object copying"
    }

    fn rules(&self) -> &'static [RuleId] {
        &[RuleId::ComplexObjectCopying]
    }

    fn run_checks(&self, unit: &AnalysisUnit, reporter: &mut ErrorReporter<'_>) {
        self.check_complex_parameters(unit, reporter);
    }
}

#[cfg(test)]
#[path = "complex_copying_tests.rs"]
mod tests;
