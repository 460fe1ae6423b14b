use rayon::prelude::*;
use std::fmt;
use std::sync::Arc;

use super::{Check, ComplexCopyingCheck, MiscellaneousCheck};
use crate::ast::AnalysisUnit;
use crate::config::Settings;
use crate::report::{Collector, Diagnostic, DiagnosticSink, ErrorReporter, FilteredSink};
use crate::rules::RuleId;

/// The set of checks a host runs, in registration order.
#[derive(Clone, Default)]
pub struct CheckRegistry {
    checks: Vec<Arc<dyn Check>>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Registry holding every built-in check.
    pub fn with_default_checks() -> Self {
        let mut registry = Self::new();
        registry.register_check(ComplexCopyingCheck::new());
        registry.register_check(MiscellaneousCheck::new());
        registry
    }

    pub fn register_check<C: Check + 'static>(&mut self, check: C) {
        self.checks.push(Arc::new(check));
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|check| check.name()).collect()
    }

    /// Rules the registered checks can emit, without duplicates.
    pub fn rules(&self) -> Vec<RuleId> {
        let mut rules: Vec<RuleId> = self
            .checks
            .iter()
            .flat_map(|check| check.rules().iter().copied())
            .collect();
        rules.sort();
        rules.dedup();
        rules
    }

    /// Run every check over `unit`; returns how many diagnostics were emitted.
    pub fn run(&self, unit: &AnalysisUnit, sink: &mut dyn DiagnosticSink) -> usize {
        let mut reporter = ErrorReporter::new(unit, sink);
        for check in &self.checks {
            let before = reporter.emitted();
            check.run_checks(unit, &mut reporter);
            tracing::debug!(
                check = check.name(),
                file = unit.file_name(),
                findings = reporter.emitted() - before,
                "check finished"
            );
        }
        reporter.emitted()
    }

    /// Run over one unit and collect what passes `settings`.
    pub fn check_unit(&self, unit: &AnalysisUnit, settings: &Settings) -> Vec<Diagnostic> {
        let mut sink = FilteredSink::new(Collector::new(), settings);
        self.run(unit, &mut sink);
        if sink.dropped() > 0 {
            tracing::debug!(
                file = unit.file_name(),
                dropped = sink.dropped(),
                "findings filtered by settings"
            );
        }
        sink.into_inner().into_diagnostics()
    }

    /// Evaluate independent units in parallel. Output keeps the input order.
    pub fn check_units(&self, units: &[AnalysisUnit], settings: &Settings) -> Vec<Diagnostic> {
        let per_unit: Vec<Vec<Diagnostic>> = units
            .par_iter()
            .map(|unit| self.check_unit(unit, settings))
            .collect();

        let diagnostics: Vec<Diagnostic> = per_unit.into_iter().flatten().collect();
        tracing::debug!(
            units = units.len(),
            findings = diagnostics.len(),
            "batch finished"
        );
        diagnostics
    }
}

impl fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckRegistry")
            .field("checks", &self.check_names())
            .finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
