// Report module - 诊断输出
// Diagnostic values, the sink interface the checks write to, and output formats.

pub mod format;
pub mod sink;

use serde::{Deserialize, Serialize};
use sha1::Digest;

use crate::ast::{AnalysisUnit, Location, TokenId};
use crate::rules::{RuleId, Severity};

pub use format::{format_diagnostic, json_report, render_text, Finding, DEFAULT_TEMPLATE};
pub use sink::{Collector, FilteredSink};

/// One finding produced by a check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    pub rule: RuleId,
    pub severity: Severity,
    pub anchor: TokenId,
    pub location: Location,
    /// Summary line, `\n`, then the detailed explanation.
    pub message: String,
}

impl Diagnostic {
    pub fn short_message(&self) -> &str {
        self.message
            .split_once('\n')
            .map_or(self.message.as_str(), |(summary, _)| summary)
    }

    pub fn verbose_message(&self) -> &str {
        self.message
            .split_once('\n')
            .map_or(self.message.as_str(), |(_, details)| details)
    }

    /// Stable hash of rule, location and message.
    pub fn fingerprint(&self) -> String {
        let mut hasher = sha1::Sha1::new();
        hasher.update(self.rule.as_str().as_bytes());
        hasher.update([0u8]);
        hasher.update(self.location.file.as_bytes());
        hasher.update([0u8]);
        hasher.update(self.location.line.to_le_bytes());
        hasher.update(self.location.column.to_le_bytes());
        hasher.update(self.message.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

/// Receiver of diagnostics. Delivery, deduplication and formatting are its business.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// Turns (anchor token, rule, message) into a [`Diagnostic`] and hands it to the sink.
pub struct ErrorReporter<'a> {
    unit: &'a AnalysisUnit,
    sink: &'a mut dyn DiagnosticSink,
    emitted: usize,
}

impl<'a> ErrorReporter<'a> {
    pub fn new(unit: &'a AnalysisUnit, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            unit,
            sink,
            emitted: 0,
        }
    }

    pub fn unit(&self) -> &'a AnalysisUnit {
        self.unit
    }

    pub fn report_error(&mut self, anchor: TokenId, rule: RuleId, message: impl Into<String>) {
        let location = self.unit.location(anchor);
        tracing::trace!(
            rule = rule.as_str(),
            file = %location.file,
            line = location.line,
            "finding"
        );
        self.sink.emit(Diagnostic {
            rule,
            severity: rule.severity(),
            anchor,
            location,
            message: message.into(),
        });
        self.emitted += 1;
    }

    /// Number of diagnostics emitted through this reporter.
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
