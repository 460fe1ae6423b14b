use std::collections::HashSet;

use super::{Diagnostic, DiagnosticSink};
use crate::config::Settings;

/// Keeps every diagnostic in emission order.
#[derive(Debug, Default, Clone)]
pub struct Collector {
    diagnostics: Vec<Diagnostic>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl DiagnosticSink for Collector {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Applies the enable/suppress/deduplicate settings before forwarding to `inner`.
///
/// This is the only place findings are gated; the checks themselves always emit.
#[derive(Debug)]
pub struct FilteredSink<S> {
    inner: S,
    settings: Settings,
    seen: HashSet<String>,
    dropped: usize,
}

impl<S: DiagnosticSink> FilteredSink<S> {
    pub fn new(inner: S, settings: &Settings) -> Self {
        Self {
            inner,
            settings: settings.clone(),
            seen: HashSet::new(),
            dropped: 0,
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Diagnostics rejected by the filter so far.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl<S: DiagnosticSink> DiagnosticSink for FilteredSink<S> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        if !self.settings.allows(&diagnostic) {
            self.dropped += 1;
            return;
        }
        if self.settings.deduplicate && !self.seen.insert(diagnostic.fingerprint()) {
            self.dropped += 1;
            return;
        }
        self.inner.emit(diagnostic);
    }
}
