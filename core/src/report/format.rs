use serde::{Deserialize, Serialize};

use super::Diagnostic;
use crate::error::Result;

/// `[test.cpp:1]: (performance) Complex objects copying ...`
pub const DEFAULT_TEMPLATE: &str = "[{file}:{line}]: ({severity}) {message}";

/// Expand a text template for one diagnostic.
///
/// Placeholders: `{file}`, `{line}`, `{column}`, `{severity}`, `{id}`,
/// `{message}` (full text), `{summary}` (first line only).
pub fn format_diagnostic(template: &str, diagnostic: &Diagnostic) -> String {
    let mut out = String::with_capacity(template.len() + diagnostic.message.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let key = &after[..close];
        match key {
            "file" => out.push_str(&diagnostic.location.file),
            "line" => out.push_str(&diagnostic.location.line.to_string()),
            "column" => out.push_str(&diagnostic.location.column.to_string()),
            "severity" => out.push_str(diagnostic.severity.as_str()),
            "id" => out.push_str(diagnostic.rule.as_str()),
            "message" => out.push_str(&diagnostic.message),
            "summary" => out.push_str(diagnostic.short_message()),
            _ => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

pub fn render_text(diagnostics: &[Diagnostic], template: &str) -> String {
    diagnostics
        .iter()
        .map(|diagnostic| format_diagnostic(template, diagnostic))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Flat record used in JSON reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub finding_id: String,
    pub rule_id: String,
    pub severity: String,
    pub file_path: String,
    pub line: u32,
    pub column: u32,
    pub summary: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl From<&Diagnostic> for Finding {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            finding_id: diagnostic.fingerprint(),
            rule_id: diagnostic.rule.as_str().to_string(),
            severity: diagnostic.severity.as_str().to_string(),
            file_path: diagnostic.location.file.clone(),
            line: diagnostic.location.line,
            column: diagnostic.location.column,
            summary: diagnostic.short_message().to_string(),
            description: diagnostic.verbose_message().to_string(),
            reference: diagnostic.rule.reference().map(str::to_string),
        }
    }
}

/// Pretty JSON report with run metadata and one record per diagnostic.
pub fn json_report(diagnostics: &[Diagnostic]) -> Result<String> {
    let findings: Vec<Finding> = diagnostics.iter().map(Finding::from).collect();
    let report = serde_json::json!({
        "metadata": {
            "tool": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "finding_count": findings.len(),
        },
        "findings": findings,
    });
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
