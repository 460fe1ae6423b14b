use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CoreError, Result};
use crate::report::{Diagnostic, DEFAULT_TEMPLATE};
use crate::rules::{RuleId, Severity};

/// Drops findings of one rule, everywhere or in a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suppression {
    pub rule: RuleId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Suppression {
    pub fn matches(&self, diagnostic: &Diagnostic) -> bool {
        self.rule == diagnostic.rule
            && self
                .file
                .as_deref()
                .map_or(true, |file| file == diagnostic.location.file)
    }
}

/// Output-side settings. Read by [`crate::report::FilteredSink`], never by the checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Severities that reach the output.
    pub enabled: Vec<Severity>,
    pub suppressions: Vec<Suppression>,
    /// Drop findings whose fingerprint was already emitted.
    pub deduplicate: bool,
    /// Text template, see [`crate::report::format_diagnostic`].
    pub template: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: Severity::ALL.to_vec(),
            suppressions: Vec::new(),
            deduplicate: false,
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl Settings {
    /// Settings with only the given severities enabled.
    pub fn with_enabled(severities: &[Severity]) -> Self {
        Self {
            enabled: severities.to_vec(),
            ..Self::default()
        }
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.enabled.contains(&severity)
    }

    pub fn allows(&self, diagnostic: &Diagnostic) -> bool {
        self.is_enabled(diagnostic.severity)
            && !self
                .suppressions
                .iter()
                .any(|suppression| suppression.matches(diagnostic))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Load settings from a `.yaml`/`.yml` or `.json` file.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    let content = fs::read_to_string(path)?;
    let settings = match extension.as_str() {
        "yaml" | "yml" => Settings::from_yaml(&content)?,
        "json" => Settings::from_json(&content)?,
        other => {
            return Err(CoreError::Config(format!(
                "unsupported settings format '{}' for {}",
                other,
                path.display()
            )))
        }
    };

    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
