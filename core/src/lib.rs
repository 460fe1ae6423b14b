// Seccheck Core Library
// 核心功能库，包含词法/符号视图、安全规则检查器和诊断输出

pub mod ast;
pub mod checks;
pub mod config;
pub mod loader;
pub mod report;
pub mod rules;

// 重新导出常用类型
pub use ast::{AnalysisUnit, Location, ScopeView, Token, TokenId, TokenKind, TokenList, UnitBuilder};
pub use checks::{Check, CheckRegistry, ComplexCopyingCheck, MiscellaneousCheck};
pub use config::{load_settings, Settings};
pub use report::{Collector, Diagnostic, DiagnosticSink, ErrorReporter, FilteredSink};
pub use rules::{catalog, RuleId, Severity};

pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum CoreError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("JSON error: {0}")]
        Json(#[from] serde_json::Error),

        #[error("YAML error: {0}")]
        Yaml(#[from] serde_yaml::Error),

        #[error("Invalid analysis unit: {0}")]
        InvalidUnit(String),

        #[error("Configuration error: {0}")]
        Config(String),
    }

    pub type Result<T> = std::result::Result<T, CoreError>;
}
