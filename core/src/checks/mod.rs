// Checks module - 检查器模块
// 定义检查器的核心接口，以及内置的两组规则

pub mod classify;
pub mod complex_copying;
pub mod miscellaneous;
pub mod registry;

use crate::ast::AnalysisUnit;
use crate::report::ErrorReporter;
use crate::rules::RuleId;

pub use complex_copying::ComplexCopyingCheck;
pub use miscellaneous::MiscellaneousCheck;
pub use registry::CheckRegistry;

/// A group of rules run over one analysis unit.
///
/// Implementations hold no per-run state: running the same check twice over
/// the same unit emits the same diagnostics in the same order.
pub trait Check: Send + Sync {
    fn name(&self) -> &'static str;

    /// Rules this check may emit.
    fn rules(&self) -> &'static [RuleId];

    fn run_checks(&self, unit: &AnalysisUnit, reporter: &mut ErrorReporter<'_>);
}
