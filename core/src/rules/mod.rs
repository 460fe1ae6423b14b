pub mod model;

pub use model::{catalog, complex_copying_message, Rule, RuleId, RuleSet, Severity};
