pub mod builder;
pub mod pattern;
pub mod symbol;
pub mod token;
pub mod unit;
pub mod view;

pub use builder::{BodyBuilder, UnitBuilder};
pub use pattern::{Matcher, TokenPattern};
pub use symbol::{Function, FunctionId, Scope, ScopeId, ScopeKind, SymbolDatabase, VarId, Variable};
pub use token::{Token, TokenId, TokenKind, TokenList};
pub use unit::{AnalysisUnit, Location};
pub use view::ScopeView;
