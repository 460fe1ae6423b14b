use serde::{Deserialize, Serialize};

use super::token::TokenId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VarId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeId(pub usize);

/// A declared variable as resolved by the symbol pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub id: VarId,
    pub name_token: TokenId,
    /// First token of the declared type.
    pub type_start: TokenId,
    /// Last token of the declared type (inclusive), without `&`/`*` declarators.
    pub type_end: TokenId,
    #[serde(default)]
    pub is_reference: bool,
    #[serde(default)]
    pub is_pointer: bool,
    #[serde(default)]
    pub is_argument: bool,
}

impl Variable {
    pub fn new(id: VarId, name_token: TokenId, type_start: TokenId, type_end: TokenId) -> Self {
        Self {
            id,
            name_token,
            type_start,
            type_end,
            is_reference: false,
            is_pointer: false,
            is_argument: false,
        }
    }

    pub fn with_reference(mut self, is_reference: bool) -> Self {
        self.is_reference = is_reference;
        self
    }

    pub fn with_pointer(mut self, is_pointer: bool) -> Self {
        self.is_pointer = is_pointer;
        self
    }

    pub fn with_argument(mut self, is_argument: bool) -> Self {
        self.is_argument = is_argument;
        self
    }

    pub fn is_ref_or_pointer(&self) -> bool {
        self.is_reference || self.is_pointer
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    /// Token used as the anchor for diagnostics about this function.
    pub token: TokenId,
    #[serde(default)]
    pub args: Vec<VarId>,
    #[serde(default)]
    pub has_body: bool,
}

impl Function {
    pub fn new(name: impl Into<String>, token: TokenId) -> Self {
        Self {
            name: name.into(),
            token,
            args: Vec::new(),
            has_body: false,
        }
    }

    pub fn with_args(mut self, args: Vec<VarId>) -> Self {
        self.args = args;
        self
    }

    pub fn with_body(mut self, has_body: bool) -> Self {
        self.has_body = has_body;
        self
    }

    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    pub fn argument(&self, index: usize) -> Option<VarId> {
        self.args.get(index).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeKind {
    Global,
    Namespace,
    Class,
    Struct,
    Union,
    Function,
    If,
    Else,
    For,
    While,
    Do,
    Switch,
    Try,
    Catch,
    Unconditional,
    Lambda,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scope {
    pub kind: ScopeKind,
    #[serde(default)]
    pub name: String,
    /// Token that introduces the scope (`namespace`, the function name, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_def: Option<TokenId>,
    /// Opening `{`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_start: Option<TokenId>,
    /// Closing `}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_end: Option<TokenId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<FunctionId>,
}

impl Scope {
    pub fn new(kind: ScopeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            class_def: None,
            body_start: None,
            body_end: None,
            function: None,
        }
    }

    pub fn with_class_def(mut self, token: TokenId) -> Self {
        self.class_def = Some(token);
        self
    }

    pub fn with_body(mut self, start: TokenId, end: TokenId) -> Self {
        self.body_start = Some(start);
        self.body_end = Some(end);
        self
    }

    pub fn with_function(mut self, function: FunctionId) -> Self {
        self.function = Some(function);
        self
    }

    pub fn kind_to_string(&self) -> String {
        match self.kind {
            ScopeKind::Global => "global",
            ScopeKind::Namespace => "namespace",
            ScopeKind::Class => "class",
            ScopeKind::Struct => "struct",
            ScopeKind::Union => "union",
            ScopeKind::Function => "function",
            ScopeKind::If => "if",
            ScopeKind::Else => "else",
            ScopeKind::For => "for",
            ScopeKind::While => "while",
            ScopeKind::Do => "do",
            ScopeKind::Switch => "switch",
            ScopeKind::Try => "try",
            ScopeKind::Catch => "catch",
            ScopeKind::Unconditional => "unconditional",
            ScopeKind::Lambda => "lambda",
        }
        .to_string()
    }
}

/// Variables, functions and scopes of one translation unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolDatabase {
    #[serde(default)]
    pub variables: Vec<Variable>,
    #[serde(default)]
    pub functions: Vec<Function>,
    #[serde(default)]
    pub scopes: Vec<Scope>,
}

impl SymbolDatabase {
    pub fn variable(&self, id: VarId) -> Option<&Variable> {
        self.variables.iter().find(|var| var.id == id)
    }

    pub fn function(&self, id: FunctionId) -> Option<&Function> {
        self.functions.get(id.0)
    }

    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.0)
    }

    /// Scopes of kind [`ScopeKind::Function`], in declaration order.
    pub fn function_scopes(&self) -> impl Iterator<Item = (ScopeId, &Scope)> {
        self.scopes
            .iter()
            .enumerate()
            .filter(|(_, scope)| scope.kind == ScopeKind::Function)
            .map(|(index, scope)| (ScopeId(index), scope))
    }

    /// Function attached to a scope, if the scope is a function scope.
    pub fn scope_function(&self, scope: &Scope) -> Option<&Function> {
        scope.function.and_then(|id| self.function(id))
    }

    pub fn next_var_id(&self) -> VarId {
        let max = self.variables.iter().map(|var| var.id.0).max().unwrap_or(0);
        VarId(max + 1)
    }
}
