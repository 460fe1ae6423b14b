use serde::{Deserialize, Serialize};

use super::symbol::{ScopeId, VarId};

/// Index of a token inside a [`TokenList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(pub usize);

impl TokenId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Coarse lexical category assigned by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Variable,
    Type,
    Function,
    Keyword,
    Name,
    Number,
    String,
    Char,
    Boolean,
    Literal,
    ArithmeticalOp,
    ComparisonOp,
    AssignmentOp,
    LogicalOp,
    BitOp,
    IncDecOp,
    ExtendedOp,
    Other,
}

impl TokenKind {
    /// Identifier-like tokens (what a `%name%` placeholder would accept).
    pub fn is_name(self) -> bool {
        matches!(
            self,
            Self::Variable | Self::Type | Self::Function | Self::Keyword | Self::Name | Self::Boolean
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::Number | Self::String | Self::Char | Self::Boolean | Self::Literal
        )
    }

    pub fn is_operator(self) -> bool {
        matches!(
            self,
            Self::ArithmeticalOp
                | Self::ComparisonOp
                | Self::AssignmentOp
                | Self::LogicalOp
                | Self::BitOp
                | Self::IncDecOp
                | Self::ExtendedOp
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub var_id: Option<VarId>,
    /// Set on the `{`/`}` tokens that open or close a scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<ScopeId>,
    #[serde(default)]
    pub file: usize,
    pub line: u32,
    #[serde(default)]
    pub column: u32,
    /// `unsigned` folded into this type token by the tokenizer.
    #[serde(default)]
    pub is_unsigned: bool,
    /// `long` folded into this type token by the tokenizer.
    #[serde(default)]
    pub is_long: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind, line: u32) -> Self {
        Self {
            text: text.into(),
            kind,
            var_id: None,
            scope: None,
            file: 0,
            line,
            column: 0,
            is_unsigned: false,
            is_long: false,
        }
    }

    pub fn with_var_id(mut self, var_id: VarId) -> Self {
        self.var_id = Some(var_id);
        self
    }

    pub fn with_scope(mut self, scope: ScopeId) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn with_column(mut self, column: u32) -> Self {
        self.column = column;
        self
    }

    pub fn with_file(mut self, file: usize) -> Self {
        self.file = file;
        self
    }

    pub fn unsigned(mut self) -> Self {
        self.is_unsigned = true;
        self
    }

    pub fn long(mut self) -> Self {
        self.is_long = true;
        self
    }

    pub fn is(&self, text: &str) -> bool {
        self.text == text
    }
}

/// Ordered, doubly traversable token sequence of one translation unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.0)
    }

    pub fn contains(&self, id: TokenId) -> bool {
        id.0 < self.tokens.len()
    }

    pub fn text(&self, id: TokenId) -> Option<&str> {
        self.get(id).map(|tok| tok.text.as_str())
    }

    pub fn next(&self, id: TokenId) -> Option<TokenId> {
        self.tok_at(id, 1)
    }

    pub fn previous(&self, id: TokenId) -> Option<TokenId> {
        self.tok_at(id, -1)
    }

    /// Token `offset` positions away from `id`, if it exists.
    pub fn tok_at(&self, id: TokenId, offset: isize) -> Option<TokenId> {
        let target = id.0.checked_add_signed(offset)?;
        self.contains(TokenId(target)).then_some(TokenId(target))
    }

    /// Tokens from `start` up to and including `end`.
    pub fn range(&self, start: TokenId, end: TokenId) -> impl Iterator<Item = (TokenId, &Token)> {
        let upper = end.0.saturating_add(1).min(self.tokens.len());
        let lower = start.0.min(upper);
        self.tokens[lower..upper]
            .iter()
            .enumerate()
            .map(move |(offset, tok)| (TokenId(lower + offset), tok))
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &Token)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(index, tok)| (TokenId(index), tok))
    }

    pub(crate) fn push(&mut self, token: Token) -> TokenId {
        self.tokens.push(token);
        TokenId(self.tokens.len() - 1)
    }

    pub(crate) fn get_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        self.tokens.get_mut(id.0)
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
