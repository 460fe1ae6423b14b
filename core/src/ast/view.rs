use super::symbol::{Scope, Variable};
use super::token::{Token, TokenId};
use super::unit::AnalysisUnit;

/// Bounded window over one scope's tokens.
///
/// Look-around through the view never yields a token outside `[start, end]`,
/// so rules cannot wander into a neighbouring function.
#[derive(Debug, Clone, Copy)]
pub struct ScopeView<'a> {
    unit: &'a AnalysisUnit,
    start: TokenId,
    end: TokenId,
}

impl<'a> ScopeView<'a> {
    /// View over `start..=end`, clamped to the token list.
    pub fn new(unit: &'a AnalysisUnit, start: TokenId, end: TokenId) -> Option<Self> {
        let last = unit.tokens.len().checked_sub(1)?;
        let end = TokenId(end.index().min(last));
        (start <= end).then_some(Self { unit, start, end })
    }

    /// View over a scope body, braces included. `None` when the scope has no body.
    pub fn of_scope(unit: &'a AnalysisUnit, scope: &Scope) -> Option<Self> {
        Self::new(unit, scope.body_start?, scope.body_end?)
    }

    /// View over the whole unit.
    pub fn whole(unit: &'a AnalysisUnit) -> Option<Self> {
        Self::new(unit, TokenId(0), TokenId(unit.tokens.len().checked_sub(1)?))
    }

    pub fn unit(&self) -> &'a AnalysisUnit {
        self.unit
    }

    pub fn start(&self) -> TokenId {
        self.start
    }

    pub fn end(&self) -> TokenId {
        self.end
    }

    pub fn contains(&self, id: TokenId) -> bool {
        self.start <= id && id <= self.end
    }

    pub fn token(&self, id: TokenId) -> Option<&'a Token> {
        if self.contains(id) {
            self.unit.tokens.get(id)
        } else {
            None
        }
    }

    pub fn tok_at(&self, id: TokenId, offset: isize) -> Option<TokenId> {
        let target = self.unit.tokens.tok_at(id, offset)?;
        self.contains(target).then_some(target)
    }

    pub fn next(&self, id: TokenId) -> Option<TokenId> {
        self.tok_at(id, 1)
    }

    pub fn previous(&self, id: TokenId) -> Option<TokenId> {
        self.tok_at(id, -1)
    }

    /// Variable behind a token in this view, if it resolves.
    pub fn variable(&self, id: TokenId) -> Option<&'a Variable> {
        if self.contains(id) {
            self.unit.variable_of(id)
        } else {
            None
        }
    }

    /// Ids of every token in the view, in order.
    pub fn ids(&self) -> impl Iterator<Item = TokenId> {
        (self.start.index()..=self.end.index()).map(TokenId)
    }
}
