use super::token::{TokenId, TokenKind};
use super::view::ScopeView;

/// One position of a [`TokenPattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Token text equals the string.
    Text(&'static str),
    /// Token text equals one of the strings.
    OneOf(&'static [&'static str]),
    /// Token has the given kind.
    Kind(TokenKind),
    /// Any identifier-like token.
    Name,
}

impl Matcher {
    fn accepts(&self, text: &str, kind: TokenKind) -> bool {
        match self {
            Self::Text(expected) => text == *expected,
            Self::OneOf(options) => options.contains(&text),
            Self::Kind(expected) => kind == *expected,
            Self::Name => kind.is_name(),
        }
    }
}

/// Fixed ordered sequence of token matchers.
///
/// A pattern matches at an anchor only when every matcher accepts the token at
/// its offset and all of those tokens lie inside the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPattern {
    items: &'static [Matcher],
}

impl TokenPattern {
    pub const fn new(items: &'static [Matcher]) -> Self {
        Self { items }
    }

    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn matches(&self, view: &ScopeView<'_>, anchor: TokenId) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.iter().enumerate().all(|(offset, matcher)| {
            let Ok(offset) = isize::try_from(offset) else {
                return false;
            };
            view.tok_at(anchor, offset)
                .and_then(|id| view.token(id))
                .is_some_and(|tok| matcher.accepts(&tok.text, tok.kind))
        })
    }

    /// Token at `index` of a match anchored at `anchor`.
    pub fn captured(&self, view: &ScopeView<'_>, anchor: TokenId, index: usize) -> Option<TokenId> {
        if index >= self.items.len() {
            return None;
        }
        view.tok_at(anchor, isize::try_from(index).ok()?)
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
