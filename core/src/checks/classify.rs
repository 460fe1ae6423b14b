//! Category predicates shared by the checks.
//!
//! Type names are compared as exact strings. Typedefs, namespace aliases and
//! template arguments are not resolved, so `using V = std::vector<int>` or a
//! container hidden behind a typedef is not recognised.

use crate::ast::{AnalysisUnit, ScopeView, TokenId, TokenKind, Variable};

/// Standard sequence, associative and adaptor containers whose copy is a deep copy.
pub const COMPLEX_CONTAINERS: [&str; 16] = [
    "array",
    "vector",
    "deque",
    "list",
    "forward_list",
    "stack",
    "queue",
    "priority_queue",
    "set",
    "map",
    "multimap",
    "multiset",
    "unordered_set",
    "unordered_map",
    "unordered_multimap",
    "unordered_multiset",
];

pub const FLOATING_TYPES: [&str; 3] = ["float", "double", "long double"];

pub const TIME_VALUE_TYPE: &str = "time_t";

pub fn is_complex_container_type_name(name: &str) -> bool {
    COMPLEX_CONTAINERS.contains(&name)
}

pub fn is_floating_type_name(name: &str) -> bool {
    FLOATING_TYPES.contains(&name)
}

pub fn is_time_value_type_name(name: &str) -> bool {
    name == TIME_VALUE_TYPE
}

/// Type name written immediately before the variable's name.
///
/// `long double` is reported as one name whether the tokenizer folded `long`
/// into the `double` token or left it as a separate token.
pub fn declared_type_name<'a>(unit: &'a AnalysisUnit, var: &Variable) -> Option<&'a str> {
    let type_id = unit.tokens.previous(var.name_token)?;
    let tok = unit.tokens.get(type_id)?;
    if tok.text != "double" {
        return Some(tok.text.as_str());
    }

    let long_before = type_id > var.type_start
        && unit
            .tokens
            .previous(type_id)
            .and_then(|id| unit.tokens.text(id))
            == Some("long");
    if tok.is_long || long_before {
        Some("long double")
    } else {
        Some(tok.text.as_str())
    }
}

/// Unsigned flag on the type-end token.
pub fn is_unsigned_variable(unit: &AnalysisUnit, var: &Variable) -> bool {
    unit.tokens
        .get(var.type_end)
        .is_some_and(|tok| tok.is_unsigned)
}

/// Anything not confirmed unsigned counts as signed.
///
/// This is a heuristic: an unresolved or unknown qualifier is treated the same
/// as an explicit `signed char`. No width information is consulted.
pub fn is_signed_char_variable(unit: &AnalysisUnit, var: &Variable) -> bool {
    !is_unsigned_variable(unit, var)
}

fn has_type(view: &ScopeView<'_>, id: TokenId, pred: fn(&str) -> bool) -> bool {
    view.variable(id)
        .and_then(|var| declared_type_name(view.unit(), var))
        .is_some_and(pred)
}

/// Variable token whose declared type is floating point.
pub fn is_float_variable(view: &ScopeView<'_>, id: TokenId) -> bool {
    has_type(view, id, is_floating_type_name)
}

/// Variable token declared as `time_t`.
pub fn is_time_variable(view: &ScopeView<'_>, id: TokenId) -> bool {
    has_type(view, id, is_time_value_type_name)
}

/// Variable token that resolves to a confirmed-unsigned variable.
pub fn is_confirmed_unsigned(view: &ScopeView<'_>, id: TokenId) -> bool {
    view.variable(id)
        .is_some_and(|var| is_unsigned_variable(view.unit(), var))
}

/// Variable token that is not confirmed unsigned, including unresolved ones.
pub fn is_signed_char_token(view: &ScopeView<'_>, id: TokenId) -> bool {
    let is_variable = view
        .token(id)
        .is_some_and(|tok| tok.kind == TokenKind::Variable);
    is_variable && !is_confirmed_unsigned(view, id)
}

pub fn is_number(view: &ScopeView<'_>, id: TokenId) -> bool {
    view.token(id).is_some_and(|tok| tok.kind == TokenKind::Number)
}

pub fn is_number_or_variable(view: &ScopeView<'_>, id: TokenId) -> bool {
    view.token(id)
        .is_some_and(|tok| matches!(tok.kind, TokenKind::Number | TokenKind::Variable))
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
