//! Token-level secure coding checks.
//!
//! Each evaluator looks at one token of a function body plus its immediate
//! neighbours and returns the token to report at. Evaluators share no state,
//! so their order in [`TOKEN_RULES`] does not change the findings.

use super::classify::{
    is_confirmed_unsigned, is_float_variable, is_number, is_number_or_variable,
    is_signed_char_token, is_time_variable,
};
use super::Check;
use crate::ast::{AnalysisUnit, Matcher, ScopeKind, ScopeView, TokenId, TokenKind, TokenPattern};
use crate::report::ErrorReporter;
use crate::rules::RuleId;

/// `<ctype.h>` functions whose argument must be representable as `unsigned char`.
pub const CTYPE_CHAR_FUNCTIONS: [&str; 16] = [
    "isalnum", "isalpha", "isascii", "isblank", "iscntrl", "isdigit", "isgraph", "islower",
    "isprint", "ispunct", "isspace", "isupper", "isxdigit", "toascii", "toupper", "tolower",
];

const CTYPE_CALL: TokenPattern = TokenPattern::new(&[
    Matcher::OneOf(&CTYPE_CHAR_FUNCTIONS),
    Matcher::Text("("),
    Matcher::Name,
    Matcher::Text(")"),
]);

const RETURN_ERRNO: TokenPattern = TokenPattern::new(&[
    Matcher::Text("return"),
    Matcher::Text("errno"),
    Matcher::Text(";"),
]);

const FLOAT_LOOP: TokenPattern = TokenPattern::new(&[
    Matcher::Text("for"),
    Matcher::Text("("),
    Matcher::OneOf(&["double", "float"]),
]);

/// Scan step: anchor of the finding, if the token triggers the rule.
pub type TokenRule = fn(&ScopeView<'_>, TokenId) -> Option<TokenId>;

pub const TOKEN_RULES: [(RuleId, TokenRule); 6] = [
    (RuleId::FloatEquals, float_equality),
    (RuleId::TimeArithmetic, time_arithmetic),
    (RuleId::SignedBitOperation, signed_bit_operation),
    (RuleId::SignedChar, signed_char_argument),
    (RuleId::ReturnErrno, return_errno),
    (RuleId::FloatLoopCounter, float_loop_counter),
];

fn kind_of(view: &ScopeView<'_>, tok: TokenId) -> Option<TokenKind> {
    view.token(tok).map(|token| token.kind)
}

/// `==` between a floating variable and a literal or another floating variable.
pub fn float_equality(view: &ScopeView<'_>, tok: TokenId) -> Option<TokenId> {
    let token = view.token(tok)?;
    if token.kind != TokenKind::ComparisonOp || token.text != "==" {
        return None;
    }
    let prev = view.previous(tok)?;
    let next = view.next(tok)?;

    let compares_float = |float_side: TokenId, other: TokenId| {
        is_float_variable(view, float_side)
            && (is_number(view, other) || is_float_variable(view, other))
    };
    (compares_float(prev, next) || compares_float(next, prev)).then_some(tok)
}

/// Arithmetic operator next to a `time_t` variable.
pub fn time_arithmetic(view: &ScopeView<'_>, tok: TokenId) -> Option<TokenId> {
    if kind_of(view, tok)? != TokenKind::ArithmeticalOp {
        return None;
    }
    let touches_time = |neighbour: Option<TokenId>| neighbour.is_some_and(|id| is_time_variable(view, id));
    (touches_time(view.previous(tok)) || touches_time(view.next(tok))).then_some(tok)
}

/// Bit operator whose operands are not both confirmed unsigned variables.
pub fn signed_bit_operation(view: &ScopeView<'_>, tok: TokenId) -> Option<TokenId> {
    if kind_of(view, tok)? != TokenKind::BitOp {
        return None;
    }
    let prev = view.previous(tok)?;
    let next = view.next(tok)?;
    if !is_number_or_variable(view, prev) || !is_number_or_variable(view, next) {
        return None;
    }

    let both_unsigned = is_confirmed_unsigned(view, prev) && is_confirmed_unsigned(view, next);
    (!both_unsigned).then_some(tok)
}

/// `isxxx ( c )` / `toxxx ( c )` with an argument not confirmed unsigned.
/// Reported at the argument.
pub fn signed_char_argument(view: &ScopeView<'_>, tok: TokenId) -> Option<TokenId> {
    if !CTYPE_CALL.matches(view, tok) {
        return None;
    }
    let argument = CTYPE_CALL.captured(view, tok, 2)?;
    is_signed_char_token(view, argument).then_some(argument)
}

/// `return errno ;`
pub fn return_errno(view: &ScopeView<'_>, tok: TokenId) -> Option<TokenId> {
    RETURN_ERRNO.matches(view, tok).then_some(tok)
}

/// `for ( double` / `for ( float`
pub fn float_loop_counter(view: &ScopeView<'_>, tok: TokenId) -> Option<TokenId> {
    FLOAT_LOOP.matches(view, tok).then_some(tok)
}

/// Floating point, `time_t`, bitwise, ctype, errno, loop counter and namespace `std` checks.
#[derive(Debug, Default, Clone, Copy)]
pub struct MiscellaneousCheck;

impl MiscellaneousCheck {
    pub fn new() -> Self {
        Self
    }

    /// One token pass per function body, then one pass over all scopes.
    pub fn run_miscellaneous_checks(&self, unit: &AnalysisUnit, reporter: &mut ErrorReporter<'_>) {
        for (_, scope) in unit.symbols.function_scopes() {
            let Some(view) = ScopeView::of_scope(unit, scope) else {
                continue;
            };
            for tok in view.ids() {
                for (rule, evaluate) in TOKEN_RULES {
                    if let Some(anchor) = evaluate(&view, tok) {
                        reporter.report_error(anchor, rule, rule.message());
                    }
                }
            }
        }

        self.check_std_namespace(unit, reporter);
    }

    /// Any namespace literally named `std`, including permitted specializations.
    pub fn check_std_namespace(&self, unit: &AnalysisUnit, reporter: &mut ErrorReporter<'_>) {
        for scope in &unit.symbols.scopes {
            if scope.kind != ScopeKind::Namespace || scope.name != "std" {
                continue;
            }
            if let Some(anchor) = scope.class_def.or(scope.body_start) {
                reporter.report_error(
                    anchor,
                    RuleId::ModifyStdNamespace,
                    RuleId::ModifyStdNamespace.message(),
                );
            }
        }
    }
}

impl Check for MiscellaneousCheck {
    fn name(&self) -> &'static str {
        "Miscellaneous"
    }

    fn rules(&self) -> &'static [RuleId] {
        &[
            RuleId::FloatEquals,
            RuleId::TimeArithmetic,
            RuleId::SignedBitOperation,
            RuleId::SignedChar,
            RuleId::ReturnErrno,
            RuleId::FloatLoopCounter,
            RuleId::ModifyStdNamespace,
        ]
    }

    fn run_checks(&self, unit: &AnalysisUnit, reporter: &mut ErrorReporter<'_>) {
        self.run_miscellaneous_checks(unit, reporter);
    }
}

#[cfg(test)]
#[path = "miscellaneous_tests.rs"]
mod tests;
