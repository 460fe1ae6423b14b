use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Information,
    Warning,
    Performance,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Self::Information, Self::Warning, Self::Performance];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Performance => "performance",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identifiers of every finding the checks can produce.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleId {
    #[serde(rename = "complexObjectCopying")]
    ComplexObjectCopying,
    #[serde(rename = "FloatEqualsError")]
    FloatEquals,
    #[serde(rename = "time_tArithmeticError")]
    TimeArithmetic,
    #[serde(rename = "SignedBitoperError")]
    SignedBitOperation,
    #[serde(rename = "SignedCharError")]
    SignedChar,
    #[serde(rename = "FunctionReturnErrnoError")]
    ReturnErrno,
    #[serde(rename = "FloatNumberAsLoopCounterError")]
    FloatLoopCounter,
    #[serde(rename = "ModifyStdNamespaceError")]
    ModifyStdNamespace,
}

impl RuleId {
    pub const ALL: [RuleId; 8] = [
        Self::ComplexObjectCopying,
        Self::FloatEquals,
        Self::TimeArithmetic,
        Self::SignedBitOperation,
        Self::SignedChar,
        Self::ReturnErrno,
        Self::FloatLoopCounter,
        Self::ModifyStdNamespace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ComplexObjectCopying => "complexObjectCopying",
            Self::FloatEquals => "FloatEqualsError",
            Self::TimeArithmetic => "time_tArithmeticError",
            Self::SignedBitOperation => "SignedBitoperError",
            Self::SignedChar => "SignedCharError",
            Self::ReturnErrno => "FunctionReturnErrnoError",
            Self::FloatLoopCounter => "FloatNumberAsLoopCounterError",
            Self::ModifyStdNamespace => "ModifyStdNamespaceError",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.as_str() == id)
    }

    pub fn severity(self) -> Severity {
        match self {
            Self::ComplexObjectCopying => Severity::Performance,
            _ => Severity::Warning,
        }
    }

    /// CERT secure coding rule the check enforces, when there is one.
    pub fn reference(self) -> Option<&'static str> {
        match self {
            Self::ComplexObjectCopying => None,
            Self::FloatEquals => Some("FLP00-CPP"),
            Self::TimeArithmetic => Some("MSC05-CPP"),
            Self::SignedBitOperation => Some("INT13-CPP"),
            Self::SignedChar => Some("STR37-C"),
            Self::ReturnErrno => Some("DCL09-CPP"),
            Self::FloatLoopCounter => Some("FLP30-CPP"),
            Self::ModifyStdNamespace => Some("MSC34-CPP"),
        }
    }

    /// Full diagnostic text: a one-line summary, a newline, then the details.
    ///
    /// `complexObjectCopying` names the function; use
    /// [`complex_copying_message`] for it.
    pub fn message(self) -> &'static str {
        match self {
            Self::ComplexObjectCopying => {
                "Complex objects copying may slow down system performance.\n\
                 Please use pointer or reference instead."
            }
            Self::FloatEquals => {
                "Comparing two float variables is improper.\n\
                 Should avoid compare two float variables directly. \
                 Maybe you can compare with an epsilon value. \
                 Please see: http://stackoverflow.com/questions/17333/most-effective-way-for-float-and-double-comparison"
            }
            Self::TimeArithmetic => {
                "There is no safe way to manually perform arithmetic on the time_t type.\n\
                 The time_t values should not be modified directly. \
                 Please see: CERT C++ Secure Coding Standard 49. Miscellaneous (MSC) \
                 MSC05-CPP. Do not manipulate time_t typed values directly."
            }
            Self::SignedBitOperation => {
                "Bitwise operators should only be used with unsigned integer operands.\n\
                 Bitwise operators should only be used with unsigned integer operands, \
                 as the results of some bitwise operations on signed integers is implementation defined. \
                 Please see: CERT C++ Secure Coding Standard INT13-CPP. Use bitwise operators only on unsigned operands."
            }
            Self::SignedChar => {
                "Arguments to character handling functions must be representable as an unsigned char.\n\
                 The header <ctype.h> declares several functions useful for classifying and mapping characters. \
                 In all cases the argument is an int, \
                 the value of which shall be representable as an unsigned char or shall equal the value of the macro EOF. \
                 Please see: CERT C++ Secure Coding Standard STR37-C."
            }
            Self::ReturnErrno => {
                "Functions that return errno should change to a return type of errno_t.\n\
                 Many existing functions that return errno are declared as returning a value of type int. \
                 It is semantically unclear by looking at the function declaration or prototype \
                 if these functions return an error status or a value or worse, some combination of the two. \
                 TR 24731-1 introduces the new type errno_t instead. \
                 Please see: CERT C++ Secure Coding Standard DCL09-CPP."
            }
            Self::FloatLoopCounter => {
                "Do not use floating-point variables as loop counters.\n\
                 Different implementations have different precision limitations, \
                 and to keep code portable, floating-point variables should not be used as loop counters. \
                 Please see: CERT C++ Secure Coding Standard FLP30-CPP."
            }
            Self::ModifyStdNamespace => {
                "Do not modify the standard namespaces.\n\
                 The standard library introduces the namespace std for standards-provided declarations \
                 such as std::string, std::vector, and std::for_each. \
                 However, it is undefined behavior to introduce new declarations in namespace std, \
                 except under special circumstances. \
                 Please see: CERT C++ Secure Coding Standard MSC34-CPP."
            }
        }
    }

    pub fn summary(self) -> &'static str {
        let message = self.message();
        message.split_once('\n').map_or(message, |(summary, _)| summary)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn complex_copying_message(function: &str) -> String {
    format!(
        "Complex objects copying in Function {} may slow down system performance.\n\
         Please use pointer or reference instead.",
        function
    )
}

/// Catalogue entry describing one rule.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Rule {
    pub id: RuleId,
    pub severity: Severity,
    pub summary: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl From<RuleId> for Rule {
    fn from(id: RuleId) -> Self {
        let message = id.message();
        let description = message
            .split_once('\n')
            .map_or("", |(_, details)| details)
            .to_string();
        Self {
            id,
            severity: id.severity(),
            summary: id.summary().to_string(),
            description,
            reference: id.reference().map(str::to_string),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RuleSet {
    pub name: String,
    pub version: String,
    pub rules: Vec<Rule>,
}

/// Every rule known to the built-in checks.
pub fn catalog() -> RuleSet {
    RuleSet {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        rules: RuleId::ALL.into_iter().map(Rule::from).collect(),
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
