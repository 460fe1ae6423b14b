use serde::{Deserialize, Serialize};

use super::symbol::{SymbolDatabase, Variable};
use super::token::{Token, TokenId, TokenKind, TokenList};
use crate::error::{CoreError, Result};

/// Source position of a token, resolved against the unit's file table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

/// One tokenized translation unit together with its resolved symbol facts.
///
/// Produced by an external tokenizer/symbol pass and only read by the checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisUnit {
    #[serde(default)]
    pub files: Vec<String>,
    pub tokens: TokenList,
    #[serde(default)]
    pub symbols: SymbolDatabase,
}

impl AnalysisUnit {
    pub fn new(files: Vec<String>, tokens: TokenList, symbols: SymbolDatabase) -> Self {
        Self {
            files,
            tokens,
            symbols,
        }
    }

    /// Parse a JSON dump and check its internal links.
    pub fn from_json(content: &str) -> Result<Self> {
        let unit: Self = serde_json::from_str(content)?;
        unit.validate()?;
        Ok(unit)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Name of the main file, used for logging.
    pub fn file_name(&self) -> &str {
        self.files.first().map(String::as_str).unwrap_or("")
    }

    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id)
    }

    /// Variable a token refers to. `None` for non-variable tokens and unresolved links.
    pub fn variable_of(&self, id: TokenId) -> Option<&Variable> {
        let tok = self.tokens.get(id)?;
        if tok.kind != TokenKind::Variable {
            return None;
        }
        self.symbols.variable(tok.var_id?)
    }

    pub fn location(&self, id: TokenId) -> Location {
        match self.tokens.get(id) {
            Some(tok) => Location {
                file: self.files.get(tok.file).cloned().unwrap_or_default(),
                line: tok.line,
                column: tok.column,
            },
            None => Location {
                file: self.file_name().to_string(),
                line: 0,
                column: 0,
            },
        }
    }

    /// Reject token references that point outside the token list.
    ///
    /// Missing symbol links (a `var_id` with no variable) are allowed; the checks
    /// treat them as "nothing known".
    pub fn validate(&self) -> Result<()> {
        let check = |what: &str, id: TokenId| -> Result<()> {
            if self.tokens.contains(id) {
                Ok(())
            } else {
                Err(CoreError::InvalidUnit(format!(
                    "{} refers to token {} but the unit has {} tokens",
                    what,
                    id.index(),
                    self.tokens.len()
                )))
            }
        };

        for var in &self.symbols.variables {
            let what = format!("variable {}", var.id.0);
            check(&what, var.name_token)?;
            check(&what, var.type_start)?;
            check(&what, var.type_end)?;
            if var.type_start > var.type_end {
                return Err(CoreError::InvalidUnit(format!(
                    "{} has a type range that ends before it starts",
                    what
                )));
            }
        }

        for func in &self.symbols.functions {
            check(&format!("function {}", func.name), func.token)?;
        }

        for (index, scope) in self.symbols.scopes.iter().enumerate() {
            let what = format!("scope {} ({})", index, scope.kind_to_string());
            for id in [scope.class_def, scope.body_start, scope.body_end]
                .into_iter()
                .flatten()
            {
                check(&what, id)?;
            }
            if let (Some(start), Some(end)) = (scope.body_start, scope.body_end) {
                if start > end {
                    return Err(CoreError::InvalidUnit(format!(
                        "{} closes before it opens",
                        what
                    )));
                }
            }
            if let Some(function) = scope.function {
                if self.symbols.function(function).is_none() {
                    return Err(CoreError::InvalidUnit(format!(
                        "{} links to missing function {}",
                        what, function.0
                    )));
                }
            }
        }

        for (id, tok) in self.tokens.iter() {
            if !self.files.is_empty() && tok.file >= self.files.len() {
                return Err(CoreError::InvalidUnit(format!(
                    "token {} refers to file index {} but only {} files are known",
                    id.index(),
                    tok.file,
                    self.files.len()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
