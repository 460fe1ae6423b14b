//! Programmatic construction of [`AnalysisUnit`]s.
//!
//! The builder takes pre-tokenized text: tokens are separated by whitespace
//! and every line break in a text fragment starts a new source line. It does
//! not lex raw C/C++. Declarations are explicit (`"unsigned char c"`,
//! `"const std :: vector < int > & v"`): the last word is the variable name,
//! the rest is the type. Later identifiers with the same text resolve to the
//! most recent declaration that is visible.

use super::symbol::{Function, FunctionId, Scope, ScopeId, ScopeKind, SymbolDatabase, VarId, Variable};
use super::token::{Token, TokenId, TokenKind, TokenList};
use super::unit::AnalysisUnit;

const KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "default", "delete", "do", "else",
    "enum", "extern", "for", "goto", "if", "inline", "namespace", "new", "operator", "private",
    "protected", "public", "return", "sizeof", "static", "struct", "switch", "template", "this",
    "throw", "try", "typedef", "typename", "union", "using", "virtual", "volatile", "while",
];

const BUILTIN_TYPES: &[&str] = &[
    "auto", "bool", "char", "double", "float", "int", "long", "short", "signed", "unsigned",
    "void", "wchar_t",
];

/// Words in a declaration that belong to neither the type name nor the variable name.
const DECLARATORS: &[&str] = &["&", "&&", "*", "const", "volatile"];

/// Category a plain tokenizer would give to `word` outside a declaration.
pub fn classify_token(word: &str) -> TokenKind {
    match word {
        "true" | "false" => return TokenKind::Boolean,
        "==" | "!=" | "<" | ">" | "<=" | ">=" => return TokenKind::ComparisonOp,
        "+" | "-" | "*" | "/" | "%" | "<<" | ">>" => return TokenKind::ArithmeticalOp,
        "&" | "|" | "^" | "~" => return TokenKind::BitOp,
        "&&" | "||" | "!" => return TokenKind::LogicalOp,
        "=" | "+=" | "-=" | "*=" | "/=" | "%=" | "&=" | "|=" | "^=" | "<<=" | ">>=" => {
            return TokenKind::AssignmentOp
        }
        "++" | "--" => return TokenKind::IncDecOp,
        "(" | ")" | "[" | "]" | "," | "?" | ":" => return TokenKind::ExtendedOp,
        _ => {}
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => TokenKind::Number,
        Some('.') if chars.next().is_some_and(|c| c.is_ascii_digit()) => TokenKind::Number,
        Some('"') => TokenKind::String,
        Some('\'') => TokenKind::Char,
        Some(c) if c.is_alphabetic() || c == '_' => {
            if BUILTIN_TYPES.contains(&word) {
                TokenKind::Type
            } else if KEYWORDS.contains(&word) {
                TokenKind::Keyword
            } else {
                TokenKind::Name
            }
        }
        _ => TokenKind::Other,
    }
}

fn declaration_kind(word: &str) -> TokenKind {
    match classify_token(word) {
        TokenKind::Type | TokenKind::Keyword => classify_token(word),
        TokenKind::Name => TokenKind::Name,
        _ => TokenKind::Other,
    }
}

/// Builds an [`AnalysisUnit`] one fragment at a time.
#[derive(Debug)]
pub struct UnitBuilder {
    files: Vec<String>,
    tokens: TokenList,
    symbols: SymbolDatabase,
    line: u32,
    column: u32,
    globals: Vec<(String, VarId)>,
}

impl UnitBuilder {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            files: vec![file.into()],
            tokens: TokenList::default(),
            symbols: SymbolDatabase::default(),
            line: 1,
            column: 1,
            globals: Vec::new(),
        }
    }

    pub fn build(self) -> AnalysisUnit {
        AnalysisUnit::new(self.files, self.tokens, self.symbols)
    }

    pub fn newline(mut self) -> Self {
        self.next_line();
        self
    }

    /// Plain tokens at file level. Identifiers resolve against global declarations.
    pub fn code(mut self, text: &str) -> Self {
        let names = self.globals.clone();
        self.lex(text, &names);
        self
    }

    /// Global variable declaration followed by `;`.
    pub fn global(mut self, decl: &str) -> Self {
        if let Some((name, id)) = self.declare(decl, false, &[]) {
            self.globals.push((name, id));
        }
        self.push(";", TokenKind::Other);
        self
    }

    /// `namespace <name> { ... }`
    pub fn namespace(mut self, name: &str, body: impl FnOnce(Self) -> Self) -> Self {
        let keyword = self.push("namespace", TokenKind::Keyword);
        self.push(name, TokenKind::Name);
        let scope = self.reserve_scope(Scope::new(ScopeKind::Namespace, name).with_class_def(keyword));
        let open = self.push_scope_brace("{", scope);

        let mut this = body(self);

        let close = this.push_scope_brace("}", scope);
        if let Some(entry) = this.symbols.scopes.get_mut(scope.0) {
            entry.body_start = Some(open);
            entry.body_end = Some(close);
        }
        this
    }

    /// Function prototype without a body: `<ret> <name> ( <params> ) ;`
    pub fn declare_function(mut self, ret: &str, name: &str, params: &[&str]) -> Self {
        let (token, args, _) = self.signature(ret, name, params);
        self.push(";", TokenKind::Other);
        self.symbols
            .functions
            .push(Function::new(name, token).with_args(args).with_body(false));
        self
    }

    /// Function definition: `<ret> <name> ( <params> ) { <body> }`
    pub fn function(
        mut self,
        ret: &str,
        name: &str,
        params: &[&str],
        body: impl FnOnce(&mut BodyBuilder<'_>),
    ) -> Self {
        let (token, args, mut names) = self.signature(ret, name, params);

        let function = FunctionId(self.symbols.functions.len());
        self.symbols
            .functions
            .push(Function::new(name, token).with_args(args).with_body(true));

        let scope = self.reserve_scope(
            Scope::new(ScopeKind::Function, name)
                .with_class_def(token)
                .with_function(function),
        );
        let open = self.push_scope_brace("{", scope);

        let mut all_names = self.globals.clone();
        all_names.append(&mut names);
        let mut builder = BodyBuilder {
            unit: &mut self,
            names: all_names,
        };
        body(&mut builder);

        let close = self.push_scope_brace("}", scope);
        if let Some(entry) = self.symbols.scopes.get_mut(scope.0) {
            entry.body_start = Some(open);
            entry.body_end = Some(close);
        }
        self
    }

    fn signature(
        &mut self,
        ret: &str,
        name: &str,
        params: &[&str],
    ) -> (TokenId, Vec<VarId>, Vec<(String, VarId)>) {
        let globals = self.globals.clone();
        self.lex(ret, &globals);
        let token = self.push(name, TokenKind::Function);
        self.push("(", TokenKind::ExtendedOp);

        let mut args = Vec::new();
        let mut names = Vec::new();
        for (index, param) in params.iter().enumerate() {
            if index > 0 {
                self.push(",", TokenKind::ExtendedOp);
            }
            if let Some((param_name, id)) = self.declare(param, true, &globals) {
                args.push(id);
                names.push((param_name, id));
            }
        }

        self.push(")", TokenKind::ExtendedOp);
        (token, args, names)
    }

    fn reserve_scope(&mut self, scope: Scope) -> ScopeId {
        self.symbols.scopes.push(scope);
        ScopeId(self.symbols.scopes.len() - 1)
    }

    fn push_scope_brace(&mut self, text: &str, scope: ScopeId) -> TokenId {
        let id = self.push(text, TokenKind::Other);
        if let Some(tok) = self.tokens.get_mut(id) {
            tok.scope = Some(scope);
        }
        id
    }

    fn next_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    fn push(&mut self, text: &str, kind: TokenKind) -> TokenId {
        let token = Token::new(text, kind, self.line).with_column(self.column);
        self.column += u32::try_from(text.chars().count()).unwrap_or(0) + 1;
        self.tokens.push(token)
    }

    fn lex(&mut self, text: &str, names: &[(String, VarId)]) {
        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                self.next_line();
            }
            for word in line.split_whitespace() {
                let kind = classify_token(word);
                let resolved = (kind == TokenKind::Name)
                    .then(|| names.iter().rev().find(|(name, _)| name == word))
                    .flatten();
                match resolved {
                    Some((_, id)) => {
                        let tok = self.push(word, TokenKind::Variable);
                        if let Some(tok) = self.tokens.get_mut(tok) {
                            tok.var_id = Some(*id);
                        }
                    }
                    None => {
                        self.push(word, kind);
                    }
                }
            }
        }
    }

    /// Emit a declaration's tokens and register the variable.
    ///
    /// Returns `None` (after emitting the words as plain code) when `decl` has
    /// no type part, e.g. a lone `void` parameter list.
    fn declare(
        &mut self,
        decl: &str,
        is_argument: bool,
        names: &[(String, VarId)],
    ) -> Option<(String, VarId)> {
        let words: Vec<&str> = decl.split_whitespace().collect();
        let Some((name, type_words)) = words.split_last() else {
            return None;
        };
        let type_end_index = type_words
            .iter()
            .rposition(|word| !DECLARATORS.contains(word));
        let Some(type_end_index) = type_end_index else {
            self.lex(decl, names);
            return None;
        };

        let is_unsigned = type_words.contains(&"unsigned");
        let is_long = type_words[..type_end_index].contains(&"long");

        let mut type_start = None;
        let mut type_end = None;
        for (index, word) in type_words.iter().enumerate() {
            let id = self.push(word, declaration_kind(word));
            type_start.get_or_insert(id);
            if index == type_end_index {
                type_end = Some(id);
                if let Some(tok) = self.tokens.get_mut(id) {
                    tok.is_unsigned = is_unsigned;
                    tok.is_long = is_long && tok.text == "double";
                }
            }
        }

        let var_id = self.symbols.next_var_id();
        let name_token = self.push(name, TokenKind::Variable);
        if let Some(tok) = self.tokens.get_mut(name_token) {
            tok.var_id = Some(var_id);
        }

        let (type_start, type_end) = (type_start?, type_end?);
        let variable = Variable::new(var_id, name_token, type_start, type_end)
            .with_reference(type_words.iter().any(|w| *w == "&" || *w == "&&"))
            .with_pointer(type_words.contains(&"*"))
            .with_argument(is_argument);
        self.symbols.variables.push(variable);

        Some((name.to_string(), var_id))
    }
}

/// Writes the body of a function opened by [`UnitBuilder::function`].
#[derive(Debug)]
pub struct BodyBuilder<'a> {
    unit: &'a mut UnitBuilder,
    names: Vec<(String, VarId)>,
}

impl BodyBuilder<'_> {
    pub fn code(&mut self, text: &str) -> &mut Self {
        self.unit.lex(text, &self.names);
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.unit.next_line();
        self
    }

    /// Local declaration followed by `;`.
    pub fn local(&mut self, decl: &str) -> &mut Self {
        self.declare(decl);
        self.unit.push(";", TokenKind::Other);
        self
    }

    /// Local declaration without a trailing `;`, e.g. inside a `for` header
    /// or before an initializer.
    pub fn declare(&mut self, decl: &str) -> &mut Self {
        if let Some(entry) = self.unit.declare(decl, false, &self.names) {
            self.names.push(entry);
        }
        self
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
