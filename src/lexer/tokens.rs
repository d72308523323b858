use std::fmt::Display;

use crate::Position;

pub const KEYWORDS: [&str; 15] = [
    "void", "int", "if", "else", "for", "while", "return", "main", "printf", "double", "float",
    "char", "case", "default", "switch",
];
pub const LOGICAL_OPS: [&str; 3] = ["&&", "||", "!"];
pub const ARITH_OPS: [&str; 5] = ["+", "-", "*", "/", "%"];
pub const COMP_OPS: [&str; 6] = [">=", "<=", "==", "!=", ">", "<"];
pub const DELIMITERS: [&str; 7] = ["(", ")", "{", "}", ";", ",", ":"];
pub const ASSIGNMENT: [&str; 1] = ["="];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum TokenCategory {
    Keyword,
    LogicalOperator,
    ArithmeticOperator,
    ComparisonOperator,
    Delimiter,
    Identifier,
    Assignment,
    Number,
    Unknown,
    Char,
    String,
}

impl TokenCategory {
    /// Every category, in the order reports list them.
    pub const ALL: [TokenCategory; 11] = [
        TokenCategory::Keyword,
        TokenCategory::LogicalOperator,
        TokenCategory::ArithmeticOperator,
        TokenCategory::ComparisonOperator,
        TokenCategory::Delimiter,
        TokenCategory::Identifier,
        TokenCategory::Assignment,
        TokenCategory::Number,
        TokenCategory::Unknown,
        TokenCategory::Char,
        TokenCategory::String,
    ];

    /// The two-letter code used in reports.
    pub fn code(&self) -> &'static str {
        match self {
            TokenCategory::Keyword => "PR",
            TokenCategory::LogicalOperator => "OL",
            TokenCategory::ArithmeticOperator => "OA",
            TokenCategory::ComparisonOperator => "OC",
            TokenCategory::Delimiter => "DL",
            TokenCategory::Identifier => "ID",
            TokenCategory::Assignment => "AS",
            TokenCategory::Number => "NU",
            TokenCategory::Unknown => "UK",
            TokenCategory::Char => "CT",
            TokenCategory::String => "ST",
        }
    }
}

impl Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: TokenCategory,
    pub value: String,
    pub position: Position,
}

impl Token {
    pub fn code(&self) -> &'static str {
        self.category.code()
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}] {}: {}", self.line(), self.column(), self.code(), self.value)
    }
}

/// Tokens of one analysis run, in scan order.
///
/// Only the lexer appends to a table; callers get a read-only view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    tokens: Vec<Token>,
}

impl SymbolTable {
    pub(crate) fn new() -> Self {
        SymbolTable { tokens: vec![] }
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn count(&self, category: TokenCategory) -> usize {
        self.tokens.iter().filter(|token| token.category == category).count()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl std::ops::Index<usize> for SymbolTable {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for SymbolTable {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
