use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::{TokenCategory, ARITH_OPS, ASSIGNMENT, COMP_OPS, DELIMITERS, KEYWORDS, LOGICAL_OPS};

/// How a rule recognises its lexeme.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Whole words only, e.g. keywords.
    Words(&'static [&'static str]),
    /// Fixed symbols, tried longest first.
    Symbols(&'static [&'static str]),
    Pattern(&'static str),
}

impl Matcher {
    pub fn to_pattern(&self) -> String {
        match self {
            Matcher::Words(words) => format!("\\b(?:{})\\b", alternation(words)),
            Matcher::Symbols(symbols) => alternation(symbols),
            Matcher::Pattern(pattern) => String::from(*pattern),
        }
    }
}

fn alternation(literals: &[&str]) -> String {
    let mut sorted = literals.to_vec();
    // stable, so equal lengths keep their listed order
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));

    sorted.iter().map(|literal| regex::escape(literal)).collect::<Vec<String>>().join("|")
}

/// What the lexer does with a lexeme once a rule claims it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Emit(TokenCategory),
    Skip,
}

#[derive(Debug, Clone, Copy)]
pub struct TokenRule {
    pub name: &'static str,
    pub matcher: Matcher,
    pub action: Action,
}

/// Rules in priority order. At any scan position the first rule that matches wins.
///
/// Comments sit ahead of the arithmetic operators and comparisons ahead of the
/// logical operators so that `//`, `/*` and `!=` are never split on their
/// one-character prefixes.
pub const RULES: [TokenRule; 13] = [
    TokenRule { name: "kw", matcher: Matcher::Words(&KEYWORDS), action: Action::Emit(TokenCategory::Keyword) },
    TokenRule { name: "comment", matcher: Matcher::Pattern(r"//.*$|/\*.*?\*/"), action: Action::Skip },
    TokenRule { name: "comp_op", matcher: Matcher::Symbols(&COMP_OPS), action: Action::Emit(TokenCategory::ComparisonOperator) },
    TokenRule { name: "log_op", matcher: Matcher::Symbols(&LOGICAL_OPS), action: Action::Emit(TokenCategory::LogicalOperator) },
    TokenRule { name: "arith_op", matcher: Matcher::Symbols(&ARITH_OPS), action: Action::Emit(TokenCategory::ArithmeticOperator) },
    TokenRule { name: "delim", matcher: Matcher::Symbols(&DELIMITERS), action: Action::Emit(TokenCategory::Delimiter) },
    TokenRule { name: "assign", matcher: Matcher::Symbols(&ASSIGNMENT), action: Action::Emit(TokenCategory::Assignment) },
    TokenRule { name: "string", matcher: Matcher::Pattern(r#""(?:.*?)""#), action: Action::Emit(TokenCategory::String) },
    TokenRule { name: "char", matcher: Matcher::Pattern(r"'(?:.*?)'"), action: Action::Emit(TokenCategory::Char) },
    TokenRule { name: "id", matcher: Matcher::Pattern(r"\b[a-zA-Z_][a-zA-Z0-9_]*\b"), action: Action::Emit(TokenCategory::Identifier) },
    TokenRule { name: "number", matcher: Matcher::Pattern(r"\b[0-9]+(?:\.[0-9]+)?\b"), action: Action::Emit(TokenCategory::Number) },
    TokenRule { name: "blank", matcher: Matcher::Pattern(r"^\s*$"), action: Action::Skip },
    TokenRule { name: "unknown", matcher: Matcher::Pattern(r"[^a-zA-Z0-9\s]+"), action: Action::Emit(TokenCategory::Unknown) },
];

lazy_static! {
    /// Every rule folded into one pattern of named groups. Alternation is
    /// leftmost-first, so group order is rule priority.
    pub static ref COMBINED: Regex = {
        let pattern = RULES
            .iter()
            .map(|rule| format!("(?P<{}>{})", rule.name, rule.matcher.to_pattern()))
            .collect::<Vec<String>>()
            .join("|");

        Regex::new(&pattern).unwrap()
    };
}
