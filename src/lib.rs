#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};
use crate::lexer::{comments::strip_comments, lexer::tokenize, tokens::SymbolTable};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;

/// 1-based line and column of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Strips comments from raw source text, then tokenizes it.
pub fn analyze(source: &str) -> Result<SymbolTable, Error> {
    tokenize(&strip_comments(source))
}

/// Returns the text of a 1-based line, without its line ending.
pub fn get_line(content: &str, line: usize) -> Option<&str> {
    content.lines().nth(line.checked_sub(1)?)
}

/// Renders an error with the offending line and a caret under its column.
pub fn display_error(error: &Error, content: &str, file: &str) -> String {
    /*
        Error: UnknownToken
        -> test.c
           |
        20 | int a = #;
           | --------^
    */

    let position = error.get_position();
    let line_text = get_line(content, position.line).unwrap_or_default();

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {} `{}` at {}\n", error.get_error_name(), error.get_literal(), position));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = position.column.saturating_sub(removed_whitespace).max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
