use regex::Match;
use tracing::{debug, info, warn};

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_TOKEN};

use super::{
    grammar::{Action, COMBINED, RULES},
    tokens::{SymbolTable, Token, TokenCategory},
};

pub struct Lexer {
    table: SymbolTable,
    line: usize,
}

impl Lexer {
    pub fn new() -> Lexer {
        Lexer {
            table: SymbolTable::new(),
            line: 0,
        }
    }

    pub fn scan_line(&mut self, line: &str) -> Result<(), Error> {
        self.line += 1;

        let before = self.table.len();
        let mut columns = Columns::new(line);
        let mut cursor = 0;

        for captures in COMBINED.captures_iter(line) {
            let Some((action, matched)) = RULES
                .iter()
                .find_map(|rule| captures.name(rule.name).map(|m| (rule.action, m)))
            else {
                continue;
            };

            self.check_gap(&mut columns, cursor, matched.start())?;
            cursor = matched.end();

            if let Action::Emit(category) = action {
                self.emit(&mut columns, category, matched)?;
            }
        }

        self.check_gap(&mut columns, cursor, line.len())?;

        debug!(line = self.line, tokens = self.table.len() - before, "scanned line");
        Ok(())
    }

    /// Text between two matches must be whitespace. Anything else is a run no
    /// rule could claim at its position (`1x`, for instance), reported up to
    /// the next whitespace.
    fn check_gap(&self, columns: &mut Columns, from: usize, to: usize) -> Result<(), Error> {
        let line = columns.line;
        let gap = &line[from..to];

        let Some(offset) = gap.find(|c: char| !c.is_whitespace()) else {
            return Ok(());
        };

        let start = from + offset;
        let end = line[start..]
            .find(char::is_whitespace)
            .map_or(line.len(), |len| start + len);

        Err(self.fail(ErrorImpl::UnknownToken { token: String::from(&line[start..end]) }, columns.at(start)))
    }

    fn emit(&mut self, columns: &mut Columns, category: TokenCategory, matched: Match) -> Result<(), Error> {
        let value = matched.as_str();
        let column = columns.at(matched.start());

        match category {
            TokenCategory::Unknown => {
                return Err(self.fail(ErrorImpl::UnknownToken { token: String::from(value) }, column));
            }
            TokenCategory::Char if !is_valid_char_literal(value) => {
                return Err(self.fail(ErrorImpl::InvalidCharLiteral { literal: String::from(value) }, column));
            }
            _ => {}
        }

        let position = Position::new(self.line, column);
        self.table.push(MK_TOKEN!(category, String::from(value), position));
        Ok(())
    }

    fn fail(&self, error: ErrorImpl, column: usize) -> Error {
        let position = Position::new(self.line, column);
        warn!(%position, "{}", error);
        Error::new(error, position)
    }

    pub fn finish(self) -> SymbolTable {
        self.table
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new()
    }
}

/// Running 1-based column over one line. Matches arrive in order, so each
/// lookup only counts the characters since the previous one.
struct Columns<'a> {
    line: &'a str,
    byte: usize,
    column: usize,
}

impl<'a> Columns<'a> {
    fn new(line: &'a str) -> Self {
        Columns { line, byte: 0, column: 1 }
    }

    fn at(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            return self.line[..byte].chars().count() + 1;
        }

        self.column += self.line[self.byte..byte].chars().count();
        self.byte = byte;
        self.column
    }
}

/// `''` or a single enclosed character.
fn is_valid_char_literal(value: &str) -> bool {
    let inner = &value[1..value.len() - 1];
    inner.chars().count() <= 1
}

/// Scans `source` line by line into a symbol table.
///
/// Comments should already be stripped (see [`super::comments::strip_comments`]),
/// though comment-shaped text left on a single line is still skipped. The
/// first invalid lexeme aborts the whole run; no partial table is returned.
pub fn tokenize(source: &str) -> Result<SymbolTable, Error> {
    let mut lex = Lexer::new();

    for line in source.lines() {
        lex.scan_line(line)?;
    }

    info!(lines = lex.line, tokens = lex.table.len(), "tokenized source");
    Ok(lex.finish())
}
