use std::fmt::Display;

use crate::lexer::tokens::{SymbolTable, Token, TokenCategory};

const BAR_WIDTH: usize = 40;

/// Token frequencies and the token list of one successful analysis run.
pub struct Report<'a> {
    counts: Vec<(TokenCategory, usize)>,
    tokens: &'a [Token],
}

impl<'a> Report<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        let counts = TokenCategory::ALL
            .iter()
            .map(|category| (*category, table.count(*category)))
            .collect();

        Report {
            counts,
            tokens: table.tokens(),
        }
    }

    /// Counts per category, every category present, in report order.
    pub fn counts(&self) -> &[(TokenCategory, usize)] {
        &self.counts
    }

    pub fn count(&self, category: TokenCategory) -> usize {
        self.counts
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, count)| *count)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// One `[line,column] CODE: literal` line per token.
    pub fn token_list(&self) -> String {
        let mut out = String::new();
        for token in self.tokens {
            out.push_str(&format!("{}\n", token));
        }
        out
    }

    pub fn chart(&self) -> String {
        let max = self.counts.iter().map(|(_, count)| *count).max().unwrap_or(0);

        let mut out = String::new();
        for (category, count) in &self.counts {
            out.push_str(&format!("{} | {} {}\n", category.code(), "#".repeat(bar_len(*count, max)), count));
        }
        out
    }
}

fn bar_len(count: usize, max: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }

    (count * BAR_WIDTH / max).max(1)
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Lexical analysis results:")?;
        writeln!(f)?;

        writeln!(f, "Token frequency:")?;
        for (category, count) in &self.counts {
            writeln!(f, "{}: {}", category.code(), count)?;
        }
        writeln!(f)?;
        writeln!(f, "Total tokens: {}", self.total())?;
        writeln!(f)?;

        write!(f, "{}", self.chart())?;
        writeln!(f)?;

        writeln!(f, "Token list:")?;
        write!(f, "{}", self.token_list())
    }
}
