//! Plain-text reporting over a finished symbol table: per-category
//! frequencies, a bar chart, and the positioned token list.

pub mod report;
