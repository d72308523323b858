//! Lexical analysis module.
//!
//! This module turns pre-processed source text into a symbol table of
//! classified tokens. It handles:
//!
//! - The fixed token grammar and its priority order
//! - Line-by-line scanning with 1-based line/column positions
//! - Fail-fast rejection of unknown lexemes and malformed char literals
//! - Comment stripping that preserves line numbering

pub mod comments;
pub mod grammar;
pub mod lexer;
pub mod tokens;
