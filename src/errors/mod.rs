//! Error types for lexical analysis.
//!
//! This module defines the errors a tokenizer run can fail with. It includes:
//!
//! - Error structures with line/column information
//! - The unknown-token and invalid-char-literal variants
//! - Helpful error names and suggestions for display

pub mod errors;

#[cfg(test)]
mod tests;
