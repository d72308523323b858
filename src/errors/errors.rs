use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A lexical error and where it happened. Either kind aborts the analysis run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} at {}", .internal_error, .position)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The offending literal text.
    pub fn get_literal(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownToken { token } => token,
            ErrorImpl::InvalidCharLiteral { literal } => literal,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownToken { .. } => "UnknownToken",
            ErrorImpl::InvalidCharLiteral { .. } => "InvalidCharLiteral",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnknownToken { .. } => ErrorTip::None,
            ErrorImpl::InvalidCharLiteral { literal } => ErrorTip::Suggestion(format!(
                "Invalid char literal: `{}`, a char holds at most one character, use double quotes for strings",
                literal
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unknown token: {token:?}")]
    UnknownToken { token: String },
    #[error("invalid char literal: {literal}")]
    InvalidCharLiteral { literal: String },
}
