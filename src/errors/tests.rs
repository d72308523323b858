//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_unknown_token_error() {
    let error = Error::new(
        ErrorImpl::UnknownToken {
            token: "@".to_string(),
        },
        Position::new(3, 7),
    );

    assert_eq!(error.get_error_name(), "UnknownToken");
    assert_eq!(error.get_literal(), "@");
    assert_eq!(error.get_position(), &Position::new(3, 7));
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_invalid_char_literal_error() {
    let error = Error::new(
        ErrorImpl::InvalidCharLiteral {
            literal: "'ab'".to_string(),
        },
        Position::new(1, 10),
    );

    assert_eq!(error.get_error_name(), "InvalidCharLiteral");
    assert_eq!(error.get_literal(), "'ab'");

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("'ab'")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnknownToken {
            token: "@".to_string(),
        },
        Position::new(2, 4),
    );
    assert_eq!(error.to_string(), "unknown token: \"@\" at line 2, column 4");

    let error = Error::new(
        ErrorImpl::InvalidCharLiteral {
            literal: "'ab'".to_string(),
        },
        Position::new(5, 1),
    );
    assert_eq!(error.to_string(), "invalid char literal: 'ab' at line 5, column 1");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}

    let error = Error::new(
        ErrorImpl::UnknownToken {
            token: "$".to_string(),
        },
        Position::new(1, 1),
    );
    takes_error(&error);
}
