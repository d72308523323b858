//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$category` - The TokenCategory
/// * `$value` - The token's literal text
/// * `$position` - The 1-based line/column position
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenCategory::Number, "42".to_string(), Position::new(1, 9));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($category:expr, $value:expr, $position:expr) => {
        Token {
            category: $category,
            value: $value,
            position: $position,
        }
    };
}
