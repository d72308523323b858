use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// String literals come first so comment markers inside them are kept.
    static ref COMMENT_OR_STRING: Regex = Regex::new(r#"(?s)"[^"\n]*"|/\*.*?\*/|//[^\n]*"#).unwrap();
}

/// Removes `/* */` and `//` comments while keeping every token where it was.
///
/// A block comment is blanked out character for character, newlines kept, so
/// later tokens keep both their line and their column. Comment markers inside
/// `"..."` are left alone.
pub fn strip_comments(source: &str) -> String {
    COMMENT_OR_STRING
        .replace_all(source, |captures: &Captures| {
            let text = &captures[0];

            if text.starts_with('"') {
                String::from(text)
            } else if text.starts_with("/*") {
                text.chars().map(|c| if c == '\n' { '\n' } else { ' ' }).collect()
            } else {
                String::new()
            }
        })
        .into_owned()
}
