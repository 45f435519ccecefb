//! Search query assembly
//!
//! Queries are plain string concatenation. No escaping or validation is
//! performed; whatever the user typed goes to the API as-is.

use crate::constants::github::DEFAULT_LANGUAGE;

/// Join positional keyword arguments with the `+` separator GitHub expects
pub fn join_keywords(keywords: &[String]) -> String {
    keywords.join("+")
}

/// Build the effective search query
///
/// Appends the default language qualifier unless `all_languages` is set.
pub fn build_query(keywords: &str, all_languages: bool) -> String {
    if all_languages {
        keywords.to_string()
    } else {
        format!("{}+language:{}", keywords, DEFAULT_LANGUAGE)
    }
}
