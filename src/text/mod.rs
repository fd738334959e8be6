//! Query text preparation: normalization and employee-id extraction

use regex::Regex;
use std::sync::OnceLock;

/// Normalize a query for vector similarity: lowercase, trim, and replace
/// every character outside `[a-z0-9\s]` with a space.
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

fn employee_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"EMP[0-9]+").expect("employee id pattern is valid"))
}

/// Extract the first employee identifier (`EMP` followed by digits) from
/// raw text, matching case-insensitively. Later matches are ignored.
pub fn extract_employee_id(text: &str) -> Option<String> {
    let upper = text.to_uppercase();
    employee_id_pattern()
        .find(&upper)
        .map(|m| m.as_str().to_string())
}
