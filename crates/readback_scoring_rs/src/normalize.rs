use std::sync::LazyLock;

use regex::Regex;

// Whitespace includes the byte order mark, as in JavaScript's `\s`.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_\s\x{FEFF}]").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x{FEFF}]+").unwrap());

/// Canonical comparison form: lower-cased, punctuation removed, whitespace
/// runs collapsed to one space and trimmed.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_owned()
}
