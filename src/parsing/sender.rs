//! Sender name cleanup.

use std::sync::LazyLock;

use regex::Regex;

static PHONE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\d+\s*").expect("valid phone regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Normalizes a captured sender into a canonical participant name.
///
/// Steps, in order: trim, drop a leading `+`-prefixed phone token, drop one
/// leading `~`, collapse whitespace runs, remove `<` and `>`, trim again.
/// Returns `None` when only whitespace or punctuation is left.
pub fn normalize_sender(raw: &str) -> Option<String> {
    let name = raw.trim();
    let name = PHONE_PREFIX.replace(name, "");
    let name = name.strip_prefix('~').unwrap_or(&*name);
    let name = WHITESPACE_RUN.replace_all(name, " ");
    let name: String = name.chars().filter(|c| !matches!(c, '<' | '>')).collect();
    let name = name.trim();

    if name
        .chars()
        .all(|c| c.is_whitespace() || c.is_ascii_punctuation())
    {
        return None;
    }

    Some(name.to_string())
}
