use once_cell::sync::Lazy;
use regex::Regex;

/// Whitespace other than the line break itself.
static INLINE_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\S\n]+").expect("valid inline whitespace pattern"));

/// Canonical text form shared by every extractor.
///
/// Runs of spaces/tabs collapse to one space, each line is trimmed, blank
/// lines are dropped, and the result carries no leading or trailing whitespace.
/// Line breaks are kept: the section scanners work line by line.
pub fn normalize_text(raw: &str) -> String {
    raw.lines()
        .map(|line| INLINE_WHITESPACE.replace_all(line.trim(), " "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
