use crate::extraction::sections::contains_any;

pub const SUMMARY_HEADINGS: &[&str] = &[
    "summary",
    "objective",
    "profile",
    "about",
    "overview",
    "introduction",
    "professional summary",
    "career objective",
    "personal statement",
];

/// Headings that end a summary early.
const SUMMARY_STOP_HEADINGS: &[&str] = &["experience", "education", "skills"];

/// How many lines after the heading may belong to the summary.
const SUMMARY_MAX_LINES: usize = 7;

/// Joins the lines following the first summary-like heading.
///
/// Only the first heading is considered: if it is followed directly by another
/// section, the result is `None` even when a later heading would have matched.
pub fn extract_summary(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let heading = lines
        .iter()
        .position(|line| contains_any(&line.to_lowercase(), SUMMARY_HEADINGS))?;

    let mut collected = Vec::new();
    for line in lines.iter().skip(heading + 1).take(SUMMARY_MAX_LINES) {
        let trimmed = line.trim();
        if contains_any(&trimmed.to_lowercase(), SUMMARY_STOP_HEADINGS) {
            break;
        }
        if !trimmed.is_empty() {
            collected.push(trimmed);
        }
    }

    let summary = collected.join(" ");
    let summary = summary.trim();
    (!summary.is_empty()).then(|| summary.to_string())
}
