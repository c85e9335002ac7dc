use once_cell::sync::Lazy;
use regex::Regex;

/// A four-digit year between 1900 and 2099.
static YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("valid year pattern"));

/// Scanner state for a single section lookup. Once `Stopped`, a later heading
/// never reopens the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Searching,
    Extracting,
    Stopped,
}

/// Returns the body lines of the first section whose heading line contains any
/// of `start_keywords`.
///
/// The heading itself is not part of the body. The body ends at the first line
/// containing any of `end_keywords` (excluded) or at end of text. Matching is a
/// case-insensitive substring test; body lines are trimmed and empty ones skipped.
pub fn extract_section(text: &str, start_keywords: &[&str], end_keywords: &[&str]) -> Vec<String> {
    let mut state = ScanState::Searching;
    let mut body = Vec::new();

    for line in text.split('\n') {
        let lower = line.to_lowercase();
        match state {
            ScanState::Searching => {
                if contains_any(&lower, start_keywords) {
                    state = ScanState::Extracting;
                }
            }
            ScanState::Extracting => {
                if contains_any(&lower, end_keywords) {
                    state = ScanState::Stopped;
                    continue;
                }
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    body.push(trimmed.to_string());
                }
            }
            ScanState::Stopped => break,
        }
    }

    body
}

/// Case-insensitive substring test; `lower` must already be lowercased.
pub(crate) fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|keyword| lower.contains(keyword.to_lowercase().as_str()))
}

/// All year tokens on a line, in order.
pub(crate) fn year_tokens(line: &str) -> Vec<&str> {
    YEAR.find_iter(line).map(|m| m.as_str()).collect()
}

pub(crate) fn has_year(line: &str) -> bool {
    YEAR.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &[&str] = &["experience"];
    const END: &[&str] = &["education"];

    #[test]
    fn test_no_heading_yields_empty() {
        assert!(extract_section("Jane Doe\nSkills: Rust", START, END).is_empty());
        assert!(extract_section("", START, END).is_empty());
    }

    #[test]
    fn test_heading_line_is_consumed() {
        let text = "Jane Doe\nWork Experience\nAcme Corp 2019\nBuilt APIs";
        assert_eq!(
            extract_section(text, START, END),
            vec!["Acme Corp 2019", "Built APIs"]
        );
    }

    #[test]
    fn test_end_keyword_line_is_excluded_and_stops() {
        let text = "EXPERIENCE\nAcme Corp\nEducation\nState University";
        assert_eq!(extract_section(text, START, END), vec!["Acme Corp"]);
    }

    #[test]
    fn test_section_runs_to_end_of_text_without_end_keywords() {
        let text = "Experience\nAcme Corp\nEducation";
        assert_eq!(extract_section(text, START, &[]), vec!["Acme Corp", "Education"]);
    }

    #[test]
    fn test_extraction_does_not_resume_after_stop() {
        let text = "Experience\nAcme\nEducation\nState U\nMore Experience\nGlobex";
        assert_eq!(extract_section(text, START, END), vec!["Acme"]);
    }

    #[test]
    fn test_start_keyword_inside_body_is_kept() {
        let text = "Experience\nAcme\nExperience with Rust\nEducation";
        assert_eq!(
            extract_section(text, START, END),
            vec!["Acme", "Experience with Rust"]
        );
    }

    #[test]
    fn test_year_tokens_in_order() {
        assert_eq!(year_tokens("Acme 2019 - 2021"), vec!["2019", "2021"]);
        assert!(year_tokens("Room 12345 in 1850").is_empty());
        assert!(has_year("since 1999"));
        assert!(!has_year("v20.10"));
    }
}
