use crate::extraction::sections::{contains_any, extract_section, year_tokens};
use crate::models::resume::{EducationEntry, EducationSection};

pub const EDUCATION_HEADINGS: &[&str] = &[
    "education",
    "academic",
    "university",
    "college",
    "degree",
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "certification",
    "diploma",
];

pub const EDUCATION_STOP_HEADINGS: &[&str] = &["experience", "skills", "projects"];

const DEGREE_KEYWORDS: &[&str] = &["bachelor", "master", "phd", "doctorate", "diploma", "certificate"];

pub fn extract_education(text: &str) -> EducationSection {
    let raw = extract_section(text, EDUCATION_HEADINGS, EDUCATION_STOP_HEADINGS);
    let parsed = parse_education_entries(&raw);
    EducationSection {
        count: parsed.len(),
        raw,
        parsed,
    }
}

/// One entry per line naming a degree; other lines are skipped.
pub fn parse_education_entries(lines: &[String]) -> Vec<EducationEntry> {
    lines
        .iter()
        .filter(|line| contains_any(&line.to_lowercase(), DEGREE_KEYWORDS))
        .map(|line| EducationEntry {
            degree: line.trim().to_string(),
            institution: None,
            year: extract_year(line),
            raw_line: line.clone(),
        })
        .collect()
}

/// The last year on the line, which is the completion year for ranges like "2012 - 2016".
pub fn extract_year(line: &str) -> Option<String> {
    year_tokens(line).last().map(|year| year.to_string())
}
