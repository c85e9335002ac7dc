use crate::extraction::sections::{contains_any, extract_section, has_year, year_tokens};
use crate::models::resume::{ExperienceSection, JobEntry};

pub const EXPERIENCE_HEADINGS: &[&str] = &[
    "experience",
    "work history",
    "employment",
    "career",
    "professional experience",
    "work experience",
    "employment history",
];

pub const EXPERIENCE_STOP_HEADINGS: &[&str] = &["education", "skills", "projects", "certifications"];

/// Substrings suggesting a line names an employer.
const COMPANY_INDICATORS: &[&str] = &[
    "inc",
    "corp",
    "llc",
    "ltd",
    "company",
    "technologies",
    "solutions",
];

pub fn extract_experience(text: &str) -> ExperienceSection {
    let raw = extract_section(text, EXPERIENCE_HEADINGS, EXPERIENCE_STOP_HEADINGS);
    let parsed = parse_job_entries(&raw);
    ExperienceSection {
        count: parsed.len(),
        raw,
        parsed,
    }
}

/// Splits section lines into jobs. A header line (a year or a company
/// indicator) opens a new job; other lines extend the open job's description.
/// Lines before the first header are dropped.
pub fn parse_job_entries(lines: &[String]) -> Vec<JobEntry> {
    let mut jobs = Vec::new();
    let mut current: Option<JobEntry> = None;

    for line in lines {
        if is_job_header(line) {
            if let Some(job) = current.take() {
                jobs.push(job);
            }
            current = Some(parse_job_header(line));
            continue;
        }

        let trimmed = line.trim();
        if let Some(job) = current.as_mut() {
            if !trimmed.is_empty() {
                job.description.push(trimmed.to_string());
            }
        }
    }

    jobs.extend(current);
    jobs
}

fn is_job_header(line: &str) -> bool {
    has_year(line) || contains_any(&line.to_lowercase(), COMPANY_INDICATORS)
}

/// Title and company are left unresolved; only the duration is read off the line.
fn parse_job_header(line: &str) -> JobEntry {
    let years = year_tokens(line);
    JobEntry {
        title: None,
        company: None,
        duration: (!years.is_empty()).then(|| years.join(" - ")),
        description: Vec::new(),
        raw_line: line.to_string(),
    }
}
