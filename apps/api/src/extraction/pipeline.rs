//! Orchestrates the extractors over one normalized copy of the document text.

use tracing::debug;

use crate::extraction::contact::{extract_contact_info, extract_contact_info_with_links};
use crate::extraction::education::extract_education;
use crate::extraction::experience::extract_experience;
use crate::extraction::normalize::normalize_text;
use crate::extraction::skills::extract_skills;
use crate::extraction::summary::extract_summary;
use crate::models::resume::{ContactInfo, RawDocument, ResumeData};

/// Converts extracted document text into a structured résumé record.
///
/// Total over all inputs: fields that cannot be found come back as `None` or empty.
pub fn extract_resume_data(text: &str) -> ResumeData {
    let normalized = normalize_text(text);
    let contact = extract_contact_info(&normalized);
    assemble(&normalized, contact)
}

/// Same as [`extract_resume_data`], with the document's hyperlinks used to fill
/// contact fields the text did not yield.
pub fn extract_resume_data_with_links(text: &str, links: &[String]) -> ResumeData {
    let normalized = normalize_text(text);
    let contact = extract_contact_info_with_links(&normalized, links);
    assemble(&normalized, contact)
}

impl RawDocument {
    pub fn extract(&self) -> ResumeData {
        if self.links.is_empty() {
            extract_resume_data(&self.text)
        } else {
            extract_resume_data_with_links(&self.text, &self.links)
        }
    }
}

fn assemble(normalized: &str, contact: ContactInfo) -> ResumeData {
    let data = ResumeData {
        contact,
        skills: extract_skills(normalized),
        experience: extract_experience(normalized),
        education: extract_education(normalized),
        summary: extract_summary(normalized),
    };

    debug!(
        text_len = normalized.len(),
        skills = data.skills.count,
        jobs = data.experience.count,
        degrees = data.education.count,
        has_summary = data.summary.is_some(),
        "Resume fields extracted"
    );

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SkillCategory;

    const SAMPLE_RESUME: &str = r#"
        Jane Marie Doe
        jane.doe@example.com  |  415-555-0199
        linkedin.com/in/janedoe   github.com/janedoe

        Professional Summary
        Backend engineer focused on reliable distributed systems.

        Experience
        Acme Corp   2019 - 2021
        Built the billing service in Rust and Python
        Moved workloads to AWS

        Globex 2016 - 2019
        Shipped the mobile app

        Education
        Bachelor of Science in Computer Science, 2012 - 2016

        Skills
        Rust, Python, PostgreSQL, Docker, Agile
    "#;

    #[test]
    fn test_full_resume() {
        let data = extract_resume_data(SAMPLE_RESUME);

        assert_eq!(data.contact.name.as_deref(), Some("Jane Marie Doe"));
        assert_eq!(data.contact.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(
            data.contact.linkedin.as_deref(),
            Some("https://linkedin.com/in/janedoe")
        );
        assert_eq!(
            data.contact.github.as_deref(),
            Some("https://github.com/janedoe")
        );

        assert_eq!(
            data.summary.as_deref(),
            Some("Backend engineer focused on reliable distributed systems.")
        );

        assert_eq!(data.experience.count, 2);
        assert_eq!(data.experience.parsed[0].duration.as_deref(), Some("2019 - 2021"));
        assert_eq!(data.experience.parsed[0].description.len(), 2);
        assert_eq!(data.experience.parsed[1].duration.as_deref(), Some("2016 - 2019"));

        assert_eq!(data.education.count, 1);
        assert_eq!(data.education.parsed[0].year.as_deref(), Some("2016"));

        let programming = &data.skills.categorized[&SkillCategory::Programming];
        assert!(programming.contains(&"rust".to_string()));
        assert!(programming.contains(&"python".to_string()));
        assert!(data.skills.categorized[&SkillCategory::Cloud].contains(&"aws".to_string()));
        assert_eq!(data.skills.count, data.skills.all.len());
    }

    #[test]
    fn test_empty_text_degrades_to_defaults() {
        let data = extract_resume_data("");
        assert_eq!(data, ResumeData::default());
    }

    #[test]
    fn test_arbitrary_input_never_panics() {
        let inputs = [
            "\u{0}\u{1}\u{2}",
            "@@@@ .... //// ((((",
            "Experience\n\n\n",
            "Summary",
            "Education\nBachelor",
            "ünïcödé Ñame\n履歴書\n📞 +1 (555) 010-9999",
            "1900 2099 1899 2100",
        ];
        for input in inputs {
            let data = extract_resume_data(input);
            assert_eq!(data.skills.count, data.skills.all.len());
            assert_eq!(data.experience.count, data.experience.parsed.len());
            assert_eq!(data.education.count, data.education.parsed.len());
        }
    }

    #[test]
    fn test_links_only_fill_gaps() {
        let doc = RawDocument {
            text: "Jane Doe\nlinkedin.com/in/janedoe".to_string(),
            links: vec![
                "https://www.linkedin.com/in/other".to_string(),
                "https://github.com/janedoe".to_string(),
            ],
        };
        let data = doc.extract();
        assert_eq!(
            data.contact.linkedin.as_deref(),
            Some("https://linkedin.com/in/janedoe")
        );
        assert_eq!(
            data.contact.github.as_deref(),
            Some("https://github.com/janedoe")
        );
    }

    #[test]
    fn test_text_only_entry_point_ignores_links() {
        let text = "Jane Doe";
        assert_eq!(extract_resume_data(text).contact.github, None);
        let links = vec!["https://github.com/janedoe".to_string()];
        assert!(extract_resume_data_with_links(text, &links).contact.github.is_some());
    }
}
