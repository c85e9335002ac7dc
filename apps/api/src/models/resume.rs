use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Text and hyperlinks pulled out of an uploaded document, before any field extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDocument {
    pub text: String,
    #[serde(default)]
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

/// Closed set of skill categories. Declaration order is the order categories
/// appear in `SkillsResult::all` and in the serialized `categorized` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    Frameworks,
    Databases,
    Cloud,
    Tools,
    Methodologies,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "programming",
            SkillCategory::Frameworks => "frameworks",
            SkillCategory::Databases => "databases",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Tools => "tools",
            SkillCategory::Methodologies => "methodologies",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsResult {
    pub all: Vec<String>,
    /// Only categories with at least one match are present.
    pub categorized: BTreeMap<SkillCategory, Vec<String>>,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobEntry {
    pub title: Option<String>,
    pub company: Option<String>,
    /// Every year on the header line, joined with " - ".
    pub duration: Option<String>,
    pub description: Vec<String>,
    pub raw_line: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub institution: Option<String>,
    /// Last year token on the line.
    pub year: Option<String>,
    pub raw_line: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceSection {
    pub raw: Vec<String>,
    pub parsed: Vec<JobEntry>,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationSection {
    pub raw: Vec<String>,
    pub parsed: Vec<EducationEntry>,
    pub count: usize,
}

/// The structured résumé record produced by the extraction pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    pub contact: ContactInfo,
    pub skills: SkillsResult,
    pub experience: ExperienceSection,
    pub education: EducationSection,
    pub summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_entry_serializes_raw_line_in_camel_case() {
        let job = JobEntry {
            duration: Some("2019 - 2021".to_string()),
            raw_line: "Acme Corp 2019 - 2021".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["rawLine"], "Acme Corp 2019 - 2021");
        assert!(json["title"].is_null());
        assert!(json.get("raw_line").is_none());
    }

    #[test]
    fn test_categorized_keys_serialize_as_category_names() {
        let mut categorized = BTreeMap::new();
        categorized.insert(SkillCategory::Cloud, vec!["aws".to_string()]);
        categorized.insert(SkillCategory::Programming, vec!["python".to_string()]);
        let skills = SkillsResult {
            all: vec!["python".to_string(), "aws".to_string()],
            categorized,
            count: 2,
        };
        let json = serde_json::to_string(&skills).unwrap();
        assert!(json.contains(r#""programming":["python"]"#));
        assert!(json.contains(r#""cloud":["aws"]"#));
        assert!(json.find("programming").unwrap() < json.find("cloud").unwrap());
    }

    #[test]
    fn test_category_order_follows_declaration() {
        assert!(SkillCategory::Programming < SkillCategory::Frameworks);
        assert!(SkillCategory::Tools < SkillCategory::Methodologies);
        assert_eq!(SkillCategory::Databases.as_str(), "databases");
    }

    #[test]
    fn test_raw_document_links_default_to_empty() {
        let doc: RawDocument = serde_json::from_str(r#"{"text": "Jane Doe"}"#).unwrap();
        assert_eq!(doc.text, "Jane Doe");
        assert!(doc.links.is_empty());
    }
}
