use std::collections::BTreeMap;

use crate::models::resume::{SkillCategory, SkillsResult};

/// Skill taxonomy, in reporting order. Each keyword belongs to exactly one category.
pub const SKILL_TAXONOMY: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Programming,
        &[
            "javascript", "python", "java", "c++", "c#", "php", "ruby", "go", "rust", "swift",
            "kotlin", "scala", "typescript", "r", "matlab", "perl", "shell", "bash",
        ],
    ),
    (
        SkillCategory::Frameworks,
        &[
            "react", "angular", "vue", "node.js", "express", "django", "flask", "spring",
            "laravel", "rails", "asp.net", ".net", "jquery", "bootstrap", "tailwind",
        ],
    ),
    (
        SkillCategory::Databases,
        &[
            "mysql", "postgresql", "mongodb", "sqlite", "redis", "cassandra", "oracle",
            "sql server", "dynamodb", "elasticsearch", "firebase",
        ],
    ),
    (
        SkillCategory::Cloud,
        &[
            "aws", "azure", "gcp", "google cloud", "heroku", "digitalocean", "kubernetes",
            "docker", "jenkins", "terraform", "ansible",
        ],
    ),
    (
        SkillCategory::Tools,
        &[
            "git", "github", "gitlab", "bitbucket", "jira", "confluence", "slack", "trello",
            "figma", "sketch", "photoshop", "illustrator", "excel", "powerpoint",
        ],
    ),
    (
        SkillCategory::Methodologies,
        &[
            "agile", "scrum", "kanban", "devops", "ci/cd", "tdd", "bdd", "microservices",
            "restful api", "graphql", "machine learning", "ai", "data science",
        ],
    ),
];

/// Matches the text against [`SKILL_TAXONOMY`] by case-insensitive substring.
///
/// Categories without a match are left out of `categorized`.
pub fn extract_skills(text: &str) -> SkillsResult {
    let lower = text.to_lowercase();
    let mut all = Vec::new();
    let mut categorized = BTreeMap::new();

    for (category, keywords) in SKILL_TAXONOMY {
        let found: Vec<String> = keywords
            .iter()
            .filter(|keyword| lower.contains(*keyword))
            .map(|keyword| keyword.to_string())
            .collect();

        if found.is_empty() {
            continue;
        }
        all.extend(found.iter().cloned());
        categorized.insert(*category, found);
    }

    SkillsResult {
        count: all.len(),
        all,
        categorized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_and_aws_are_categorized() {
        let skills = extract_skills("Built data pipelines in Python on AWS");
        assert!(skills.categorized[&SkillCategory::Programming].contains(&"python".to_string()));
        assert!(skills.categorized[&SkillCategory::Cloud].contains(&"aws".to_string()));
        assert!(skills.count >= 2);
        assert_eq!(skills.count, skills.all.len());
    }

    #[test]
    fn test_empty_categories_are_omitted() {
        let skills = extract_skills("AWS");
        assert_eq!(skills.all, vec!["aws".to_string()]);
        assert_eq!(skills.categorized.len(), 1);
        assert!(skills.categorized.contains_key(&SkillCategory::Cloud));
        assert!(!skills.categorized.contains_key(&SkillCategory::Programming));
    }

    #[test]
    fn test_all_follows_taxonomy_order() {
        let skills = extract_skills("Scrum master, PostgreSQL and Django");
        let scrum = skills.all.iter().position(|s| s == "scrum").unwrap();
        let django = skills.all.iter().position(|s| s == "django").unwrap();
        let postgres = skills.all.iter().position(|s| s == "postgresql").unwrap();
        assert!(django < postgres);
        assert!(postgres < scrum);
    }

    #[test]
    fn test_substring_matches_are_reported() {
        // "javascript" also contains "java"; both are reported.
        let skills = extract_skills("JavaScript");
        let programming = &skills.categorized[&SkillCategory::Programming];
        assert!(programming.contains(&"javascript".to_string()));
        assert!(programming.contains(&"java".to_string()));
    }

    #[test]
    fn test_empty_text_has_no_skills() {
        let skills = extract_skills("");
        assert!(skills.all.is_empty());
        assert!(skills.categorized.is_empty());
        assert_eq!(skills.count, 0);
    }

    #[test]
    fn test_keywords_are_unique_across_categories() {
        let mut seen = std::collections::HashSet::new();
        for (_, keywords) in SKILL_TAXONOMY {
            for keyword in *keywords {
                assert!(seen.insert(*keyword), "duplicate keyword {keyword}");
            }
        }
    }
}
