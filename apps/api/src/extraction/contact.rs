//! Contact details: email, phone, profile URLs, personal site and a best-guess name.
//!
//! Every lookup is independent and reads the same normalized text; a lookup
//! that finds nothing leaves its field `None`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::ContactInfo;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email pattern")
});

static LINKEDIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)linkedin\.com/in/[A-Za-z0-9_-]+").expect("valid linkedin pattern")
});

static GITHUB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)github\.com/[A-Za-z0-9_-]+").expect("valid github pattern"));

static WEBSITE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?[A-Za-z0-9_-]+\.[A-Za-z]{2,}(?:/[A-Za-z0-9_-]*)?")
        .expect("valid website pattern")
});

/// Two to four capitalized words and nothing else on the line.
static NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][a-z]+(?: [A-Z][a-z]+){1,3}$").expect("valid name pattern")
});

/// Year tokens and separators only, such as "2019-2021" or "2016 2019".
static YEAR_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:19|20)\d{2}(?:[-. ]+(?:19|20)\d{2})*$").expect("valid year span pattern")
});

/// Phone formats in priority order. Separators never cross a line break.
/// The first format with a plausible match wins.
static PHONE_FORMATS: Lazy<Vec<PhoneFormat>> = Lazy::new(|| {
    vec![
        PhoneFormat {
            label: "us",
            pattern: Regex::new(r"(\+?\d{1,3}[-. ]?)?\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}")
                .expect("valid US phone pattern"),
        },
        PhoneFormat {
            label: "international",
            pattern: Regex::new(r"\+?\d{1,3}[-. ]?\d{1,4}[-. ]?\d{1,4}[-. ]?\d{1,9}")
                .expect("valid international phone pattern"),
        },
    ]
});

/// A phone number carries at least this many digits. Keeps single years and
/// short counts from being reported through the loose international format.
const MIN_PHONE_DIGITS: usize = 7;

/// Hosts never reported as a personal website.
const NON_PERSONAL_HOSTS: &[&str] = &["linkedin.com", "github.com", "facebook.com", "twitter.com"];

/// Lines carrying these are résumé boilerplate, not a name.
const NAME_SKIP_KEYWORDS: &[&str] = &[
    "resume",
    "cv",
    "curriculum vitae",
    "phone",
    "email",
    "address",
];

const NAME_SCAN_LINES: usize = 5;
const NAME_MAX_LEN: usize = 50;

struct PhoneFormat {
    label: &'static str,
    pattern: Regex,
}

pub fn extract_contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        linkedin: extract_linkedin(text),
        github: extract_github(text),
        website: extract_website(text),
    }
}

/// Like [`extract_contact_info`], then fills still-missing email and profile
/// URLs from the document's hyperlinks. Values found in the text always win.
pub fn extract_contact_info_with_links(text: &str, links: &[String]) -> ContactInfo {
    let from_text = extract_contact_info(text);
    let links: Vec<&str> = links.iter().map(|l| l.trim()).filter(|l| !l.is_empty()).collect();

    ContactInfo {
        email: from_text
            .email
            .or_else(|| links.iter().find_map(|l| mailto_address(l))),
        linkedin: from_text
            .linkedin
            .or_else(|| links.iter().find_map(|l| extract_linkedin(l))),
        github: from_text
            .github
            .or_else(|| links.iter().find_map(|l| extract_github(l))),
        website: from_text
            .website
            .or_else(|| links.iter().find(|l| is_personal_site_link(l)).map(|l| l.to_string())),
        ..from_text
    }
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_FORMATS.iter().find_map(|format| {
        let found = format
            .pattern
            .find_iter(text)
            .map(|m| m.as_str().trim())
            .find(|candidate| is_plausible_phone(candidate))?;
        tracing::trace!(format = format.label, "phone number matched");
        Some(found.to_string())
    })
}

pub fn extract_linkedin(text: &str) -> Option<String> {
    LINKEDIN.find(text).map(|m| format!("https://{}", m.as_str()))
}

pub fn extract_github(text: &str) -> Option<String> {
    GITHUB.find(text).map(|m| format!("https://{}", m.as_str()))
}

pub fn extract_website(text: &str) -> Option<String> {
    let emails: Vec<_> = EMAIL.find_iter(text).map(|m| m.range()).collect();
    WEBSITE
        .find_iter(text)
        .filter(|m| !emails.iter().any(|email| m.start() < email.end && email.start < m.end()))
        .map(|m| m.as_str())
        .find(|candidate| !candidate.contains('@') && !is_non_personal_host(candidate))
        .map(String::from)
}

/// Best-guess name from the first few lines of the document.
pub fn extract_name(text: &str) -> Option<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .filter(|line| {
            let lower = line.to_lowercase();
            !NAME_SKIP_KEYWORDS.iter().any(|k| lower.contains(k))
        })
        .find(|line| line.len() < NAME_MAX_LEN && NAME.is_match(line))
        .map(String::from)
}

fn is_plausible_phone(candidate: &str) -> bool {
    digit_count(candidate) >= MIN_PHONE_DIGITS && !YEAR_SPAN.is_match(candidate)
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

fn is_non_personal_host(candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    NON_PERSONAL_HOSTS.iter().any(|host| lower.contains(host))
}

fn mailto_address(link: &str) -> Option<String> {
    let rest = link.strip_prefix("mailto:")?;
    let address = rest.split('?').next().unwrap_or_default();
    extract_email(address)
}

fn is_personal_site_link(link: &str) -> bool {
    let lower = link.to_lowercase();
    (lower.starts_with("http://") || lower.starts_with("https://"))
        && !is_non_personal_host(&lower)
}
