//! Structured JSON import and export of a [`Portfolio`].
//!
//! Import is all-or-nothing: the payload is parsed and validated in full
//! before the portfolio is touched.

use crate::error::{Error, Result};
use crate::portfolio::{validate_image, validate_level, Portfolio};
use crate::types::{Contact, Education, Entry, Experience, Project, SectionVisibility, Skill, Theme};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Default upper bound for structured imports. Larger than the text limit
/// because profile and project images travel inline as data URIs.
pub const DEFAULT_MAX_IMPORT_BYTES: usize = 1_572_864;

/// Every recognized top-level key, all optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PortfolioImport {
    name: Option<String>,
    title: Option<String>,
    summary: Option<String>,
    skills: Option<Vec<Entry<Skill>>>,
    projects: Option<Vec<Entry<Project>>>,
    experience: Option<Vec<Entry<Experience>>>,
    education: Option<Vec<Entry<Education>>>,
    contact: Option<Contact>,
    profile_image: Option<String>,
    social_links: Option<BTreeMap<String, String>>,
    sections: Option<SectionVisibility>,
    theme: Option<Theme>,
}

impl PortfolioImport {
    fn validate(&self) -> Result<()> {
        for skill in self.skills.iter().flatten() {
            if let Entry::Structured(Skill {
                name,
                level: Some(level),
            }) = skill
            {
                validate_level(*level).map_err(|_| {
                    Error::InvalidImport(format!("skill {name:?} has level {level}, expected 0-100"))
                })?;
            }
        }

        if let Some(image) = &self.profile_image {
            validate_image(image)
                .map_err(|_| Error::InvalidImport("profileImage must be a data:image URI".to_string()))?;
        }

        Ok(())
    }

    /// Replace content fields, merge contact, and overlay present
    /// presentation fields.
    fn apply_to(self, portfolio: &mut Portfolio) {
        portfolio.name = self.name.unwrap_or_default();
        portfolio.title = self.title.unwrap_or_default();
        portfolio.summary = self.summary.unwrap_or_default();
        portfolio.skills = self.skills.unwrap_or_default();
        portfolio.projects = self.projects.unwrap_or_default();
        portfolio.experience = self.experience.unwrap_or_default();
        portfolio.education = self.education.unwrap_or_default();

        if let Some(contact) = self.contact {
            portfolio.contact.merge(contact);
        }
        if let Some(image) = self.profile_image {
            portfolio.profile_image = Some(image);
        }
        if let Some(links) = self.social_links {
            portfolio.social_links = links
                .into_iter()
                .map(|(platform, url)| (platform.trim().to_lowercase(), url.trim().to_string()))
                .filter(|(platform, url)| !platform.is_empty() && !url.is_empty())
                .collect();
        }
        if let Some(sections) = self.sections {
            portfolio.sections = sections;
        }
        if let Some(theme) = self.theme {
            portfolio.theme = theme;
        }
    }
}

impl<'de> Deserialize<'de> for Portfolio {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let import = PortfolioImport::deserialize(deserializer)?;
        import.validate().map_err(D::Error::custom)?;

        let mut portfolio = Portfolio::default();
        import.apply_to(&mut portfolio);
        Ok(portfolio)
    }
}

impl Portfolio {
    /// Import a JSON document with the default size limit.
    pub fn import_json(&mut self, json: &str) -> Result<()> {
        self.import_json_with_limit(json, DEFAULT_MAX_IMPORT_BYTES)
    }

    /// Import a JSON document, rejecting payloads over `limit` bytes.
    pub fn import_json_with_limit(&mut self, json: &str, limit: usize) -> Result<()> {
        if json.len() > limit {
            log::warn!("Rejecting portfolio import of {} bytes (limit {})", json.len(), limit);
            return Err(Error::InputTooLarge {
                size: json.len(),
                limit,
            });
        }

        let value: Value = serde_json::from_str(json).map_err(|e| {
            log::warn!("Portfolio import is not valid JSON: {}", e);
            Error::InvalidImport(format!("not valid JSON: {e}"))
        })?;

        self.import_value(value)
    }

    /// Import an already parsed JSON value.
    ///
    /// Content fields are replaced (missing ones become empty), `contact` is
    /// merged over the current contact, and presentation fields
    /// (`profileImage`, `socialLinks`, `sections`, `theme`) are replaced only
    /// when present. On error `self` is left unchanged.
    pub fn import_value(&mut self, value: Value) -> Result<()> {
        if !value.is_object() {
            return Err(Error::InvalidImport(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            )));
        }

        let import: PortfolioImport = serde_json::from_value(value).map_err(|e| {
            log::warn!("Portfolio import has an unexpected shape: {}", e);
            Error::InvalidImport(e.to_string())
        })?;
        import.validate()?;
        import.apply_to(self);

        log::debug!(
            "Imported portfolio {:?}: {} skills, {} projects, {} experience, {} education",
            self.name,
            self.skills.len(),
            self.projects.len(),
            self.experience.len(),
            self.education.len()
        );

        Ok(())
    }

    /// Parse a new portfolio from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut portfolio = Self::default();
        portfolio.import_json(json)?;
        Ok(portfolio)
    }

    /// Serialize to pretty-printed JSON (two-space indent).
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContactField, Section};

    fn sample() -> Portfolio {
        let mut portfolio = Portfolio::new();
        portfolio.set_name("Jane Doe");
        portfolio.set_title("Backend Engineer");
        portfolio.set_summary("Builds reliable distributed systems.");
        portfolio.append_skill("Rust", Some(80)).unwrap();
        portfolio.append_skill("Go", None).unwrap();
        portfolio
            .append_project(Project {
                name: "Ledger".to_string(),
                description: "Double entry bookkeeping".to_string(),
                link: "ledger.dev".to_string(),
                image: Some("data:image/png;base64,AAAA".to_string()),
            })
            .unwrap();
        portfolio.projects.push(Entry::Raw("Shortener — URL service".to_string()));
        portfolio
            .append_experience(Experience {
                role: "Engineer".to_string(),
                company: "Acme".to_string(),
                period: "2019 - 2022".to_string(),
                description: String::new(),
            })
            .unwrap();
        portfolio.education.push(Entry::Raw("BSc — MIT — 2018".to_string()));
        portfolio.set_contact_field(ContactField::Email, "jane@example.com");
        portfolio.set_contact_field(ContactField::Github, "github.com/jane");
        portfolio.set_social_link("twitter", "twitter.com/jane");
        portfolio
            .set_profile_image(Some("data:image/jpeg;base64,/9j/4AAQ".to_string()))
            .unwrap();
        portfolio.set_section_visible(Section::Education, false);
        portfolio.set_theme(Theme::Creative);
        portfolio
    }

    #[test]
    fn test_round_trip() {
        let original = sample();
        let json = original.export_json().unwrap();

        let restored = Portfolio::from_json(&json).unwrap();
        assert_eq!(restored, original);
        assert_eq!(restored.export_json().unwrap(), json);
    }

    #[test]
    fn test_export_uses_camel_case_keys() {
        let json = sample().export_json().unwrap();

        assert!(json.contains("\"socialLinks\""));
        assert!(json.contains("\"profileImage\""));
        assert!(json.contains("\"theme\": \"creative\""));
        assert!(json.contains("\n  \"name\": \"Jane Doe\""));
    }

    #[test]
    fn test_import_missing_fields_default_to_empty() {
        let mut portfolio = sample();
        portfolio.import_json(r#"{"name": "Sam Lee"}"#).unwrap();

        assert_eq!(portfolio.name, "Sam Lee");
        assert_eq!(portfolio.title, "");
        assert!(portfolio.skills.is_empty());
        assert!(portfolio.projects.is_empty());
        assert!(portfolio.experience.is_empty());
        assert!(portfolio.education.is_empty());

        // Contact and presentation fields are kept when absent.
        assert_eq!(portfolio.contact.email.as_deref(), Some("jane@example.com"));
        assert_eq!(portfolio.theme, Theme::Creative);
        assert!(portfolio.profile_image.is_some());
        assert_eq!(portfolio.social_links.len(), 1);
    }

    #[test]
    fn test_import_merges_contact() {
        let mut portfolio = sample();
        portfolio
            .import_json(r#"{"contact": {"email": "sam@example.com", "phone": "", "website": "sam.dev"}}"#)
            .unwrap();

        assert_eq!(portfolio.contact.email.as_deref(), Some("sam@example.com"));
        assert_eq!(portfolio.contact.website.as_deref(), Some("sam.dev"));
        assert_eq!(portfolio.contact.github.as_deref(), Some("github.com/jane"));
        assert_eq!(portfolio.contact.phone, None);
    }

    #[test]
    fn test_import_mixed_entry_shapes() {
        let json = r#"{
            "skills": ["SQL", {"name": "Rust", "level": "60"}],
            "experience": ["Intern — Initech", {"role": "Engineer", "company": "Acme"}],
            "socialLinks": {"Twitter": "twitter.com/sam", "behance": ""},
            "sections": {"projects": false}
        }"#;
        let portfolio = Portfolio::from_json(json).unwrap();

        assert_eq!(portfolio.skills[1].level(), Some(60));
        assert_eq!(portfolio.experience[0].subtitle(), Some("Initech"));
        assert_eq!(portfolio.experience[1].title(), "Engineer");
        assert_eq!(portfolio.social_links.len(), 1);
        assert_eq!(portfolio.social_links["twitter"], "twitter.com/sam");
        assert!(!portfolio.sections.is_visible(Section::Projects));
        assert!(portfolio.sections.is_visible(Section::Skills));
    }

    #[test]
    fn test_malformed_import_leaves_state_untouched() {
        let original = sample();

        for bad in [
            "{not json",
            "[1, 2, 3]",
            "\"just a string\"",
            r#"{"name": "Sam", "skills": "Rust"}"#,
            r#"{"name": "Sam", "skills": [{"name": "Rust", "level": 150}]}"#,
            r#"{"name": "Sam", "profileImage": "https://example.com/me.png"}"#,
            r#"{"name": "Sam", "contact": "jane@example.com"}"#,
        ] {
            let mut portfolio = original.clone();
            let err = portfolio.import_json(bad).unwrap_err();

            assert!(matches!(err, Error::InvalidImport(_)), "input {bad:?} gave {err:?}");
            assert_eq!(portfolio, original, "input {bad:?} mutated state");
        }
    }

    #[test]
    fn test_import_size_limit() {
        let mut portfolio = Portfolio::new();
        let err = portfolio
            .import_json_with_limit(r#"{"name": "Jane Doe"}"#, 8)
            .unwrap_err();

        assert!(matches!(err, Error::InputTooLarge { limit: 8, .. }));
        assert_eq!(portfolio, Portfolio::new());
    }

    #[test]
    fn test_deserialize_validates_like_import() {
        let err = serde_json::from_str::<Portfolio>(
            r#"{"skills": [{"name": "Rust", "level": 150}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("level 150"), "{err}");

        let err = serde_json::from_str::<Portfolio>(r#"{"profileImage": "https://x/y.png"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("data:image"), "{err}");
    }

    #[test]
    fn test_deserialize_round_trip() {
        let original = sample();
        let json = original.export_json().unwrap();

        let restored: Portfolio = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
        assert!(Portfolio::from_json(&restored.export_json().unwrap()).is_ok());
    }

    #[test]
    fn test_import_value_requires_object() {
        let mut portfolio = Portfolio::new();
        let err = portfolio.import_value(Value::Null).unwrap_err();

        assert_eq!(err.to_string(), "Invalid portfolio data: expected a JSON object, found null");
    }
}
