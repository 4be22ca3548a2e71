//! The portfolio document model and its edit operations.

use crate::error::{Error, Result};
use crate::types::{
    Contact, ContactField, Education, Entry, Experience, Project, ResumeDraft, Section,
    SectionVisibility, Skill, Theme,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Prefix every profile image must carry.
pub const IMAGE_DATA_PREFIX: &str = "data:image/";

/// The editable portfolio.
///
/// Built from an extraction draft, a structured import, or edits, and
/// consumed by the JSON and HTML exporters. Deserialization goes through
/// the same validation as [`Portfolio::import_value`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub skills: Vec<Entry<Skill>>,
    pub projects: Vec<Entry<Project>>,
    pub experience: Vec<Entry<Experience>>,
    pub education: Vec<Entry<Education>>,
    pub contact: Contact,

    /// Platform name to profile URL, e.g. `twitter`.
    pub social_links: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,

    pub sections: SectionVisibility,
    pub theme: Theme,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a portfolio seeded from an extraction draft.
    pub fn from_draft(draft: ResumeDraft) -> Self {
        let mut portfolio = Self::default();
        portfolio.apply_draft(draft);
        portfolio
    }

    /// Seed the content fields from a fresh extraction.
    ///
    /// Text and list fields are replaced. Contact fields found in the draft
    /// overwrite existing ones and the rest are kept.
    pub fn apply_draft(&mut self, draft: ResumeDraft) {
        self.name = draft.name.unwrap_or_default();
        self.title = draft.title.unwrap_or_default();
        self.summary = draft.summary.unwrap_or_default();
        self.skills = draft.skills.into_iter().map(Entry::from).collect();
        self.projects = draft.projects.into_iter().map(Entry::from).collect();
        self.experience = draft.experience.into_iter().map(Entry::from).collect();
        self.education = draft.education.into_iter().map(Entry::from).collect();
        self.contact.merge(draft.contact);
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.trim().to_string();
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.trim().to_string();
    }

    pub fn set_summary(&mut self, summary: &str) {
        self.summary = summary.trim().to_string();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Set a contact field. A blank value clears it.
    pub fn set_contact_field(&mut self, field: ContactField, value: &str) {
        self.contact.set(field, value);
    }

    /// Set a social profile link. A blank URL removes the platform.
    pub fn set_social_link(&mut self, platform: &str, url: &str) {
        let platform = platform.trim().to_lowercase();
        let url = url.trim();

        if url.is_empty() {
            self.social_links.remove(&platform);
        } else if !platform.is_empty() {
            self.social_links.insert(platform, url.to_string());
        }
    }

    pub fn set_section_visible(&mut self, section: Section, visible: bool) {
        self.sections.set(section, visible);
    }

    /// Replace or clear the profile image. Only `data:image/` URIs are accepted.
    pub fn set_profile_image(&mut self, image: Option<String>) -> Result<()> {
        if let Some(uri) = &image {
            validate_image(uri)?;
        }
        self.profile_image = image;
        Ok(())
    }

    /// Add a skill. Names are unique within the list.
    ///
    /// A skill with a level is stored as a record, one without as plain text.
    pub fn append_skill(&mut self, name: &str, level: Option<u8>) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::MissingField("skill name"));
        }
        if let Some(level) = level {
            validate_level(level)?;
        }
        if self.has_skill(name) {
            return Err(Error::DuplicateSkill(name.to_string()));
        }

        self.skills.push(match level {
            Some(_) => Entry::Structured(Skill::new(name, level)),
            None => Entry::Raw(name.to_string()),
        });
        Ok(())
    }

    /// True when a skill with this exact name is already listed.
    pub fn has_skill(&self, name: &str) -> bool {
        self.skills.iter().any(|s| s.name() == name.trim())
    }

    pub fn remove_skill_at(&mut self, index: usize) -> Option<Entry<Skill>> {
        remove_at(&mut self.skills, index)
    }

    /// Add a project. The name is required.
    pub fn append_project(&mut self, project: Project) -> Result<()> {
        let project = Project {
            name: project.name.trim().to_string(),
            description: project.description.trim().to_string(),
            link: project.link.trim().to_string(),
            image: project.image,
        };
        if project.name.is_empty() {
            return Err(Error::MissingField("project name"));
        }

        self.projects.push(Entry::Structured(project));
        Ok(())
    }

    pub fn remove_project_at(&mut self, index: usize) -> Option<Entry<Project>> {
        remove_at(&mut self.projects, index)
    }

    /// Add a position. Role and company are required.
    pub fn append_experience(&mut self, experience: Experience) -> Result<()> {
        let experience = Experience {
            role: experience.role.trim().to_string(),
            company: experience.company.trim().to_string(),
            period: experience.period.trim().to_string(),
            description: experience.description.trim().to_string(),
        };
        if experience.role.is_empty() {
            return Err(Error::MissingField("role"));
        }
        if experience.company.is_empty() {
            return Err(Error::MissingField("company"));
        }

        self.experience.push(Entry::Structured(experience));
        Ok(())
    }

    pub fn remove_experience_at(&mut self, index: usize) -> Option<Entry<Experience>> {
        remove_at(&mut self.experience, index)
    }

    /// Add a degree. Degree and institution are required.
    pub fn append_education(&mut self, education: Education) -> Result<()> {
        let education = Education {
            degree: education.degree.trim().to_string(),
            institution: education.institution.trim().to_string(),
            period: education.period.trim().to_string(),
            description: education.description.trim().to_string(),
        };
        if education.degree.is_empty() {
            return Err(Error::MissingField("degree"));
        }
        if education.institution.is_empty() {
            return Err(Error::MissingField("institution"));
        }

        self.education.push(Entry::Structured(education));
        Ok(())
    }

    pub fn remove_education_at(&mut self, index: usize) -> Option<Entry<Education>> {
        remove_at(&mut self.education, index)
    }

    /// Base name for exported files: `jane_doe` for "Jane Doe".
    pub fn file_stem(&self) -> String {
        let stem = self
            .name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase();

        if stem.is_empty() {
            "portfolio".to_string()
        } else {
            stem
        }
    }
}

fn remove_at<T>(items: &mut Vec<T>, index: usize) -> Option<T> {
    (index < items.len()).then(|| items.remove(index))
}

pub(crate) fn validate_level(level: u8) -> Result<()> {
    if level > 100 {
        return Err(Error::LevelOutOfRange(level));
    }
    Ok(())
}

pub(crate) fn validate_image(uri: &str) -> Result<()> {
    let accepted = uri
        .get(..IMAGE_DATA_PREFIX.len())
        .is_some_and(|p| p.eq_ignore_ascii_case(IMAGE_DATA_PREFIX));

    if accepted {
        Ok(())
    } else {
        Err(Error::InvalidImage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_draft_replaces_content_and_merges_contact() {
        let mut portfolio = Portfolio::new();
        portfolio.set_contact_field(ContactField::Phone, "555-000-1111");
        portfolio.append_skill("Cobol", None).unwrap();

        let mut draft = ResumeDraft {
            name: Some("Jane Doe".to_string()),
            skills: vec!["Go".to_string(), "Rust".to_string()],
            experience: vec!["Engineer — Acme".to_string()],
            ..Default::default()
        };
        draft.contact.email = Some("jane@example.com".to_string());

        portfolio.apply_draft(draft);

        assert_eq!(portfolio.name, "Jane Doe");
        assert_eq!(portfolio.title, "");
        assert_eq!(
            portfolio.skills,
            vec![Entry::Raw("Go".to_string()), Entry::Raw("Rust".to_string())]
        );
        assert_eq!(portfolio.experience[0].title(), "Engineer");
        assert_eq!(portfolio.contact.email.as_deref(), Some("jane@example.com"));
        assert_eq!(portfolio.contact.phone.as_deref(), Some("555-000-1111"));
    }

    #[test]
    fn test_append_skill_rules() {
        let mut portfolio = Portfolio::new();

        portfolio.append_skill(" Rust ", Some(80)).unwrap();
        portfolio.append_skill("SQL", None).unwrap();

        assert!(matches!(
            portfolio.append_skill("Rust", Some(20)),
            Err(Error::DuplicateSkill(name)) if name == "Rust"
        ));
        assert!(matches!(
            portfolio.append_skill("  ", None),
            Err(Error::MissingField(_))
        ));
        assert!(matches!(
            portfolio.append_skill("Go", Some(101)),
            Err(Error::LevelOutOfRange(101))
        ));

        assert_eq!(
            portfolio.skills,
            vec![
                Entry::Structured(Skill::new("Rust", Some(80))),
                Entry::Raw("SQL".to_string()),
            ]
        );
    }

    #[test]
    fn test_duplicate_check_covers_raw_skills() {
        let mut portfolio = Portfolio::from_draft(ResumeDraft {
            skills: vec!["Go".to_string()],
            ..Default::default()
        });

        assert!(portfolio.append_skill("Go", Some(60)).is_err());
    }

    #[test]
    fn test_append_project_requires_name() {
        let mut portfolio = Portfolio::new();

        let err = portfolio
            .append_project(Project {
                description: "No name".to_string(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, Error::MissingField("project name")));

        portfolio
            .append_project(Project {
                name: " Ledger ".to_string(),
                link: "ledger.dev".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(portfolio.projects[0].title(), "Ledger");
    }

    #[test]
    fn test_append_experience_requires_role_and_company() {
        let mut portfolio = Portfolio::new();

        let missing_company = Experience {
            role: "Engineer".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            portfolio.append_experience(missing_company),
            Err(Error::MissingField("company"))
        ));
        assert!(portfolio.experience.is_empty());

        portfolio
            .append_experience(Experience {
                role: "Engineer".to_string(),
                company: "Acme".to_string(),
                period: "2020 - now".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(portfolio.experience[0].subtitle(), Some("Acme"));
    }

    #[test]
    fn test_append_education_requires_degree_and_institution() {
        let mut portfolio = Portfolio::new();

        assert!(matches!(
            portfolio.append_education(Education::default()),
            Err(Error::MissingField("degree"))
        ));

        portfolio
            .append_education(Education {
                degree: "MSc".to_string(),
                institution: "TU Delft".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(portfolio.education.len(), 1);
    }

    #[test]
    fn test_remove_at() {
        let mut portfolio = Portfolio::new();
        portfolio.append_skill("Go", None).unwrap();
        portfolio.append_skill("Rust", None).unwrap();

        assert_eq!(portfolio.remove_skill_at(5), None);
        assert_eq!(portfolio.remove_skill_at(0), Some(Entry::Raw("Go".to_string())));
        assert_eq!(portfolio.skills, vec![Entry::Raw("Rust".to_string())]);
        assert_eq!(portfolio.remove_project_at(0), None);
        assert_eq!(portfolio.remove_experience_at(0), None);
        assert_eq!(portfolio.remove_education_at(0), None);
    }

    #[test]
    fn test_social_links() {
        let mut portfolio = Portfolio::new();
        portfolio.set_social_link("Twitter", "twitter.com/jane");
        portfolio.set_social_link("dribbble", "dribbble.com/jane");
        portfolio.set_social_link("dribbble", " ");

        assert_eq!(portfolio.social_links.len(), 1);
        assert_eq!(portfolio.social_links["twitter"], "twitter.com/jane");
    }

    #[test]
    fn test_profile_image_must_be_data_uri() {
        let mut portfolio = Portfolio::new();

        assert!(matches!(
            portfolio.set_profile_image(Some("https://example.com/me.png".to_string())),
            Err(Error::InvalidImage)
        ));
        assert_eq!(portfolio.profile_image, None);

        portfolio
            .set_profile_image(Some("data:image/png;base64,iVBORw0KGgo=".to_string()))
            .unwrap();
        assert!(portfolio.profile_image.is_some());

        portfolio.set_profile_image(None).unwrap();
        assert_eq!(portfolio.profile_image, None);
    }

    #[test]
    fn test_section_visibility() {
        let mut portfolio = Portfolio::new();
        portfolio.set_section_visible(Section::Education, false);

        assert!(!portfolio.sections.is_visible(Section::Education));
        assert!(portfolio.sections.is_visible(Section::Skills));
    }

    #[test]
    fn test_file_stem() {
        let mut portfolio = Portfolio::new();
        assert_eq!(portfolio.file_stem(), "portfolio");

        portfolio.set_name("Jane  Q Doe");
        assert_eq!(portfolio.file_stem(), "jane_q_doe");
    }
}
