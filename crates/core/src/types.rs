//! Domain types shared by the extractor, the portfolio model, and the exporters.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Structured draft produced by heuristic extraction.
///
/// Every sequence is always present (possibly empty) and `contact` is always
/// a record. Scalar fields are `None` when nothing was detected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Plain skill names. Extraction never infers a level.
    #[serde(default)]
    pub skills: Vec<String>,

    /// One raw line per detected project.
    #[serde(default)]
    pub projects: Vec<String>,

    /// One raw line per detected position, e.g. `Engineer — Acme — 2021`.
    #[serde(default)]
    pub experience: Vec<String>,

    #[serde(default)]
    pub education: Vec<String>,

    #[serde(default)]
    pub contact: Contact,
}

/// An entry that is either free text or a structured record.
///
/// Heuristic extraction produces `Raw` lines while the editing form and
/// structured import produce `Structured` records. Both stay valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry<T> {
    Raw(String),
    Structured(T),
}

impl<T> From<String> for Entry<T> {
    fn from(text: String) -> Self {
        Entry::Raw(text)
    }
}

/// A named skill with an optional proficiency percentage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default)]
    pub name: String,

    #[serde(
        default,
        deserialize_with = "deserialize_level",
        skip_serializing_if = "Option::is_none"
    )]
    pub level: Option<u8>,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: Option<u8>) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

/// Preset levels offered by the editing form.
pub const SKILL_LEVEL_PRESETS: &[(&str, u8)] = &[
    ("Beginner", 20),
    ("Intermediate", 40),
    ("Advanced", 60),
    ("Expert", 80),
    ("Master", 100),
];

/// Accept levels written as numbers or as numeric strings (`"60"`).
///
/// Range checking against 0..=100 happens during import validation so the
/// error can name the offending skill.
fn deserialize_level<'de, D>(deserializer: D) -> std::result::Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawLevel {
        Number(u64),
        Text(String),
    }

    match Option::<RawLevel>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawLevel::Number(n)) => u8::try_from(n)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("skill level {n} is out of range"))),
        Some(RawLevel::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<u8>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("skill level {trimmed:?} is not a number")))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub link: String,

    /// Inline image (usually a data URI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub role: String,

    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub period: String,

    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: String,

    #[serde(default)]
    pub institution: String,

    #[serde(default)]
    pub period: String,

    #[serde(default)]
    pub description: String,
}

/// Contact details. A present field is never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "deserialize_non_empty", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_non_empty", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "deserialize_non_empty", skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, deserialize_with = "deserialize_non_empty", skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    #[serde(default, deserialize_with = "deserialize_non_empty", skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl Contact {
    /// Get a field by name.
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Set a field, clearing it when the value is blank.
    pub fn set(&mut self, field: ContactField, value: &str) {
        let value = value.trim();
        *self.slot_mut(field) = (!value.is_empty()).then(|| value.to_string());
    }

    /// Overlay every present field of `other` onto `self`.
    pub fn merge(&mut self, other: Contact) {
        let Contact {
            email,
            phone,
            website,
            linkedin,
            github,
        } = other;
        for (field, value) in [
            (ContactField::Email, email),
            (ContactField::Phone, phone),
            (ContactField::Website, website),
            (ContactField::Linkedin, linkedin),
            (ContactField::Github, github),
        ] {
            if value.is_some() {
                *self.slot_mut(field) = value;
            }
        }
    }

    /// True when no field is populated.
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_none())
    }

    fn slot(&self, field: ContactField) -> &Option<String> {
        match field {
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Website => &self.website,
            ContactField::Linkedin => &self.linkedin,
            ContactField::Github => &self.github,
        }
    }

    fn slot_mut(&mut self, field: ContactField) -> &mut Option<String> {
        match field {
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Website => &mut self.website,
            ContactField::Linkedin => &mut self.linkedin,
            ContactField::Github => &mut self.github,
        }
    }
}

fn deserialize_non_empty<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Names of the contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Email,
    Phone,
    Website,
    Linkedin,
    Github,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Email,
        ContactField::Phone,
        ContactField::Website,
        ContactField::Linkedin,
        ContactField::Github,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Website => "website",
            ContactField::Linkedin => "linkedin",
            ContactField::Github => "github",
        }
    }
}

impl FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown contact field: {s}"))
    }
}

/// Portfolio sections that can be shown or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Summary,
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
}

impl Section {
    /// Sections in page order.
    pub const ALL: [Section; 6] = [
        Section::Summary,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Education,
        Section::Contact,
    ];

    /// Fragment identifier used for in-page navigation.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Summary => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    /// Short label for navigation links.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Summary => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }
}

/// Visibility flag per section. Missing keys default to visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionVisibility {
    pub summary: bool,
    pub skills: bool,
    pub projects: bool,
    pub experience: bool,
    pub education: bool,
    pub contact: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self {
            summary: true,
            skills: true,
            projects: true,
            experience: true,
            education: true,
            contact: true,
        }
    }
}

impl SectionVisibility {
    pub fn is_visible(&self, section: Section) -> bool {
        match section {
            Section::Summary => self.summary,
            Section::Skills => self.skills,
            Section::Projects => self.projects,
            Section::Experience => self.experience,
            Section::Education => self.education,
            Section::Contact => self.contact,
        }
    }

    pub fn set(&mut self, section: Section, visible: bool) {
        let flag = match section {
            Section::Summary => &mut self.summary,
            Section::Skills => &mut self.skills,
            Section::Projects => &mut self.projects,
            Section::Experience => &mut self.experience,
            Section::Education => &mut self.education,
            Section::Contact => &mut self.contact,
        };
        *flag = visible;
    }

    /// Visible sections in page order.
    pub fn visible(&self) -> impl Iterator<Item = Section> + '_ {
        Section::ALL.into_iter().filter(move |s| self.is_visible(*s))
    }
}

/// Style of the exported page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Clean,
    Modern,
    Creative,
    Professional,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Clean, Theme::Modern, Theme::Creative, Theme::Professional];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Clean => "clean",
            Theme::Modern => "modern",
            Theme::Creative => "creative",
            Theme::Professional => "professional",
        }
    }

    /// Look up a theme by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Theme::from_name(s).ok_or_else(|| {
            format!(
                "unknown theme {s:?} (expected one of: clean, modern, creative, professional)"
            )
        })
    }
}

/// Unknown theme names fall back to the default style.
impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = Option::<String>::deserialize(deserializer)?;
        Ok(name
            .as_deref()
            .and_then(Theme::from_name)
            .unwrap_or_default())
    }
}
