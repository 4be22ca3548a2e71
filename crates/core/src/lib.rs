//! Core domain types, heuristic resume extraction, structured import/export,
//! and standalone HTML rendering for portfolio generation.

pub mod display;
pub mod error;
pub mod extract;
pub mod html;
pub mod import;
pub mod links;
pub mod portfolio;
pub mod rules;
pub mod types;

pub use display::EntryRecord;
pub use error::{Error, Result};
pub use extract::{ResumeExtractor, ResumeText, DEFAULT_MAX_INPUT_BYTES};
pub use html::HtmlExporter;
pub use import::DEFAULT_MAX_IMPORT_BYTES;
pub use links::{escape_html, normalize_link, PLACEHOLDER_HREF};
pub use portfolio::Portfolio;
pub use types::{
    Contact, ContactField, Education, Entry, Experience, Project, ResumeDraft, Section,
    SectionVisibility, Skill, Theme, SKILL_LEVEL_PRESETS,
};
