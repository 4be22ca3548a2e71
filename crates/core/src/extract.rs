//! Heuristic resume extraction.
//!
//! Turns pasted resume text into a [`ResumeDraft`] using fixed patterns and
//! line positions. This is best effort: a rule that finds nothing leaves its
//! field empty, and nothing is invented that the text does not contain.

use crate::error::{Error, Result};
use crate::rules;
use crate::types::{Contact, ResumeDraft};
use unicode_normalization::UnicodeNormalization;

/// Default upper bound for pasted resume text.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 512 * 1024;

/// The two preprocessed views every detection rule works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeText {
    /// Trimmed, non-empty lines in document order.
    lines: Vec<String>,
    /// The same lines joined with single `\n` separators.
    document: String,
}

impl ResumeText {
    /// Split on `\n`, `\r\n` or a lone `\r`, trim each line and drop empty ones.
    pub fn parse(text: &str) -> Self {
        let composed: String = text.nfc().collect();

        let lines: Vec<String> = composed
            .split(['\r', '\n'])
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        let document = lines.join("\n");

        Self { lines, document }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get a line by zero-based position.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Extracts a [`ResumeDraft`] from free-form resume text.
///
/// The extractor holds only configuration; every call is independent.
#[derive(Debug, Clone)]
pub struct ResumeExtractor {
    /// Inputs larger than this are rejected before any pattern scan.
    max_input_bytes: usize,
}

impl Default for ResumeExtractor {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl ResumeExtractor {
    /// Create an extractor with the default input limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum accepted input size in bytes.
    pub fn with_max_input_bytes(mut self, limit: usize) -> Self {
        self.max_input_bytes = limit.max(1);
        self
    }

    pub fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }

    /// Extract a draft from resume text.
    ///
    /// Fails only when the input is over the size limit. Malformed or empty
    /// text produces a draft with few or no fields populated.
    pub fn extract(&self, text: &str) -> Result<ResumeDraft> {
        if text.len() > self.max_input_bytes {
            log::warn!(
                "Rejecting resume text of {} bytes (limit {})",
                text.len(),
                self.max_input_bytes
            );
            return Err(Error::InputTooLarge {
                size: text.len(),
                limit: self.max_input_bytes,
            });
        }

        let view = ResumeText::parse(text);
        let draft = extract_from(&view);

        log::debug!(
            "Extracted draft from {} lines: name={} title={} summary={} skills={} projects={} experience={} education={}",
            view.lines().len(),
            draft.name.is_some(),
            draft.title.is_some(),
            draft.summary.is_some(),
            draft.skills.len(),
            draft.projects.len(),
            draft.experience.len(),
            draft.education.len(),
        );

        Ok(draft)
    }
}

/// Run every detection rule over an already preprocessed view.
pub fn extract_from(view: &ResumeText) -> ResumeDraft {
    let email = rules::email(view);
    let linkedin = rules::linkedin(view);
    let github = rules::github(view);

    let claimed: Vec<_> = [&email, &linkedin, &github]
        .into_iter()
        .flatten()
        .map(|m| m.span.clone())
        .collect();
    let website = rules::website(view, &claimed);

    ResumeDraft {
        name: rules::name(view),
        title: rules::title(view),
        summary: rules::summary(view),
        skills: rules::skills(view),
        projects: rules::projects(view),
        experience: rules::experience(view),
        education: rules::education(view),
        contact: Contact {
            email: email.map(|m| m.text),
            phone: rules::phone(view),
            website,
            linkedin: linkedin.map(|m| m.text),
            github: github.map(|m| m.text),
        },
    }
}
