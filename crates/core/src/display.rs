//! Uniform read access to entries that may be raw text or structured records.
//!
//! Raw entries come from heuristic extraction and look like
//! `Engineer — Acme — 2021`. The text before the first em-dash is the title
//! and the second segment stands in for the company or institution.

use crate::types::{Education, Entry, Experience, Project, Skill};

const EM_DASH: char = '—';

/// Field access for the structured side of an [`Entry`].
pub trait EntryRecord {
    fn title(&self) -> &str;

    /// Company or institution.
    fn subtitle(&self) -> &str {
        ""
    }

    fn period(&self) -> &str {
        ""
    }

    fn description(&self) -> &str {
        ""
    }

    fn link(&self) -> &str {
        ""
    }

    fn image(&self) -> Option<&str> {
        None
    }
}

impl EntryRecord for Project {
    fn title(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn link(&self) -> &str {
        &self.link
    }

    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

impl EntryRecord for Experience {
    fn title(&self) -> &str {
        &self.role
    }

    fn subtitle(&self) -> &str {
        &self.company
    }

    fn period(&self) -> &str {
        &self.period
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl EntryRecord for Education {
    fn title(&self) -> &str {
        &self.degree
    }

    fn subtitle(&self) -> &str {
        &self.institution
    }

    fn period(&self) -> &str {
        &self.period
    }

    fn description(&self) -> &str {
        &self.description
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

impl<T: EntryRecord> Entry<T> {
    /// Display title. For raw text, the part before the first em-dash.
    pub fn title(&self) -> &str {
        match self {
            Entry::Raw(text) => text.split(EM_DASH).next().unwrap_or_default().trim(),
            Entry::Structured(record) => record.title().trim(),
        }
    }

    /// Company or institution. For raw text, the second em-dash segment.
    pub fn subtitle(&self) -> Option<&str> {
        match self {
            Entry::Raw(text) => text.split(EM_DASH).nth(1).and_then(non_empty),
            Entry::Structured(record) => non_empty(record.subtitle()),
        }
    }

    pub fn period(&self) -> Option<&str> {
        match self {
            Entry::Raw(_) => None,
            Entry::Structured(record) => non_empty(record.period()),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Entry::Raw(_) => None,
            Entry::Structured(record) => non_empty(record.description()),
        }
    }

    pub fn link(&self) -> Option<&str> {
        match self {
            Entry::Raw(_) => None,
            Entry::Structured(record) => non_empty(record.link()),
        }
    }

    pub fn image(&self) -> Option<&str> {
        match self {
            Entry::Raw(_) => None,
            Entry::Structured(record) => record.image().and_then(non_empty),
        }
    }
}

impl Entry<Skill> {
    pub fn name(&self) -> &str {
        match self {
            Entry::Raw(name) => name.trim(),
            Entry::Structured(skill) => skill.name.trim(),
        }
    }

    pub fn level(&self) -> Option<u8> {
        match self {
            Entry::Raw(_) => None,
            Entry::Structured(skill) => skill.level,
        }
    }
}
