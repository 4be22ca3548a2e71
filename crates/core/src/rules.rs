//! Detection rules for heuristic resume extraction.
//!
//! Each rule is a pure function over a [`ResumeText`] and can be tested on
//! its own without building a complete resume.

use crate::extract::ResumeText;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Heading followed by a one-line summary of 20 to 300 characters.
/// Anything shorter is a label, not a summary.
static SUMMARY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:summary|about|profile)[:\-\s]*\n([^\n]{20,300})").unwrap()
});

static SKILLS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(?:skills|technologies|expertise)[:\-\s]*\n(.{0,400})").unwrap()
});

/// Separators between skills on a single line.
static SKILL_SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n,•;|]+").unwrap());

static PROJECTS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| section_block_regex(&["projects", "portfolio"]));

static EXPERIENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| section_block_regex(&["experience", "work", "employment"]));

static EDUCATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| section_block_regex(&["education", "qualifications"]));

/// A newline optionally followed by a dash bullet.
static ENTRY_SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*-?\s*").unwrap());

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}").unwrap());

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+[0-9]{1,3}[-. ]?)?\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}").unwrap()
});

static LINKEDIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/[\w\-/]+").unwrap()
});

static GITHUB_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/[\w\-/]+").unwrap()
});

static WEBSITE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?[a-z0-9\-]+\.[a-z]{2,}(?:/\S*)?").unwrap()
});

/// Headings that start a multi-line block ending at a blank line or end of text.
fn section_block_regex(headings: &[&str]) -> Regex {
    let pattern = format!(r"(?is)(?:{})[:\-\s]*(.*?)(?:\n\s*\n|\z)", headings.join("|"));
    Regex::new(&pattern).unwrap()
}

/// A matched substring of the normalized document and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub text: String,
    pub span: Range<usize>,
}

impl Match {
    fn overlaps(&self, other: &Range<usize>) -> bool {
        self.span.start < other.end && other.start < self.span.end
    }
}

fn first_match(regex: &Regex, view: &ResumeText) -> Option<Match> {
    regex.find(view.document()).map(|m| Match {
        text: m.as_str().to_string(),
        span: m.range(),
    })
}

/// The first line, when it is made only of letters and whitespace (3+ chars).
pub fn name(view: &ResumeText) -> Option<String> {
    let line = view.line(0)?;
    let plausible = line.chars().count() >= 3
        && line.chars().all(|c| c.is_alphabetic() || c.is_whitespace());

    plausible.then(|| line.to_string())
}

/// The second line, when it is short and is not a contact line.
pub fn title(view: &ResumeText) -> Option<String> {
    let line = view.line(1)?;
    (line.chars().count() < 60 && !line.contains('@')).then(|| line.to_string())
}

/// The line after a summary heading, or lines 3 to 5 joined as a fallback.
///
/// A capture without any whitespace (a bare URL or handle after
/// `LinkedIn profile:`) is not prose and falls through to the fallback.
pub fn summary(view: &ResumeText) -> Option<String> {
    if let Some(caps) = SUMMARY_REGEX.captures(view.document()) {
        let text = caps[1].trim();
        if text.contains(char::is_whitespace) {
            return Some(text.to_string());
        }
    }

    if view.lines().len() < 3 {
        return None;
    }

    let end = view.lines().len().min(5);
    Some(view.lines()[2..end].join(" "))
}

/// Skill names from the line right after a skills heading.
pub fn skills(view: &ResumeText) -> Vec<String> {
    let Some(caps) = SKILLS_REGEX.captures(view.document()) else {
        return Vec::new();
    };

    let first_line = caps[1].split('\n').next().unwrap_or_default();

    SKILL_SEPARATOR_REGEX
        .split(first_line)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn block_entries(regex: &Regex, view: &ResumeText) -> Vec<String> {
    let Some(caps) = regex.captures(view.document()) else {
        return Vec::new();
    };

    ENTRY_SEPARATOR_REGEX
        .split(&caps[1])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Raw project lines following a projects heading.
pub fn projects(view: &ResumeText) -> Vec<String> {
    block_entries(&PROJECTS_REGEX, view)
}

/// Raw position lines following an experience heading.
pub fn experience(view: &ResumeText) -> Vec<String> {
    block_entries(&EXPERIENCE_REGEX, view)
}

pub fn education(view: &ResumeText) -> Vec<String> {
    block_entries(&EDUCATION_REGEX, view)
}

pub fn email(view: &ResumeText) -> Option<Match> {
    first_match(&EMAIL_REGEX, view)
}

pub fn phone(view: &ResumeText) -> Option<String> {
    first_match(&PHONE_REGEX, view).map(|m| m.text)
}

pub fn linkedin(view: &ResumeText) -> Option<Match> {
    first_match(&LINKEDIN_REGEX, view)
}

pub fn github(view: &ResumeText) -> Option<Match> {
    first_match(&GITHUB_REGEX, view)
}

/// The first domain-like token, unless another contact field owns it.
///
/// `claimed` holds the spans of the email, LinkedIn and GitHub matches. Only
/// the first candidate is considered: when it mentions linkedin or github, or
/// overlaps a claimed span, no website is reported.
pub fn website(view: &ResumeText, claimed: &[Range<usize>]) -> Option<String> {
    let candidate = first_match(&WEBSITE_REGEX, view)?;
    let lower = candidate.text.to_lowercase();

    if lower.contains("linkedin") || lower.contains("github") {
        return None;
    }
    if claimed.iter().any(|span| candidate.overlaps(span)) {
        return None;
    }

    Some(candidate.text)
}
