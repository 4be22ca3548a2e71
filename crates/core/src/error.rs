//! Error types for resume extraction and portfolio editing.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting, importing, or editing a portfolio.
///
/// A heuristic parse-miss is never an error: the field is simply left empty.
#[derive(Error, Debug)]
pub enum Error {
    /// The input was rejected before any pattern scan because of its size.
    #[error("Input is {size} bytes, larger than the {limit} byte limit")]
    InputTooLarge { size: usize, limit: usize },

    /// Structured import could not be parsed or did not have the expected shape.
    #[error("Invalid portfolio data: {0}")]
    InvalidImport(String),

    /// A required field of an edit was empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The skill is already present in the skill list.
    #[error("Skill already listed: {0}")]
    DuplicateSkill(String),

    /// Skill levels are percentages.
    #[error("Skill level {0} is outside 0..=100")]
    LevelOutOfRange(u8),

    /// Profile images must be inline `data:image/...` URIs.
    #[error("Profile image must be a data:image URI")]
    InvalidImage,

    /// Failed to serialize the portfolio.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
