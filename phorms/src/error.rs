//! Error types for building fields and loading field configs.
//!
//! An invalid *value* is never an error: it is recorded on the field and
//! reported by `is_valid()`/`errors()`. These types cover misuse at
//! construction time only.

/// Errors that can occur when building a field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldBuildError {
    /// The label was empty or contained only whitespace.
    #[error("Field label must not be empty")]
    EmptyLabel,

    /// No machine name was given and none could be derived from the label.
    #[error("Cannot derive a field name from label '{label}'")]
    EmptyName { label: String },

    /// A pattern rule was given a regex that doesn't compile.
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl FieldBuildError {
    /// Creates a new invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur when loading a field from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config document could not be parsed.
    #[error("Failed to parse field config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The config parsed but describes a field that can't be built.
    #[error(transparent)]
    Build(#[from] FieldBuildError),
}
