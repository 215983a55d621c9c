//! Field configuration types.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, FieldBuildError};
use crate::fields::{DEFAULT_HELP_CLASS, DEFAULT_MAX_LENGTH, DEFAULT_SIZE, Field, FieldBuilder};
use crate::validation::ErrorDisplay;

/// Message used by the `required` config key.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Message used by the `pattern` config key.
pub const PATTERN_MESSAGE: &str = "Enter a valid value.";

/// Declarative description of a field.
///
/// Every key except `label` is optional when deserializing. Unknown keys are
/// rejected so a misspelled key fails to parse instead of being ignored.
///
/// ```
/// use phorms::config::FieldConfig;
///
/// let config = FieldConfig::from_json(r#"{"label": "Test field", "max_length": 64}"#).unwrap();
/// assert_eq!(config.max_length, 64);
/// assert_eq!(config.help_class.as_deref(), Some("phorm_help"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    /// Label shown to the user.
    pub label: String,

    /// Guidance rendered below the widget.
    pub help_text: Option<String>,

    /// Machine name (None = derived from the label).
    pub name: Option<String>,

    /// Maximum value length in characters.
    pub max_length: usize,

    /// Minimum value length in characters (None = no minimum).
    pub min_length: Option<usize>,

    /// Reject blank values.
    pub required: bool,

    /// Regex the value must match.
    pub pattern: Option<String>,

    /// Display width of the rendered input.
    pub size: usize,

    /// CSS class of the help paragraph (None = no class attribute).
    pub help_class: Option<String>,

    /// Where `html()` renders errors.
    pub error_display: ErrorDisplay,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            help_text: None,
            name: None,
            max_length: DEFAULT_MAX_LENGTH,
            min_length: None,
            required: false,
            pattern: None,
            size: DEFAULT_SIZE,
            help_class: Some(DEFAULT_HELP_CLASS.to_string()),
            error_display: ErrorDisplay::default(),
        }
    }
}

impl FieldConfig {
    /// Create a new config with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Parse a config from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the help text.
    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    /// Override the machine name derived from the label.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the display width of the rendered input.
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the CSS class of the help paragraph.
    pub fn help_class(mut self, class: impl Into<String>) -> Self {
        self.help_class = Some(class.into());
        self
    }

    /// Render the help paragraph without a class attribute.
    pub fn no_help_class(mut self) -> Self {
        self.help_class = None;
        self
    }

    /// Set the maximum value length.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = max;
        self
    }

    /// Set the minimum value length.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Reject blank values.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Require the value to match a regex.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set where `html()` renders errors.
    pub fn error_display(mut self, display: ErrorDisplay) -> Self {
        self.error_display = display;
        self
    }

    /// Turn this config into a field builder, so callers can add rules that
    /// can't be expressed as config.
    pub fn to_builder(&self) -> FieldBuilder {
        let mut builder = Field::builder(self.label.clone())
            .max_length(self.max_length)
            .size(self.size)
            .error_display(self.error_display);

        if let Some(help) = &self.help_text {
            builder = builder.help_text(help.clone());
        }
        if let Some(name) = &self.name {
            builder = builder.name(name.clone());
        }
        builder = match &self.help_class {
            Some(class) => builder.help_class(class.clone()),
            None => builder.no_help_class(),
        };
        if self.required {
            builder = builder.required(REQUIRED_MESSAGE);
        }
        if let Some(min) = self.min_length {
            builder = builder.min_length(
                min,
                format!("Ensure this value has at least {min} characters."),
            );
        }
        if let Some(pattern) = &self.pattern {
            builder = builder.pattern(pattern, PATTERN_MESSAGE);
        }

        builder
    }

    /// Build the described field.
    pub fn build(&self) -> Result<Field, FieldBuildError> {
        self.to_builder().build()
    }
}

impl Field {
    /// Create a field from a config.
    pub fn from_config(config: &FieldConfig) -> Result<Self, FieldBuildError> {
        config.build()
    }
}
