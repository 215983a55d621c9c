//! Builder for configuring a field before construction.

use log::debug;

use super::Field;
use super::field::{DEFAULT_HELP_CLASS, DEFAULT_MAX_LENGTH, DEFAULT_SIZE};
use crate::error::FieldBuildError;
use crate::utils::text::machine_name;
use crate::validation::{ErrorDisplay, Rule, RuleSet};

/// Builder for a [`Field`].
///
/// Rules are checked in the order they are added, after the maximum length.
/// A rule that fails to construct (an invalid pattern) is remembered and
/// reported by [`FieldBuilder::build`], so the chain never breaks.
///
/// # Example
///
/// ```
/// use phorms::fields::Field;
///
/// let field = Field::builder("E-mail")
///     .help_text("We never share it.")
///     .max_length(120)
///     .required("E-mail is required")
///     .email("Please enter a valid e-mail")
///     .build()
///     .unwrap();
///
/// assert_eq!(field.name(), "e_mail");
/// ```
#[derive(Debug)]
pub struct FieldBuilder {
    label: String,
    name: Option<String>,
    help_text: Option<String>,
    max_length: usize,
    size: usize,
    help_class: Option<String>,
    error_display: ErrorDisplay,
    rules: RuleSet,
    error: Option<FieldBuildError>,
}

impl FieldBuilder {
    /// Create a builder for a field with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: None,
            help_text: None,
            max_length: DEFAULT_MAX_LENGTH,
            size: DEFAULT_SIZE,
            help_class: Some(DEFAULT_HELP_CLASS.to_string()),
            error_display: ErrorDisplay::default(),
            rules: RuleSet::new(),
            error: None,
        }
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

    /// Set the maximum value length (in characters).
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = max;
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

    /// Set where `html()` renders errors.
    pub fn error_display(mut self, display: ErrorDisplay) -> Self {
        self.error_display = display;
        self
    }

    /// Add a prebuilt rule.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add a custom rule.
    pub fn rule<F>(self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.with_rule(Rule::new(f, msg))
    }

    /// Require the value to be non-blank.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.with_rule(Rule::required(msg))
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.with_rule(Rule::min_length(min, msg))
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(mut self, pattern: &str, msg: impl Into<String>) -> Self {
        match Rule::pattern(pattern, msg) {
            Ok(rule) => self.with_rule(rule),
            Err(e) => {
                self.error.get_or_insert(e);
                self
            }
        }
    }

    /// Require a valid email address.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.with_rule(Rule::email(msg))
    }

    /// Require the value to equal another value.
    pub fn equals(self, other: impl Into<String>, msg: impl Into<String>) -> Self {
        self.with_rule(Rule::equals(other, msg))
    }

    /// Require the value to contain a substring.
    pub fn contains(self, substr: impl Into<String>, msg: impl Into<String>) -> Self {
        self.with_rule(Rule::contains(substr, msg))
    }

    /// Build the field.
    ///
    /// Fails with [`FieldBuildError::EmptyLabel`] when the label is blank,
    /// with [`FieldBuildError::EmptyName`] when no name is set and the label
    /// has no alphanumeric characters to derive one from, or with the first
    /// error recorded while adding rules.
    pub fn build(self) -> Result<Field, FieldBuildError> {
        if self.label.trim().is_empty() {
            return Err(FieldBuildError::EmptyLabel);
        }
        if let Some(e) = self.error {
            return Err(e);
        }

        let name = self
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| machine_name(&self.label));
        if name.is_empty() {
            return Err(FieldBuildError::EmptyName { label: self.label });
        }

        debug!(
            "Built field '{}' (max_length={}, rules={})",
            name,
            self.max_length,
            self.rules.len()
        );

        Ok(Field::from_parts(
            self.label,
            name,
            self.help_text,
            self.max_length,
            self.size,
            self.help_class,
            self.error_display,
            self.rules,
        ))
    }
}
