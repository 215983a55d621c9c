use log::debug;

use super::FieldBuilder;
use crate::error::FieldBuildError;
use crate::render::{ERROR_CLASS, Renderable, html};
use crate::utils::text::char_len;
use crate::validation::{ErrorDisplay, RuleSet, Validatable};

/// Default maximum value length, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 255;

/// Default display width of the rendered input.
pub const DEFAULT_SIZE: usize = 25;

/// Default CSS class of the help paragraph.
pub const DEFAULT_HELP_CLASS: &str = "phorm_help";

/// A labeled text field with help text, a value, and validation state.
///
/// `Field` owns its value and the errors from its most recent validation.
/// Setting a value never validates; call [`Validatable::is_valid`] to check the
/// current value against the maximum length and any extra rules.
///
/// # Example
///
/// ```
/// use phorms::fields::Field;
/// use phorms::render::Renderable;
/// use phorms::validation::Validatable;
///
/// let mut field = Field::with_help_text("Test field", "Enter & win.").unwrap();
/// assert_eq!(field.help_text(), r#"<p class="phorm_help">Enter &amp; win.</p>"#);
///
/// field.set_value("DEADBEEF".repeat(100));
/// assert!(!field.is_valid());
/// assert!(field.has_errors());
/// ```
#[derive(Debug)]
pub struct Field {
    /// Label shown to the user
    label: String,
    /// Machine name used for `name`/`id` attributes
    name: String,
    /// Guidance shown below the widget
    help_text: Option<String>,
    /// Current value
    value: String,
    /// Errors from the most recent validation
    errors: Vec<String>,
    /// Maximum value length in characters
    max_length: usize,
    /// Display width of the input
    size: usize,
    /// CSS class of the help paragraph
    help_class: Option<String>,
    /// Where `html()` renders errors
    error_display: ErrorDisplay,
    /// Rules checked after the length constraint
    rules: RuleSet,
}

impl Field {
    /// Create a field with the given label and no help text.
    pub fn new(label: impl Into<String>) -> Result<Self, FieldBuildError> {
        Self::builder(label).build()
    }

    /// Create a field with a label and help text.
    pub fn with_help_text(
        label: impl Into<String>,
        help_text: impl Into<String>,
    ) -> Result<Self, FieldBuildError> {
        Self::builder(label).help_text(help_text).build()
    }

    /// Start building a field with the given label.
    pub fn builder(label: impl Into<String>) -> FieldBuilder {
        FieldBuilder::new(label)
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) fn from_parts(
        label: String,
        name: String,
        help_text: Option<String>,
        max_length: usize,
        size: usize,
        help_class: Option<String>,
        error_display: ErrorDisplay,
        rules: RuleSet,
    ) -> Self {
        Self {
            label,
            name,
            help_text,
            value: String::new(),
            errors: Vec::new(),
            max_length,
            size,
            help_class,
            error_display,
            rules,
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the machine name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the `id` attribute of the rendered input.
    pub fn html_id(&self) -> String {
        format!("id_{}", self.name)
    }

    /// Get the raw (unescaped) help text, if any.
    pub fn raw_help_text(&self) -> Option<&str> {
        self.help_text.as_deref().filter(|h| !h.is_empty())
    }

    /// Get the maximum value length in characters.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Get the display width of the rendered input.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the extra rules checked after the length constraint.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Clear the value and any recorded errors.
    pub fn clear(&mut self) {
        self.value.clear();
        self.errors.clear();
    }

    fn length_error(&self) -> Option<String> {
        let length = char_len(&self.value);
        (length > self.max_length).then(|| {
            format!(
                "Ensure this value has at most {} characters (it has {}).",
                self.max_length, length
            )
        })
    }
}

// -----------------------------------------------------------------------------
// Validatable implementation
// -----------------------------------------------------------------------------

impl Validatable for Field {
    fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn is_valid(&mut self) -> bool {
        let mut errors: Vec<String> = self.length_error().into_iter().collect();
        errors.extend(self.rules.evaluate(&self.value).into_messages());

        debug!(
            "Field '{}' validated: {} error(s)",
            self.name,
            errors.len()
        );

        self.errors = errors;
        self.errors.is_empty()
    }

    fn errors(&self) -> &[String] {
        &self.errors
    }
}

// -----------------------------------------------------------------------------
// Renderable implementation
// -----------------------------------------------------------------------------

impl Renderable for Field {
    fn help_text(&self) -> String {
        let Some(help) = self.raw_help_text() else {
            return String::new();
        };
        let attrs: Vec<(&str, &str)> = self
            .help_class
            .as_deref()
            .map(|class| ("class", class))
            .into_iter()
            .collect();
        html::element("p", &attrs, &html::escape_html(help))
    }

    fn label_html(&self) -> String {
        let id = self.html_id();
        html::element("label", &[("for", id.as_str())], &html::escape_html(&self.label))
    }

    fn widget_html(&self) -> String {
        let id = self.html_id();
        let size = self.size.to_string();
        let max_length = self.max_length.to_string();
        html::void_element(
            "input",
            &[
                ("type", "text"),
                ("id", id.as_str()),
                ("name", self.name.as_str()),
                ("size", size.as_str()),
                ("maxlength", max_length.as_str()),
                ("value", self.value.as_str()),
            ],
        )
    }

    fn errors_html(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        let items: String = self
            .errors
            .iter()
            .map(|e| html::element("li", &[], &html::escape_html(e)))
            .collect();
        html::element("ul", &[("class", ERROR_CLASS)], &items)
    }

    fn inline_error_html(&self) -> String {
        self.errors
            .first()
            .map(|e| html::element("span", &[("class", ERROR_CLASS)], &html::escape_html(e)))
            .unwrap_or_default()
    }

    fn error_display(&self) -> ErrorDisplay {
        self.error_display
    }
}
