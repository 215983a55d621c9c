//! HTML rendering for fields.

pub mod html;

pub use html::escape_html;

use crate::validation::ErrorDisplay;

/// CSS class given to error markup.
pub const ERROR_CLASS: &str = "phorm_error";

/// Trait for fields that render themselves as HTML fragments.
///
/// Every fragment is self-contained and escaped; an empty string means there
/// is nothing to render.
pub trait Renderable {
    /// Help text escaped and wrapped in a single `<p>` element, or `""` when
    /// the field has no help text.
    fn help_text(&self) -> String;

    /// The `<label>` element.
    fn label_html(&self) -> String;

    /// The input element carrying the current value.
    fn widget_html(&self) -> String;

    /// All recorded errors as a `<ul>`, or `""` when there are none.
    fn errors_html(&self) -> String;

    /// The first recorded error as a `<span>`, or `""` when there are none.
    fn inline_error_html(&self) -> String;

    /// Where `html()` places error markup.
    fn error_display(&self) -> ErrorDisplay;

    /// Label, widget, help text and errors in document order.
    fn html(&self) -> String {
        let mut out = self.label_html();
        out.push_str(&self.widget_html());
        if self.error_display() == ErrorDisplay::Inline {
            out.push_str(&self.inline_error_html());
        }
        out.push_str(&self.help_text());
        if self.error_display() == ErrorDisplay::Below {
            out.push_str(&self.errors_html());
        }
        out
    }
}
