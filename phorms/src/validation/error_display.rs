use serde::{Deserialize, Serialize};

/// Where a rendered field places its validation errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorDisplay {
    /// Render the full error list after the widget and help text (default).
    #[default]
    Below,
    /// Render only the first error, directly after the widget.
    Inline,
    /// Don't render error markup.
    None,
}
