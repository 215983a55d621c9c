//! Phorms: labeled form fields with escaped help text and lazy validation.
//!
//! ```
//! use phorms::prelude::*;
//!
//! let mut field = Field::with_help_text("Test field", "Enter your test value.").unwrap();
//! field.set_value("Test value");
//!
//! assert!(field.is_valid());
//! assert!(field.errors().is_empty());
//! assert_eq!(
//!     field.help_text(),
//!     r#"<p class="phorm_help">Enter your test value.</p>"#
//! );
//! ```

pub mod config;
pub mod error;
pub mod fields;
pub mod render;
pub mod utils;
pub mod validation;

pub mod prelude {
    pub use crate::config::FieldConfig;
    pub use crate::error::{ConfigError, FieldBuildError};
    pub use crate::fields::{Field, FieldBuilder};
    pub use crate::render::{Renderable, escape_html};
    pub use crate::validation::{ErrorDisplay, Rule, RuleSet, Validatable, ValidationOutcome};
}
