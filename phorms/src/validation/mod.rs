//! Field validation for Phorms.
//!
//! Validation is lazy: setting a value only stores it, and the value is checked
//! when [`Validatable::is_valid`] is called. Each call re-evaluates the current
//! value and replaces the recorded error list.
//!
//! # Example
//!
//! ```
//! use phorms::fields::Field;
//! use phorms::validation::Validatable;
//!
//! let mut field = Field::builder("Username")
//!     .max_length(16)
//!     .required("Username is required")
//!     .min_length(3, "Username must be at least 3 characters")
//!     .build()
//!     .unwrap();
//!
//! field.set_value("al");
//! assert!(!field.is_valid());
//! assert_eq!(field.errors(), ["Username must be at least 3 characters"]);
//! ```

mod error_display;
mod result;
mod rules;
mod validatable;

pub use error_display::ErrorDisplay;
pub use result::ValidationOutcome;
pub use rules::{Rule, RuleSet};
pub use validatable::Validatable;
