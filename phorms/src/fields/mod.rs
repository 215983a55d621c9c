//! Form fields.

mod builder;
mod field;

pub use builder::FieldBuilder;
pub use field::{DEFAULT_HELP_CLASS, DEFAULT_MAX_LENGTH, DEFAULT_SIZE, Field};
