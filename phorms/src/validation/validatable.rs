//! Validatable trait for values that carry their own validation state.

/// Trait for fields that can be validated.
///
/// Implementors store a current value and the errors produced by the most
/// recent validation. `errors()` is non-empty exactly when the last call to
/// `is_valid()` returned `false`.
pub trait Validatable {
    /// Store a new value. Does not validate and does not touch the error list.
    fn set_value(&mut self, value: impl Into<String>);

    /// Get the current value.
    fn value(&self) -> &str;

    /// Re-evaluate the current value, replacing the error list.
    ///
    /// Calling this repeatedly without changing the value yields the same
    /// result and the same errors.
    fn is_valid(&mut self) -> bool;

    /// Errors recorded by the most recent validation.
    fn errors(&self) -> &[String];

    /// Check if the most recent validation recorded any errors.
    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }
}
