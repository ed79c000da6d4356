//! Error type for interpolation.

use thiserror::Error;

/// Errors raised while interpolating a template.
///
/// Only the error operators (`?`, `!`, `:?`, `:!`) can fail; every other
/// placeholder form resolves to some text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpolateError {
    /// An error-operator placeholder fired because its variable was unset
    /// (or empty, for the colon forms).
    ///
    /// `message` is the placeholder's operand, or `"<name> is not set"` when
    /// the operand is empty.
    #[error("{message}")]
    RequiredVariableMissing { name: String, message: String },
}

impl InterpolateError {
    pub(crate) fn required(name: &str, operand: &str) -> Self {
        let message = if operand.is_empty() {
            format!("{name} is not set")
        } else {
            operand.to_owned()
        };
        InterpolateError::RequiredVariableMissing {
            name: name.to_owned(),
            message,
        }
    }

    /// Name of the variable that triggered the error.
    pub fn name(&self) -> &str {
        match self {
            InterpolateError::RequiredVariableMissing { name, .. } => name,
        }
    }

    /// The message carried by the error (same text as `Display`).
    pub fn message(&self) -> &str {
        match self {
            InterpolateError::RequiredVariableMissing { message, .. } => message,
        }
    }
}

/// Result type for interpolation.
pub type Result<T> = std::result::Result<T, InterpolateError>;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_becomes_message() {
        let e = InterpolateError::required("API_KEY", "API key required");
        assert_eq!(e.to_string(), "API key required");
        assert_eq!(e.name(), "API_KEY");
    }

    #[test]
    fn empty_operand_falls_back_to_generated_message() {
        let e = InterpolateError::required("FOO", "");
        assert_eq!(e.message(), "FOO is not set");
        assert_eq!(e.to_string(), "FOO is not set");
    }
}
