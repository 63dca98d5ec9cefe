//! Structured predicate failures.
//!
//! A [`ValidationError`] is what a [`Validate`](super::Validate) implementor
//! returns when its check does not hold. Field-level reporting does not expose
//! it directly: a [`Rule`](crate::Rule) replaces the message with its own
//! user-facing text and keeps the original as a nested cause.
//!
//! All string fields use `Cow<'static, str>` so the common case of static
//! codes and messages never allocates.

use std::borrow::Cow;
use std::fmt;

/// A structured failure produced by a predicate.
///
/// # Examples
///
/// ```rust
/// use eventdesk_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "Must be at least 8 characters")
///     .with_field("password")
///     .with_param("min", "8");
///
/// assert_eq!(error.param("min"), Some("8"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Machine-readable code, e.g. `"required"`, `"email"`, `"exact_digits"`.
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Field id the failure belongs to, when known.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key/value parameters (typically 0-2 entries).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Underlying failures, e.g. the original error behind a message override.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field id.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Appends a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Appends a nested cause.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns the innermost code, following the first nested cause.
    #[must_use]
    pub fn root_code(&self) -> &str {
        self.nested
            .first()
            .map_or_else(|| self.code.as_ref(), ValidationError::root_code)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// A blank value where one is required.
    pub fn required() -> Self {
        Self::new("required", "This field is required")
    }

    /// A value shorter than `min` characters.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// A value longer than `max` characters.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// A value that does not have the `expected` shape.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_format", "Invalid format").with_param("expected", expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert!(error.field.is_none());
    }

    #[test]
    fn test_params_lookup() {
        let error = ValidationError::min_length(8, 3);
        assert_eq!(error.param("min"), Some("8"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("max"), None);
    }

    #[test]
    fn test_display_with_field_and_params() {
        let error = ValidationError::min_length(2, 1).with_field("name");
        assert_eq!(
            error.to_string(),
            "[name] min_length: Must be at least 2 characters (min=2, actual=1)"
        );
    }

    #[test]
    fn test_root_code_follows_nested() {
        let error = ValidationError::new("outer", "Outer")
            .with_nested_error(ValidationError::new("inner", "Inner"));
        assert_eq!(error.root_code(), "inner");
        assert_eq!(ValidationError::required().root_code(), "required");
    }

    #[test]
    fn test_static_strings_do_not_allocate() {
        let error = ValidationError::required();
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
