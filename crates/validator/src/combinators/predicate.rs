//! PREDICATE adapter - plain functions as validators

use std::borrow::Cow;
use std::fmt;

use crate::foundation::{Validate, ValidationError};

/// Adapts a `Fn(&str) -> bool` into a [`Validate`] implementor.
///
/// The function must be pure; it is called once per evaluation and may be
/// called again with the same input at any time.
///
/// # Examples
///
/// ```rust
/// use eventdesk_validator::combinators::predicate;
/// use eventdesk_validator::foundation::Validate;
///
/// let no_digits = predicate("no_digits", |v: &str| !v.chars().any(|c| c.is_ascii_digit()));
/// assert!(no_digits.validate("Ada").is_ok());
/// assert_eq!(no_digits.validate("Ada1").unwrap_err().code, "no_digits");
/// ```
#[derive(Clone)]
pub struct Predicate<F> {
    code: Cow<'static, str>,
    check: F,
}

impl<F> Predicate<F>
where
    F: Fn(&str) -> bool,
{
    /// Wraps `check`; failures carry `code`.
    pub fn new(code: impl Into<Cow<'static, str>>, check: F) -> Self {
        Self {
            code: code.into(),
            check,
        }
    }
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").field("code", &self.code).finish_non_exhaustive()
    }
}

impl<F> Validate for Predicate<F>
where
    F: Fn(&str) -> bool,
{
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if (self.check)(input) {
            Ok(())
        } else {
            Err(ValidationError::new(self.code.clone(), "Predicate returned false"))
        }
    }

    fn name(&self) -> &str {
        &self.code
    }
}

/// Creates a [`Predicate`].
pub fn predicate<F>(code: impl Into<Cow<'static, str>>, check: F) -> Predicate<F>
where
    F: Fn(&str) -> bool,
{
    Predicate::new(code, check)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_pass_and_fail() {
        let starts_with_hash = predicate("hashtag", |v| v.starts_with('#'));
        assert!(starts_with_hash.is_valid("#rustconf"));
        assert!(!starts_with_hash.is_valid("rustconf"));
        assert_eq!(starts_with_hash.name(), "hashtag");
    }

    #[test]
    fn test_debug_hides_closure() {
        let p = predicate("always", |_| true);
        assert_eq!(format!("{p:?}"), "Predicate { code: \"always\", .. }");
    }
}
