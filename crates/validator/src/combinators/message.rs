//! MESSAGE combinator - user-facing failure messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the failure message of a validator.
///
/// The original error is kept as the single nested cause, so its code and
/// parameters stay available for diagnostics while the UI shows `message`.
///
/// # Examples
///
/// ```rust
/// use eventdesk_validator::combinators::WithMessage;
/// use eventdesk_validator::foundation::Validate;
/// use eventdesk_validator::validators::MinLength;
///
/// let validator = WithMessage::new(MinLength::new(8), "Password must be at least 8 characters");
///
/// let error = validator.validate("short").unwrap_err();
/// assert_eq!(error.message, "Password must be at least 8 characters");
/// assert_eq!(error.nested[0].code, "min_length");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
}

impl<V> WithMessage<V> {
    /// Creates the combinator.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the replacement message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            ValidationError::new(original.code.clone(), self.message.clone())
                .with_nested_error(original)
        })
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Creates a [`WithMessage`] combinator.
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}
