//! Core traits for the validation system.

use std::borrow::Cow;
use std::sync::Arc;

use crate::combinators::{And, WithMessage};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every predicate implements.
///
/// A validator is a pure check over an input. It returns `Ok(())` when the
/// check holds and a structured [`ValidationError`] when it does not. Calling
/// it twice with the same input must give the same answer.
///
/// # Examples
///
/// ```rust
/// use eventdesk_validator::foundation::{Validate, ValidationError};
///
/// struct StartsUppercase;
///
/// impl Validate for StartsUppercase {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         match input.chars().next() {
///             Some(c) if c.is_uppercase() => Ok(()),
///             _ => Err(ValidationError::new("uppercase", "Must start with a capital letter")),
///         }
///     }
/// }
///
/// assert!(StartsUppercase.is_valid("Hello"));
/// assert!(!StartsUppercase.is_valid("hello"));
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// `?Sized` so that `str` can be validated directly.
    type Input: ?Sized;

    /// Runs the check.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Boolean view of [`validate`](Self::validate).
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }

    /// Returns the name of this validator, used in diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Combinator methods available on every [`Validate`] implementor.
///
/// # Examples
///
/// ```rust
/// use eventdesk_validator::prelude::*;
///
/// let code = exact_digits(4).and(not_blank()).with_message("Enter the 4-digit code");
/// assert!(code.is_valid("0420"));
/// assert_eq!(code.validate("42").unwrap_err().message, "Enter the 4-digit code");
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Both validators must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Replaces the failure message, keeping the original error nested.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::new("always_fails", "Always fails"))
        }
    }

    #[test]
    fn test_validator_name() {
        assert!(AlwaysValid.name().contains("AlwaysValid"));
    }

    #[test]
    fn test_is_valid_mirrors_validate() {
        assert!(AlwaysValid.is_valid("x"));
        assert!(!AlwaysFails.is_valid("x"));
    }

    #[test]
    fn test_smart_pointers_delegate() {
        let boxed: Box<dyn Validate<Input = str>> = Box::new(AlwaysFails);
        assert!(boxed.validate("x").is_err());

        let shared: Arc<dyn Validate<Input = str> + Send + Sync> = Arc::new(AlwaysValid);
        assert!(shared.validate("x").is_ok());
        assert!((&AlwaysValid).validate("x").is_ok());
    }
}
