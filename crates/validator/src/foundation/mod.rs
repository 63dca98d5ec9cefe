//! Validation foundation
//!
//! The building blocks every rule is made of:
//!
//! - **Traits**: [`Validate`] (a pure predicate with a structured failure)
//!   and [`ValidateExt`] (combinator methods)
//! - **Errors**: [`ValidationError`]
//!
//! Field and form level concepts ([`Rule`](crate::Rule),
//! [`FieldSpec`](crate::FieldSpec), [`FormSpec`](crate::FormSpec)) are built
//! on top of these and live at the crate root.

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};

/// Runs every validator against `value` and collects all failures.
///
/// Unlike a rule chain this does not stop at the first failure.
///
/// # Examples
///
/// ```rust
/// use eventdesk_validator::foundation::{Validate, validate_with_all};
/// use eventdesk_validator::validators::{MinLength, NotBlank};
///
/// let blank = NotBlank;
/// let short = MinLength::new(3);
/// let checks: [&dyn Validate<Input = str>; 2] = [&blank, &short];
/// let errors = validate_with_all("ab", &checks).unwrap_err();
/// assert_eq!(errors.len(), 1);
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), Vec<ValidationError>>
where
    V: Validate + ?Sized,
{
    let errors: Vec<ValidationError> = validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod core_tests {
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
    fn test_validate_with_all_success() {
        assert!(validate_with_all("test", &[&AlwaysValid, &AlwaysValid]).is_ok());
    }

    #[test]
    fn test_validate_with_all_collects_every_failure() {
        let valid = AlwaysValid;
        let fails = AlwaysFails;
        let validators: &[&dyn Validate<Input = str>] = &[&fails, &valid, &fails];
        let errors = validate_with_all("test", validators).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
