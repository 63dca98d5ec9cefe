//! AND combinator - logical conjunction of validators

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// The left validator runs first; its error is returned without running the
/// right one.
///
/// # Examples
///
/// ```rust
/// use eventdesk_validator::combinators::And;
/// use eventdesk_validator::foundation::Validate;
/// use eventdesk_validator::validators::{max_length, min_length};
///
/// let validator = And::new(min_length(2), max_length(60));
/// assert!(validator.validate("Ada").is_ok());
/// assert_eq!(validator.validate("A").unwrap_err().code, "min_length");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{exact_digits, max_length, min_length, not_blank};

    #[test]
    fn test_and_both_pass() {
        let validator = And::new(min_length(5), max_length(10));
        assert!(validator.validate("hello").is_ok());
    }

    #[test]
    fn test_and_left_error_wins() {
        let validator = not_blank().and(exact_digits(10));
        assert_eq!(validator.validate("  ").unwrap_err().code, "required");
        assert_eq!(validator.validate("12").unwrap_err().code, "exact_digits");
    }

    #[test]
    fn test_and_chain() {
        let validator = min_length(3).and(max_length(10)).and(min_length(5));
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hey").is_err());
        assert!(validator.validate("a very long string").is_err());
    }
}
