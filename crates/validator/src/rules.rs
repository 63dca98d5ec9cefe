//! The standard rule library.
//!
//! Each constructor pairs a validator from [`validators`](crate::validators)
//! with its [`RuleDescriptor`] and the caller's message.

use std::borrow::Cow;

use crate::combinators::predicate;
use crate::error::SpecError;
use crate::rule::{Rule, RuleDescriptor};
use crate::validators::{Email, ExactDigits, MatchesRegex, MaxLength, MinLength, NotBlank};

type Message = Cow<'static, str>;

/// Fails on empty or whitespace-only values.
pub fn required(message: impl Into<Message>) -> Rule {
    Rule::new("required", RuleDescriptor::Required, NotBlank, message)
}

/// At least `min` characters.
pub fn min_length(min: usize, message: impl Into<Message>) -> Rule {
    Rule::new(
        "min_length",
        RuleDescriptor::MinLength { min },
        MinLength::new(min),
        message,
    )
}

/// At most `max` characters.
pub fn max_length(max: usize, message: impl Into<Message>) -> Rule {
    Rule::new(
        "max_length",
        RuleDescriptor::MaxLength { max },
        MaxLength::new(max),
        message,
    )
}

/// Something, `@`, something, `.`, something, with no whitespace.
pub fn email_format(message: impl Into<Message>) -> Rule {
    Rule::new("email", RuleDescriptor::Email, Email::new(), message)
}

/// Exactly `digits` ASCII digits and nothing else.
pub fn exact_digits(digits: usize, message: impl Into<Message>) -> Rule {
    Rule::new(
        "exact_digits",
        RuleDescriptor::ExactDigits { digits },
        ExactDigits::new(digits),
        message,
    )
}

/// Matches the regular expression `pattern`.
///
/// # Errors
///
/// [`SpecError::InvalidPattern`] if `pattern` does not compile.
pub fn pattern(
    name: impl Into<Message>,
    pattern: &str,
    message: impl Into<Message>,
) -> Result<Rule, SpecError> {
    let name = name.into();
    let validator = MatchesRegex::new(pattern).map_err(|source| SpecError::InvalidPattern {
        rule: name.to_string(),
        source,
    })?;
    Ok(Rule::new(
        name,
        RuleDescriptor::Pattern {
            pattern: pattern.to_owned(),
        },
        validator,
        message,
    ))
}

/// A caller-supplied predicate. It must be pure.
pub fn custom<F>(name: impl Into<Message>, check: F, message: impl Into<Message>) -> Rule
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    let name = name.into();
    Rule::new(
        name.clone(),
        RuleDescriptor::Custom,
        predicate(name, check),
        message,
    )
}
