//! Format validators: email, fixed-width digit strings and arbitrary regexes.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

// Something, an `@`, something, a dot, something; no whitespace and no
// second `@` anywhere. `a@b` is rejected because the domain has no dot.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

crate::validator! {
    /// Validates email format.
    pub Email { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidationError::invalid_format("email") }
    new() {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
    fn email();
}

crate::validator! {
    /// Value is exactly `digits` ASCII digits, i.e. matches `^[0-9]{digits}$`.
    ///
    /// Phone and mobile fields use `digits = 10`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactDigits { digits: usize } for str;
    rule(self, input) { input.len() == self.digits && input.bytes().all(|b| b.is_ascii_digit()) }
    error(self, input) {
        ValidationError::new(
            "exact_digits",
            format!("Must be exactly {} digits", self.digits),
        )
        .with_param("digits", self.digits.to_string())
    }
    fn exact_digits(digits: usize);
}

crate::validator! {
    /// Value matches a regular expression.
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("regex")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.com", true)]
    #[case("user.name+tag@example.co.uk", true)]
    #[case("a@b", false)]
    #[case("plainstring", false)]
    #[case("@example.com", false)]
    #[case("user@", false)]
    #[case("us er@example.com", false)]
    #[case("a@@b.com", false)]
    #[case("", false)]
    fn test_email(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(email().is_valid(input), expected, "input: {input:?}");
    }

    #[rstest]
    #[case("1234567890", true)]
    #[case("123456789", false)]
    #[case("12345678901", false)]
    #[case("123abc7890", false)]
    #[case("", false)]
    #[case("１２３４５６７８９０", false)]
    fn test_exact_digits_ten(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(exact_digits(10).is_valid(input), expected, "input: {input:?}");
    }

    #[test]
    fn test_exact_digits_error() {
        let error = exact_digits(10).validate("123").unwrap_err();
        assert_eq!(error.code, "exact_digits");
        assert_eq!(error.param("digits"), Some("10"));
    }

    #[test]
    fn test_regex() {
        let validator = matches_regex(r"^EV-\d{4}$").unwrap();
        assert!(validator.validate("EV-2024").is_ok());
        assert!(validator.validate("EV-24").is_err());
        assert!(matches_regex("(unclosed").is_err());
    }
}
