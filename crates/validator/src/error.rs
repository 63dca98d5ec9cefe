//! Errors raised while declaring forms or driving a session.
//!
//! A value failing its rules is never an error; it is a
//! [`ValidationResult`](crate::ValidationResult). These types cover mistakes in
//! the declarations themselves and misuse of a [`FormSession`](crate::FormSession).

/// A field, form or catalog declaration that breaks an invariant.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error("field id must not be empty")]
    EmptyFieldId,

    #[error("form name must not be empty")]
    EmptyFormName,

    #[error("rule `{rule}` on field `{field}` has an empty message")]
    EmptyMessage { field: String, rule: String },

    /// A presence rule was declared after a rule that assumes non-empty input,
    /// which would let the dependent rule's message mask the required one.
    #[error("required rule `{rule}` on field `{field}` must come before `{dependent}`")]
    RequiredAfterDependent {
        field: String,
        rule: String,
        dependent: String,
    },

    #[error("field `{0}` is declared more than once")]
    DuplicateField(String),

    #[error("form `{0}` is registered more than once")]
    DuplicateForm(String),

    #[error("rule `{rule}` has an invalid pattern: {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },
}

/// Misuse of a [`FormSession`](crate::FormSession).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("form `{form}` has no field `{field}`")]
    UnknownField { form: String, field: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SpecError::RequiredAfterDependent {
            field: "email".into(),
            rule: "required".into(),
            dependent: "email".into(),
        };
        assert_eq!(
            err.to_string(),
            "required rule `required` on field `email` must come before `email`"
        );

        let err = SessionError::UnknownField {
            form: "login".into(),
            field: "username".into(),
        };
        assert_eq!(err.to_string(), "form `login` has no field `username`");
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = SpecError::InvalidPattern {
            rule: "slug".into(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
