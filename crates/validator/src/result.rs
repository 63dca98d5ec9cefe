//! Outcomes of evaluating fields and forms.

use indexmap::IndexMap;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::ports::ErrorSink;
use crate::rule::Rule;

/// The outcome of evaluating one field once.
///
/// Produced fresh by every evaluation and never mutated afterwards; there
/// are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidationResult {
    valid: bool,
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<String>,
}

impl ValidationResult {
    /// Every rule held.
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: None,
            rule: None,
        }
    }

    /// `rule` was the first rule whose predicate returned false.
    pub fn fail(rule: &Rule) -> Self {
        Self {
            valid: false,
            message: Some(rule.message().to_owned()),
            rule: Some(rule.name().to_owned()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The failing rule's message; `None` when valid.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Name of the failing rule; `None` when valid.
    pub fn rule(&self) -> Option<&str> {
        self.rule.as_deref()
    }

    /// Tells the UI to show or hide the message for `field_id`.
    pub fn render<K: ErrorSink + ?Sized>(&self, field_id: &str, sink: &mut K) {
        match &self.message {
            Some(message) => sink.show_error_msg(field_id, message),
            None => sink.hide_error_msg(field_id),
        }
    }
}

/// Per-field results of one pass over a form, in declaration order.
///
/// Whether the form as a whole is valid is derived on demand from the
/// entries, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    results: IndexMap<String, ValidationResult>,
}

impl FormReport {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            results: IndexMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, field_id: &str, result: ValidationResult) {
        self.results.insert(field_id.to_owned(), result);
    }

    /// True iff every field is valid. An empty report is valid.
    pub fn is_valid(&self) -> bool {
        self.results.values().all(ValidationResult::is_valid)
    }

    pub fn get(&self, field_id: &str) -> Option<&ValidationResult> {
        self.results.get(field_id)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationResult)> {
        self.results.iter().map(|(id, result)| (id.as_str(), result))
    }

    /// Invalid fields in declaration order.
    pub fn invalid(&self) -> impl Iterator<Item = (&str, &ValidationResult)> {
        self.iter().filter(|(_, result)| !result.is_valid())
    }

    /// The first invalid field, typically the one to focus.
    pub fn first_invalid(&self) -> Option<(&str, &ValidationResult)> {
        self.invalid().next()
    }

    /// Shows every failing message and hides every passing one.
    pub fn render<K: ErrorSink + ?Sized>(&self, sink: &mut K) {
        for (field_id, result) in self.iter() {
            result.render(field_id, sink);
        }
    }
}

impl Serialize for FormReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FormReport", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("fields", &self.results)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleDescriptor;
    use crate::validators::NotBlank;
    use serde_json::json;

    fn required(message: &'static str) -> Rule {
        Rule::new("required", RuleDescriptor::Required, NotBlank, message)
    }

    #[test]
    fn test_pass_and_fail() {
        let pass = ValidationResult::pass();
        assert!(pass.is_valid());
        assert_eq!(pass.message(), None);

        let fail = ValidationResult::fail(&required("Name is required"));
        assert!(!fail.is_valid());
        assert_eq!(fail.message(), Some("Name is required"));
        assert_eq!(fail.rule(), Some("required"));
    }

    #[test]
    fn test_report_aggregate_is_derived() {
        let mut report = FormReport::default();
        assert!(report.is_valid());

        report.insert("name", ValidationResult::pass());
        assert!(report.is_valid());

        report.insert("email", ValidationResult::fail(&required("Email is required")));
        report.insert("phone", ValidationResult::pass());
        assert!(!report.is_valid());
        assert_eq!(report.first_invalid().map(|(id, _)| id), Some("email"));
        assert_eq!(report.invalid().count(), 1);
    }

    #[test]
    fn test_report_serializes_in_declaration_order() {
        let mut report = FormReport::default();
        report.insert("subject", ValidationResult::pass());
        report.insert("message", ValidationResult::fail(&required("Message is required")));

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            json!({
                "valid": false,
                "fields": {
                    "subject": { "valid": true, "message": null },
                    "message": { "valid": false, "message": "Message is required", "rule": "required" },
                }
            })
        );
        let text = serde_json::to_string(&report).unwrap();
        assert!(text.find("subject").unwrap() < text.find("\"message\":{").unwrap());
    }
}
