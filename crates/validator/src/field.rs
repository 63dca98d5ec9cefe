//! Single-field evaluation.

use serde::Serialize;

use crate::error::SpecError;
use crate::result::ValidationResult;
use crate::rule::Rule;
use crate::session::EventKind;

/// Evaluates `value` against `rules` in declared order.
///
/// The first rule whose predicate returns false decides the result; later
/// rules are not consulted. An empty rule list is always valid.
///
/// # Examples
///
/// ```rust
/// use eventdesk_validator::{evaluate, rules};
///
/// let chain = [
///     rules::required("Name is required"),
///     rules::min_length(2, "Name must be at least 2 characters"),
/// ];
///
/// assert_eq!(evaluate("", &chain).message(), Some("Name is required"));
/// assert_eq!(evaluate("A", &chain).message(), Some("Name must be at least 2 characters"));
/// assert!(evaluate("Ada", &chain).is_valid());
/// assert!(evaluate("", &[]).is_valid());
/// ```
pub fn evaluate(value: &str, rules: &[Rule]) -> ValidationResult {
    rules
        .iter()
        .find(|rule| !rule.holds(value))
        .map_or_else(ValidationResult::pass, ValidationResult::fail)
}

/// The UI event that (re-)evaluates a field.
///
/// Submission evaluates every field whatever its trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Trigger {
    #[serde(rename = "input")]
    OnInput,
    #[serde(rename = "blur")]
    OnBlur,
    #[default]
    #[serde(rename = "submit")]
    OnSubmit,
}

impl Trigger {
    /// Whether an event of `kind` evaluates a field with this trigger.
    pub fn responds_to(self, kind: EventKind) -> bool {
        matches!(
            (self, kind),
            (Self::OnInput, EventKind::Input) | (Self::OnBlur, EventKind::Blur)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnInput => "input",
            Self::OnBlur => "blur",
            Self::OnSubmit => "submit",
        }
    }
}

/// An ordered rule chain bound to one field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    id: String,
    trigger: Trigger,
    rules: Vec<Rule>,
}

impl FieldSpec {
    pub fn builder(id: impl Into<String>) -> FieldSpecBuilder {
        FieldSpecBuilder {
            id: id.into(),
            trigger: Trigger::default(),
            rules: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn trigger(&self) -> Trigger {
        self.trigger
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluates `value` against this field's rules.
    pub fn evaluate(&self, value: &str) -> ValidationResult {
        evaluate(value, &self.rules)
    }
}

/// Builder for [`FieldSpec`].
///
/// ```rust
/// use eventdesk_validator::{rules, FieldSpec, Trigger};
///
/// let phone = FieldSpec::builder("phone")
///     .trigger(Trigger::OnBlur)
///     .rule(rules::required("Phone number is required"))
///     .rule(rules::exact_digits(10, "Phone number must be exactly 10 digits"))
///     .build()
///     .unwrap();
///
/// assert_eq!(phone.evaluate("123").message(), Some("Phone number must be exactly 10 digits"));
/// ```
#[derive(Debug)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct FieldSpecBuilder {
    id: String,
    trigger: Trigger,
    rules: Vec<Rule>,
}

impl FieldSpecBuilder {
    pub fn trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Appends a rule; rules run in the order they are added.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Checks the declaration and freezes it.
    ///
    /// # Errors
    ///
    /// - [`SpecError::EmptyFieldId`] if the id is empty
    /// - [`SpecError::EmptyMessage`] if any rule has an empty message
    /// - [`SpecError::RequiredAfterDependent`] if a presence rule follows a
    ///   rule that rejects the empty string
    pub fn build(self) -> Result<FieldSpec, SpecError> {
        if self.id.is_empty() {
            return Err(SpecError::EmptyFieldId);
        }

        let mut first_dependent: Option<&Rule> = None;
        for rule in &self.rules {
            if rule.message().is_empty() {
                return Err(SpecError::EmptyMessage {
                    field: self.id.clone(),
                    rule: rule.name().to_owned(),
                });
            }
            if rule.descriptor().is_presence() {
                if let Some(dependent) = first_dependent {
                    return Err(SpecError::RequiredAfterDependent {
                        field: self.id.clone(),
                        rule: rule.name().to_owned(),
                        dependent: dependent.name().to_owned(),
                    });
                }
            } else if first_dependent.is_none() && !rule.holds("") {
                // fails on blank input, so its message would mask a later
                // presence rule
                first_dependent = Some(rule);
            }
        }

        Ok(FieldSpec {
            id: self.id,
            trigger: self.trigger,
            rules: self.rules,
        })
    }
}
