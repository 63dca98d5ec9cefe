//! Per-field UI state for one rendered form.
//!
//! Every field starts [`Untouched`](FieldState::Untouched). An event that
//! matches the field's [`Trigger`](crate::Trigger) evaluates it and moves it
//! to `Valid` or `Invalid`; events that don't match are ignored. Submitting
//! evaluates every field regardless of trigger or state. No state is
//! terminal.

use serde::Serialize;

use crate::error::SessionError;
use crate::form::FormSpec;
use crate::ports::{ErrorSink, FieldSource, SubmitControl};
use crate::result::{FormReport, ValidationResult};

/// Where a field stands from the user's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldState {
    /// Not evaluated since the session started or was reset.
    #[default]
    Untouched,
    Valid,
    Invalid,
}

impl From<&ValidationResult> for FieldState {
    fn from(result: &ValidationResult) -> Self {
        if result.is_valid() {
            Self::Valid
        } else {
            Self::Invalid
        }
    }
}

/// A UI event that may evaluate a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Input,
    Blur,
}

/// An event on a specific field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEvent {
    pub field: String,
    pub kind: EventKind,
}

impl FieldEvent {
    pub fn input(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: EventKind::Input,
        }
    }

    pub fn blur(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: EventKind::Blur,
        }
    }
}

/// Drives one form's fields through their states.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use eventdesk_validator::{FieldEvent, FieldState, FormCatalog, FormSession, NullSink, SubmitEvent};
///
/// let catalog = FormCatalog::builtin();
/// let mut session = FormSession::new(catalog.get("login").unwrap());
/// let values = HashMap::from([("email".to_string(), "bad"), ("password".to_string(), "")]);
///
/// // `login` validates on blur, so typing alone changes nothing
/// assert!(session.handle(&FieldEvent::input("email"), &values, &mut NullSink).unwrap().is_none());
/// assert_eq!(session.state("email"), Some(FieldState::Untouched));
///
/// session.handle(&FieldEvent::blur("email"), &values, &mut NullSink).unwrap();
/// assert_eq!(session.state("email"), Some(FieldState::Invalid));
///
/// let mut submit = SubmitEvent::new();
/// let report = session.submit(&values, &mut NullSink, &mut submit);
/// assert!(!report.is_valid());
/// assert!(submit.default_prevented());
/// ```
#[derive(Debug, Clone)]
pub struct FormSession<'f> {
    form: &'f FormSpec,
    states: Vec<FieldState>,
}

impl<'f> FormSession<'f> {
    pub fn new(form: &'f FormSpec) -> Self {
        Self {
            form,
            states: vec![FieldState::Untouched; form.fields().len()],
        }
    }

    pub fn form(&self) -> &'f FormSpec {
        self.form
    }

    /// Current state of `field_id`, or `None` if the form has no such field.
    pub fn state(&self, field_id: &str) -> Option<FieldState> {
        self.position(field_id).map(|index| self.states[index])
    }

    /// All fields with their states, in declaration order.
    pub fn states(&self) -> impl Iterator<Item = (&'f str, FieldState)> + '_ {
        self.form
            .fields()
            .iter()
            .map(|field| field.id())
            .zip(self.states.iter().copied())
    }

    /// Handles an input or blur event.
    ///
    /// Returns the fresh result when the event matched the field's trigger,
    /// `None` when it was ignored.
    ///
    /// # Errors
    ///
    /// [`SessionError::UnknownField`] if the form has no such field.
    pub fn handle<S, K>(
        &mut self,
        event: &FieldEvent,
        source: &S,
        sink: &mut K,
    ) -> Result<Option<ValidationResult>, SessionError>
    where
        S: FieldSource + ?Sized,
        K: ErrorSink + ?Sized,
    {
        let index = self
            .position(&event.field)
            .ok_or_else(|| SessionError::UnknownField {
                form: self.form.name().to_owned(),
                field: event.field.clone(),
            })?;
        let field = &self.form.fields()[index];

        if !field.trigger().responds_to(event.kind) {
            tracing::trace!(
                form = self.form.name(),
                field = field.id(),
                event = ?event.kind,
                "event does not match trigger"
            );
            return Ok(None);
        }

        let value = source.read(field.id()).unwrap_or_default();
        let result = field.evaluate(&value);
        self.states[index] = FieldState::from(&result);
        result.render(field.id(), sink);

        tracing::debug!(
            form = self.form.name(),
            field = field.id(),
            valid = result.is_valid(),
            rule = result.rule(),
            "evaluated field"
        );
        Ok(Some(result))
    }

    /// Evaluates every field and cancels the submission if any is invalid.
    pub fn submit<S, K, C>(&mut self, source: &S, sink: &mut K, control: &mut C) -> FormReport
    where
        S: FieldSource + ?Sized,
        K: ErrorSink + ?Sized,
        C: SubmitControl + ?Sized,
    {
        let report = self.form.validate(source);
        for (state, (_, result)) in self.states.iter_mut().zip(report.iter()) {
            *state = FieldState::from(result);
        }
        report.render(sink);

        if report.is_valid() {
            tracing::debug!(form = self.form.name(), "submission allowed");
        } else {
            let invalid: Vec<&str> = report.invalid().map(|(id, _)| id).collect();
            tracing::info!(
                form = self.form.name(),
                invalid = ?invalid,
                "submission cancelled"
            );
            control.prevent_default();
        }
        report
    }

    /// Returns every field to `Untouched`.
    pub fn reset(&mut self) {
        self.states.fill(FieldState::Untouched);
    }

    fn position(&self, field_id: &str) -> Option<usize> {
        self.form.fields().iter().position(|field| field.id() == field_id)
    }
}
