//! Seams between the validator and the page hosting the form.
//!
//! The engine never touches markup. It reads values through a
//! [`FieldSource`], reports messages through an [`ErrorSink`] and cancels
//! submission through a [`SubmitControl`].

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;

/// Reads the current value of a field by its identifier.
///
/// `None` means the page has no such field. Evaluation treats it as an empty
/// string, so a missing required field fails with its required message.
pub trait FieldSource {
    fn read(&self, field_id: &str) -> Option<Cow<'_, str>>;
}

impl<S: FieldSource + ?Sized> FieldSource for &S {
    fn read(&self, field_id: &str) -> Option<Cow<'_, str>> {
        (**self).read(field_id)
    }
}

impl<V, H> FieldSource for HashMap<String, V, H>
where
    V: AsRef<str>,
    H: BuildHasher,
{
    fn read(&self, field_id: &str) -> Option<Cow<'_, str>> {
        self.get(field_id).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

impl<V: AsRef<str>> FieldSource for BTreeMap<String, V> {
    fn read(&self, field_id: &str) -> Option<Cow<'_, str>> {
        self.get(field_id).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

impl<V, H> FieldSource for IndexMap<String, V, H>
where
    V: AsRef<str>,
    H: BuildHasher,
{
    fn read(&self, field_id: &str) -> Option<Cow<'_, str>> {
        self.get(field_id).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

/// Displays or clears the inline message next to a field.
///
/// Both calls must be idempotent: showing the same message twice, or hiding
/// an already hidden one, leaves the page unchanged.
pub trait ErrorSink {
    /// Shows `message` next to `field_id`, replacing anything shown there.
    fn show_error_msg(&mut self, field_id: &str, message: &str);

    /// Clears any message next to `field_id`.
    fn hide_error_msg(&mut self, field_id: &str);
}

impl<K: ErrorSink + ?Sized> ErrorSink for &mut K {
    fn show_error_msg(&mut self, field_id: &str, message: &str) {
        (**self).show_error_msg(field_id, message);
    }

    fn hide_error_msg(&mut self, field_id: &str) {
        (**self).hide_error_msg(field_id);
    }
}

/// Sink that discards every call. Useful for headless checks.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ErrorSink for NullSink {
    fn show_error_msg(&mut self, _field_id: &str, _message: &str) {}

    fn hide_error_msg(&mut self, _field_id: &str) {}
}

/// The pending submit action.
pub trait SubmitControl {
    /// Cancels the submission.
    fn prevent_default(&mut self);
}

/// A submit attempt that records whether it was cancelled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl SubmitControl for SubmitEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
