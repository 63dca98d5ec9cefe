//! Whole-form declarations and evaluation.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::SpecError;
use crate::field::FieldSpec;
use crate::ports::FieldSource;
use crate::result::FormReport;

/// An ordered set of fields under one form name.
#[derive(Debug, Clone, Serialize)]
pub struct FormSpec {
    name: String,
    fields: Vec<FieldSpec>,
}

impl FormSpec {
    pub fn builder(name: impl Into<String>) -> FormSpecBuilder {
        FormSpecBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.id() == id)
    }

    /// Shorthand for [`validate_all`] with this form.
    pub fn validate<S: FieldSource + ?Sized>(&self, values: &S) -> FormReport {
        validate_all(values, self)
    }
}

#[derive(Debug)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct FormSpecBuilder {
    name: String,
    fields: Vec<FieldSpec>,
}

impl FormSpecBuilder {
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// # Errors
    ///
    /// [`SpecError::EmptyFormName`] or [`SpecError::DuplicateField`].
    pub fn build(self) -> Result<FormSpec, SpecError> {
        if self.name.is_empty() {
            return Err(SpecError::EmptyFormName);
        }
        let mut seen = HashSet::with_capacity(self.fields.len());
        for field in &self.fields {
            if !seen.insert(field.id()) {
                return Err(SpecError::DuplicateField(field.id().to_owned()));
            }
        }
        Ok(FormSpec {
            name: self.name,
            fields: self.fields,
        })
    }
}

/// Evaluates every field of `form` against the values in `values`.
///
/// A failing field never stops the pass: the report always has one entry per
/// declared field, in declaration order. A field missing from `values` is
/// evaluated as the empty string.
pub fn validate_all<S: FieldSource + ?Sized>(values: &S, form: &FormSpec) -> FormReport {
    let mut report = FormReport::with_capacity(form.fields.len());
    for field in &form.fields {
        let value = values.read(field.id()).unwrap_or_default();
        report.insert(field.id(), field.evaluate(&value));
    }
    tracing::debug!(
        form = %form.name,
        fields = report.len(),
        valid = report.is_valid(),
        "validated form"
    );
    report
}
