//! Named forms shipped with the application.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::error::SpecError;
use crate::field::{FieldSpec, FieldSpecBuilder, Trigger};
use crate::form::FormSpec;
use crate::rules;

/// A registry of forms keyed by name, in registration order.
///
/// Specs are immutable and `Send + Sync`, so one catalog can be shared
/// behind an `Arc` by every request handler.
#[derive(Debug, Clone, Default)]
pub struct FormCatalog {
    forms: IndexMap<String, FormSpec>,
}

impl FormCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The application's forms: `contact`, `login`, `host_registration` and
    /// `admin_search`.
    pub fn builtin() -> Self {
        Self::try_builtin().expect("built-in form declarations are well-formed")
    }

    /// Like [`builtin`](Self::builtin), reporting declaration errors.
    ///
    /// # Errors
    ///
    /// Any [`SpecError`] raised by the declarations.
    pub fn try_builtin() -> Result<Self, SpecError> {
        let mut catalog = Self::new();
        catalog.register(contact()?)?;
        catalog.register(login()?)?;
        catalog.register(host_registration()?)?;
        catalog.register(admin_search()?)?;
        Ok(catalog)
    }

    /// Adds a form.
    ///
    /// # Errors
    ///
    /// [`SpecError::DuplicateForm`] if the name is taken.
    pub fn register(&mut self, form: FormSpec) -> Result<(), SpecError> {
        if self.forms.contains_key(form.name()) {
            return Err(SpecError::DuplicateForm(form.name().to_owned()));
        }
        self.forms.insert(form.name().to_owned(), form);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FormSpec> {
        self.forms.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.forms.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormSpec> {
        self.forms.values()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

impl Serialize for FormCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.forms.values())
    }
}

fn field(id: &str, trigger: Trigger) -> FieldSpecBuilder {
    FieldSpec::builder(id).trigger(trigger)
}

/// Public contact form, validated on blur.
pub fn contact() -> Result<FormSpec, SpecError> {
    let on = Trigger::OnBlur;
    FormSpec::builder("contact")
        .field(
            field("name", on)
                .rule(rules::required("Name is required"))
                .rule(rules::min_length(2, "Name must be at least 2 characters"))
                .build()?,
        )
        .field(
            field("email", on)
                .rule(rules::required("Email is required"))
                .rule(rules::email_format("Please enter a valid email address"))
                .build()?,
        )
        .field(
            field("phone", on)
                .rule(rules::required("Phone number is required"))
                .rule(rules::exact_digits(10, "Phone number must be exactly 10 digits"))
                .build()?,
        )
        .field(
            field("subject", on)
                .rule(rules::required("Subject is required"))
                .rule(rules::min_length(3, "Subject must be at least 3 characters"))
                .build()?,
        )
        .field(
            field("message", on)
                .rule(rules::required("Message is required"))
                .rule(rules::min_length(10, "Message must be at least 10 characters"))
                .build()?,
        )
        .build()
}

pub fn login() -> Result<FormSpec, SpecError> {
    let on = Trigger::OnBlur;
    FormSpec::builder("login")
        .field(
            field("email", on)
                .rule(rules::required("Email is required"))
                .rule(rules::email_format("Please enter a valid email address"))
                .build()?,
        )
        .field(
            field("password", on)
                .rule(rules::required("Password is required"))
                .rule(rules::min_length(8, "Password must be at least 8 characters"))
                .build()?,
        )
        .build()
}

/// Event host sign-up, validated as the user types.
pub fn host_registration() -> Result<FormSpec, SpecError> {
    let on = Trigger::OnInput;
    FormSpec::builder("host_registration")
        .field(
            field("orgName", on)
                .rule(rules::required("Organization name is required"))
                .rule(rules::min_length(2, "Organization name must be at least 2 characters"))
                .build()?,
        )
        .field(
            field("email", on)
                .rule(rules::required("Email is required"))
                .rule(rules::email_format("Please enter a valid email address"))
                .build()?,
        )
        .field(
            field("mobile", on)
                .rule(rules::required("Mobile number is required"))
                .rule(rules::exact_digits(10, "Mobile number must be exactly 10 digits"))
                .build()?,
        )
        .field(
            field("description", on)
                .rule(rules::required("Description is required"))
                .rule(rules::min_length(20, "Description must be at least 20 characters"))
                .build()?,
        )
        .field(
            field("password", on)
                .rule(rules::required("Password is required"))
                .rule(rules::min_length(8, "Password must be at least 8 characters"))
                .build()?,
        )
        .build()
}

/// Admin event search; only checked on submit.
pub fn admin_search() -> Result<FormSpec, SpecError> {
    FormSpec::builder("admin_search")
        .field(
            field("query", Trigger::OnSubmit)
                .rule(rules::required("Please enter a search term"))
                .build()?,
        )
        .build()
}
