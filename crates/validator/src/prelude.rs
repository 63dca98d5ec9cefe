//! Prelude module for convenient imports.
//!
//! ```rust
//! use eventdesk_validator::prelude::*;
//!
//! let name = FieldSpec::builder("name")
//!     .trigger(Trigger::OnBlur)
//!     .rule(rules::required("Name is required"))
//!     .build()
//!     .unwrap();
//! assert!(name.evaluate("Ada").is_valid());
//! ```

pub use crate::foundation::{Validate, ValidateExt, ValidationError};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

pub use crate::combinators::{And, Predicate, WithMessage, predicate, with_message};

pub use crate::rules;

pub use crate::{
    ErrorSink, EventKind, FieldEvent, FieldSource, FieldSpec, FieldState, FormCatalog, FormReport,
    FormSession, FormSpec, NullSink, Rule, RuleDescriptor, SessionError, SpecError, SubmitControl,
    SubmitEvent, Trigger, ValidationResult, evaluate, validate_all,
};
