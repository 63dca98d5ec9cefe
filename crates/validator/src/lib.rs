//! # eventdesk-validator
//!
//! Declarative field validation for the EventDesk forms.
//!
//! A form is a [`FormSpec`]: an ordered list of [`FieldSpec`]s, each an
//! ordered chain of [`Rule`]s plus a [`Trigger`]. Evaluating a field returns
//! the message of the first rule that fails, or success. Evaluating a form
//! checks every field and never stops at the first bad one.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use eventdesk_validator::prelude::*;
//!
//! let catalog = FormCatalog::builtin();
//! let contact = catalog.get("contact").unwrap();
//!
//! let values = HashMap::from([
//!     ("name".to_string(), ""),
//!     ("email".to_string(), "bad"),
//!     ("phone".to_string(), "123"),
//! ]);
//!
//! let report = validate_all(&values, contact);
//! assert_eq!(report.len(), 5);
//! assert!(!report.is_valid());
//! assert_eq!(report.get("name").unwrap().message(), Some("Name is required"));
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait and
//!   [`ValidationError`](foundation::ValidationError)
//! - [`validators`] and [`combinators`]: the predicates behind the rules
//! - [`rules`]: the standard rule library
//! - [`FormSession`]: per-field UI state driven by input, blur and submit
//!
//! Pages plug in through the [`FieldSource`], [`ErrorSink`] and
//! [`SubmitControl`] traits.

#![allow(clippy::result_large_err)]

pub mod catalog;
pub mod combinators;
pub mod error;
pub mod field;
pub mod form;
pub mod foundation;
mod macros;
pub mod ports;
pub mod prelude;
pub mod result;
pub mod rule;
pub mod rules;
pub mod session;
pub mod validators;

pub use catalog::FormCatalog;
pub use error::{SessionError, SpecError};
pub use field::{FieldSpec, FieldSpecBuilder, Trigger, evaluate};
pub use form::{FormSpec, FormSpecBuilder, validate_all};
pub use ports::{ErrorSink, FieldSource, NullSink, SubmitControl, SubmitEvent};
pub use result::{FormReport, ValidationResult};
pub use rule::{Rule, RuleDescriptor};
pub use session::{EventKind, FieldEvent, FieldState, FormSession};
