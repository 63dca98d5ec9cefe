//! Built-in predicates.
//!
//! These are the raw checks behind the standard rule library in
//! [`rules`](crate::rules). Use them directly when composing custom rules:
//!
//! ```rust
//! use eventdesk_validator::prelude::*;
//!
//! let ticket_code = not_blank().and(matches_regex(r"^EV-\d{4}$").unwrap());
//! assert!(ticket_code.is_valid("EV-0420"));
//! ```

pub mod content;
pub mod length;

pub use content::{Email, ExactDigits, MatchesRegex, email, exact_digits, matches_regex};
pub use length::{MaxLength, MinLength, NotBlank, max_length, min_length, not_blank};
