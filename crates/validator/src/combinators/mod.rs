//! Validator combinators
//!
//! - [`And`]: both validators must pass, left error wins
//! - [`WithMessage`]: swap in a user-facing message
//! - [`Predicate`]: lift a plain `Fn(&str) -> bool`

pub mod and;
pub mod message;
pub mod predicate;

pub use and::And;
pub use message::{WithMessage, with_message};
pub use predicate::{Predicate, predicate};
