//! EventDesk API server library.
//!
//! Exposes config, state, error handling and routes so integration tests and
//! the `eventdesk-server` binary build the same application.

pub mod config;
pub mod error;
pub mod not_found;
pub mod router;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use config::{ApiConfig, Environment};
pub use error::{ApiError, ApiResult, ErrorEnvelope, error_handler};
pub use not_found::handle_404;
pub use router::build_app_router;
pub use state::AppState;
