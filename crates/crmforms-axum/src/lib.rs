//! Axum web adapter for crmforms.
//!
//! Serves the list page, the edit form and the submit endpoint for one
//! schema descriptor. Handlers are thin: they decode the request, call
//! [`crmforms_core::ObjectService`] and render a template.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod templates;

// Re-export primary types
pub use bootstrap::{AppContext, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
