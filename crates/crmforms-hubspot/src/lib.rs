//! HubSpot CRM v3 objects client.
//!
//! Implements [`crmforms_core::ObjectClientPort`] on top of reqwest. The
//! transport sits behind an internal `HttpBackend` trait so the client can
//! be exercised against canned responses in tests.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultHubSpotClient is meant to be
// used through the ObjectClientPort trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultHubSpotClient;

// Configuration
pub use config::{DEFAULT_BASE_URL, HubSpotClientConfig};

// Errors raised while building the client
pub use error::HubSpotError;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio as _;
