//! Shared helpers for crmforms-axum integration tests.

pub mod fake_port;
