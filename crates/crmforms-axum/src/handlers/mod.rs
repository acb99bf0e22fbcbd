//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to `ObjectService` and render
//! the result.

pub mod objects;
