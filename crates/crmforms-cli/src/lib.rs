//! Command-line entry point for crmforms.
//!
//! `crmforms serve` runs the web server for one schema; `crmforms schema`
//! prints the resolved schema descriptor.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tempfile as _;

// Used by main.rs binary
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod commands;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::{Commands, SchemaArgs, ServeArgs};
pub use parser::Cli;
