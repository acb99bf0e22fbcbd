//! Command handlers.
//!
//! Each submodule handles one command.

pub mod schema;
pub mod serve;
