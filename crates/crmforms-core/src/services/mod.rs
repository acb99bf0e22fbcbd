//! Application services composing ports and the field mapper.

mod object_service;

pub use object_service::{ObjectService, SubmitOutcome};
