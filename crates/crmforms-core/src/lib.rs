//! Core domain for crmforms.
//!
//! Holds everything that does not depend on a transport: the schema
//! descriptor that parameterizes a deployment, the remote object and view
//! model types, the field mapper, the client port implemented by
//! `crmforms-hubspot`, and the object service the web adapter delegates to.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod mapper;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    DEFAULT_ID_PROPERTY, FieldKind, FieldSpec, FieldView, FormError, FormSubmission, ID_FIELD,
    ObjectSchema, ObjectView, PRESET_NAMES, PropertyBag, RemoteObject, SchemaError, SelectOption,
    ViewMode, value_text,
};
pub use ports::{ObjectClientPort, ObjectPortError, ObjectPortResult};
pub use services::{ObjectService, SubmitOutcome};

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio as _;
#[cfg(test)]
use tokio_test as _;
