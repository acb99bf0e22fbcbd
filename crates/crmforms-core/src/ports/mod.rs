//! Port definitions.
//!
//! The web adapter talks to the remote CRM only through these traits; the
//! HubSpot implementation lives in `crmforms-hubspot`.

mod error;
mod object_client;

pub use error::{ObjectPortError, ObjectPortResult};
pub use object_client::ObjectClientPort;

#[cfg(test)]
pub use object_client::MockObjectClientPort;
