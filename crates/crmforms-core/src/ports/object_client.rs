//! Remote object client port trait.

use async_trait::async_trait;

use super::error::ObjectPortResult;
use crate::domain::{PropertyBag, RemoteObject};

/// Port trait for one remote object collection API.
///
/// # Design
///
/// - Collection and requested properties are passed per call; the client
///   itself holds only the credential and transport settings
/// - Returns `ObjectPortError` for all failures
/// - No retries: every call maps to exactly one upstream request
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectClientPort: Send + Sync {
    /// Fetch the first page of objects in `collection`.
    async fn list(
        &self,
        collection: &str,
        properties: &[String],
    ) -> ObjectPortResult<Vec<RemoteObject>>;

    /// Fetch one object by identifier.
    async fn get(
        &self,
        collection: &str,
        id: &str,
        properties: &[String],
    ) -> ObjectPortResult<RemoteObject>;

    /// Create an object; the remote service assigns the identifier.
    async fn create(
        &self,
        collection: &str,
        properties: PropertyBag,
    ) -> ObjectPortResult<RemoteObject>;

    /// Merge `properties` into an existing object.
    async fn update(
        &self,
        collection: &str,
        id: &str,
        properties: PropertyBag,
    ) -> ObjectPortResult<RemoteObject>;
}
