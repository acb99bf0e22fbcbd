//! Object service - the three per-request pipelines.
//!
//! Each method performs at most one call on the [`ObjectClientPort`] and
//! holds no state between calls.

use std::sync::Arc;

use crate::domain::{FormSubmission, ObjectSchema, ObjectView, ViewMode};
use crate::mapper;
use crate::ports::{ObjectClientPort, ObjectPortResult};

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new object was created with this identifier.
    Created { id: String },
    /// The object with this identifier was updated.
    Updated { id: String },
}

/// List, edit-form and submit pipelines for one schema.
pub struct ObjectService {
    schema: ObjectSchema,
    properties: Vec<String>,
    client: Arc<dyn ObjectClientPort>,
}

impl ObjectService {
    pub fn new(schema: ObjectSchema, client: Arc<dyn ObjectClientPort>) -> Self {
        let properties = schema.requested_properties();
        Self {
            schema,
            properties,
            client,
        }
    }

    pub const fn schema(&self) -> &ObjectSchema {
        &self.schema
    }

    /// Fetch the collection and project it for the list page.
    pub async fn list(&self) -> ObjectPortResult<Vec<ObjectView>> {
        let objects = self
            .client
            .list(&self.schema.collection, &self.properties)
            .await?;

        tracing::debug!(
            collection = %self.schema.collection,
            count = objects.len(),
            "Fetched objects"
        );

        Ok(objects
            .iter()
            .map(|object| mapper::to_view(&self.schema, object, ViewMode::Display))
            .collect())
    }

    /// Build the edit form: blank without an identifier, pre-filled with
    /// the fetched object otherwise.
    pub async fn edit_form(&self, id: Option<&str>) -> ObjectPortResult<ObjectView> {
        let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) else {
            return Ok(mapper::empty_view(&self.schema));
        };

        let object = self
            .client
            .get(&self.schema.collection, id, &self.properties)
            .await?;

        Ok(mapper::to_view(&self.schema, &object, ViewMode::Edit))
    }

    /// Create or update depending on whether the form carries an identifier.
    pub async fn submit(&self, form: &FormSubmission) -> ObjectPortResult<SubmitOutcome> {
        let properties = mapper::to_properties(&self.schema, form);
        let collection = &self.schema.collection;

        if let Some(id) = form.identifier() {
            tracing::debug!(collection = %collection, id, "Updating object");
            let object = self.client.update(collection, id, properties).await?;
            Ok(SubmitOutcome::Updated {
                id: non_empty_or(object.id, id),
            })
        } else {
            tracing::debug!(collection = %collection, "Creating object");
            let object = self.client.create(collection, properties).await?;
            Ok(SubmitOutcome::Created { id: object.id })
        }
    }
}

fn non_empty_or(id: String, fallback: &str) -> String {
    if id.is_empty() { fallback.to_string() } else { id }
}
