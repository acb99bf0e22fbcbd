//! Recording `ObjectClientPort` for route tests.

use std::sync::Mutex;

use async_trait::async_trait;
use crmforms_core::{
    ObjectClientPort, ObjectPortError, ObjectPortResult, PropertyBag, RemoteObject,
};

/// One call received by the port.
#[derive(Debug, Clone)]
pub enum Call {
    List {
        collection: String,
    },
    Get {
        collection: String,
        id: String,
    },
    Create {
        collection: String,
        properties: PropertyBag,
    },
    Update {
        collection: String,
        id: String,
        properties: PropertyBag,
    },
}

/// Answers from canned data and records every call.
///
/// `get` finds objects by identifier and reports `NotFound` otherwise.
/// With `failing`, every call returns the error built by that closure.
#[derive(Default)]
pub struct RecordingPort {
    list: Vec<RemoteObject>,
    objects: Vec<RemoteObject>,
    failure: Option<Box<dyn Fn() -> ObjectPortError + Send + Sync>>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(mut self, objects: Vec<RemoteObject>) -> Self {
        self.list = objects;
        self
    }

    pub fn with_object(mut self, object: RemoteObject) -> Self {
        self.objects.push(object);
        self
    }

    pub fn failing(mut self, make: impl Fn() -> ObjectPortError + Send + Sync + 'static) -> Self {
        self.failure = Some(Box::new(make));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> ObjectPortResult<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(make) => Err(make()),
            None => Ok(()),
        }
    }
}

fn saved(id: &str, properties: PropertyBag) -> RemoteObject {
    RemoteObject::new(id, properties)
}

#[async_trait]
impl ObjectClientPort for RecordingPort {
    async fn list(
        &self,
        collection: &str,
        _properties: &[String],
    ) -> ObjectPortResult<Vec<RemoteObject>> {
        self.record(Call::List {
            collection: collection.to_string(),
        })?;
        Ok(self.list.clone())
    }

    async fn get(
        &self,
        collection: &str,
        id: &str,
        _properties: &[String],
    ) -> ObjectPortResult<RemoteObject> {
        self.record(Call::Get {
            collection: collection.to_string(),
            id: id.to_string(),
        })?;
        self.objects
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| ObjectPortError::NotFound {
                collection: collection.to_string(),
                id: Some(id.to_string()),
            })
    }

    async fn create(
        &self,
        collection: &str,
        properties: PropertyBag,
    ) -> ObjectPortResult<RemoteObject> {
        self.record(Call::Create {
            collection: collection.to_string(),
            properties: properties.clone(),
        })?;
        Ok(saved("100", properties))
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        properties: PropertyBag,
    ) -> ObjectPortResult<RemoteObject> {
        self.record(Call::Update {
            collection: collection.to_string(),
            id: id.to_string(),
            properties: properties.clone(),
        })?;
        Ok(saved(id, properties))
    }
}
