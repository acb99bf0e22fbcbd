//! Composition root for the Axum server.
//!
//! This module is where concrete implementations are wired together: the
//! HubSpot client is built from its config and handed to the object
//! service as an `ObjectClientPort`, then paired with the templates.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use crmforms_core::{ObjectClientPort, ObjectSchema, ObjectService};
use crmforms_hubspot::{DefaultHubSpotClient, HubSpotClientConfig};

use crate::templates::Templates;

/// Configuration for the Axum server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Optional directory of static assets served for unmatched paths.
    pub static_dir: Option<PathBuf>,
    /// Descriptor of the collection this deployment edits.
    pub schema: ObjectSchema,
    /// Remote API settings, including the credential.
    pub api: HubSpotClientConfig,
}

impl ServerConfig {
    /// Config bound to `0.0.0.0:3000` without static assets.
    pub fn new(schema: ObjectSchema, api: HubSpotClientConfig) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: None,
            schema,
            api,
        }
    }

    /// Set the bind address.
    #[must_use]
    pub fn with_addr(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// Set the static directory served as the router fallback.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context shared by all handlers.
pub struct AppContext {
    /// List, edit-form and submit pipelines
    pub objects: ObjectService,
    /// Compiled page templates
    pub templates: Templates,
}

impl AppContext {
    /// Build a context from a schema and any client port implementation.
    ///
    /// The schema is validated here so a bad descriptor fails at startup
    /// rather than on the first request.
    pub fn new(schema: ObjectSchema, client: Arc<dyn ObjectClientPort>) -> Result<Self> {
        schema.validate()?;
        let templates = Templates::new().context("Failed to compile page templates")?;

        Ok(Self {
            objects: ObjectService::new(schema, client),
            templates,
        })
    }
}

/// Bootstrap the application context with the HubSpot client.
pub fn bootstrap(config: &ServerConfig) -> Result<AppContext> {
    let client = DefaultHubSpotClient::new(&config.api).context("Failed to build HubSpot client")?;

    tracing::debug!(
        base_url = config.api.base_url(),
        collection = %config.schema.collection,
        "HubSpot client ready"
    );

    AppContext::new(config.schema.clone(), Arc::new(client))
}

/// Start the Axum server.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config)?;

    if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
    }
    let app = crate::routes::create_router(ctx, config.static_dir.as_deref());

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(
        collection = %config.schema.collection,
        "crmforms listening on http://{}",
        addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
