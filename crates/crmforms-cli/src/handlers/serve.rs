//! Serve command handler.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use crmforms_axum::{ServerConfig, start_server};
use crmforms_hubspot::HubSpotClientConfig;

use crate::commands::ServeArgs;
use crate::handlers::schema;

/// Static directory used when `--static-dir` is not given.
const DEFAULT_STATIC_DIR: &str = "./public";

/// Build the server configuration from the command arguments.
pub fn server_config(args: &ServeArgs) -> Result<ServerConfig> {
    let schema = schema::resolve(&args.schema)?;

    let mut api = HubSpotClientConfig::new(args.token.clone()).with_base_url(&args.api_base_url);
    if let Some(secs) = args.timeout_secs {
        api = api.with_timeout(Duration::from_secs(secs));
    }

    let mut config = ServerConfig::new(schema, api).with_addr(&args.host, args.port);
    let default_dir = Path::new(DEFAULT_STATIC_DIR);
    if let Some(dir) = resolve_static_dir(args.static_dir.as_deref(), default_dir) {
        config = config.with_static_dir(dir);
    }
    Ok(config)
}

/// Explicit directory wins; the default is used only when it exists.
fn resolve_static_dir(explicit: Option<&Path>, default: &Path) -> Option<PathBuf> {
    match explicit {
        Some(dir) => Some(dir.to_path_buf()),
        None if default.is_dir() => Some(default.to_path_buf()),
        None => None,
    }
}

/// Execute the serve command.
pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = server_config(&args)?;

    tracing::info!(
        collection = %config.schema.collection,
        api = config.api.base_url(),
        "Starting crmforms"
    );

    start_server(config).await
}
