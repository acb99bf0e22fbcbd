//! Commands enum and their arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use crmforms_hubspot::DEFAULT_BASE_URL;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(ServeArgs),

    /// Print the resolved schema descriptor as JSON
    Schema(SchemaArgs),
}

/// Which schema descriptor to use.
#[derive(Args, Debug, Clone)]
pub struct SchemaArgs {
    /// Built-in schema preset (contacts or cars)
    #[arg(long = "schema", env = "CRMFORMS_SCHEMA", default_value = "contacts")]
    pub preset: String,

    /// JSON schema descriptor; overrides --schema
    #[arg(long, env = "CRMFORMS_SCHEMA_FILE")]
    pub schema_file: Option<PathBuf>,
}

/// Arguments of `crmforms serve`.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Directory of static assets (stylesheets, images)
    ///
    /// Defaults to ./public when that directory exists.
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// HubSpot API base URL
    #[arg(long, env = "HUBSPOT_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,

    /// Private app access token
    #[arg(long, env = "PRIVATE_APP_KEY", hide_env_values = true)]
    pub token: String,

    /// Timeout for each HubSpot request, in seconds
    #[arg(long, env = "HUBSPOT_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}
