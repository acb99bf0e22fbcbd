//! CLI entry point - the composition root.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crmforms_cli::{Cli, Commands, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before parsing so env fallbacks see them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Serve(args) => handlers::serve::execute(args).await,
        Commands::Schema(args) => handlers::schema::execute(&args),
    }
}
