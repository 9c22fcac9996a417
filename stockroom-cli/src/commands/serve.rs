//! HTTP server command
//!
//! Opens the database, bootstraps the schema (and sample data on a fresh
//! store), then serves the product API until Ctrl+C/SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use stockroom_server::db::{bootstrap, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
use stockroom_server::http::{run_server, ServerConfig};

use super::DEFAULT_DATABASE_URL;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "STOCKROOM_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Don't insert sample products into an empty database
    #[arg(long)]
    pub no_seed: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting stockroom server on {}", args.bind);

    let pool = create_pool_with_options(&args.database_url, args.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", args.database_url))?;

    let seeded = bootstrap(&pool, !args.no_seed)
        .await
        .context("Failed to bootstrap database")?;
    if seeded > 0 {
        tracing::info!(seeded, "Fresh database, inserted sample products");
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown; closes the pool on the way out
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
