//! Seed command: create the schema and sample products without serving

use anyhow::{Context, Result};
use clap::Parser;

use stockroom_server::db::{bootstrap, create_pool};
use stockroom_server::ProductRepo;

use super::DEFAULT_DATABASE_URL;

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

/// Seed an empty database; leave a populated one alone.
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", args.database_url))?;

    let inserted = bootstrap(&pool, true)
        .await
        .context("Failed to seed database")?;

    if inserted > 0 {
        println!("Seeded {} sample products", inserted);
    } else {
        let count = ProductRepo::new(&pool)
            .count()
            .await
            .context("Failed to count products")?;
        println!("Database already has {} products, skipping seed", count);
    }

    pool.close().await;
    Ok(())
}
