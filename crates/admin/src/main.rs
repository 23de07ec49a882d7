//! Development stand-in for the catalog's administrative surface.
//!
//! ```text
//! carte-admin migrate
//! carte-admin seed demos/menu.json
//! carte-admin delete-category 3
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};


#[derive(Parser, Debug)]
#[command(author, version, about = "Catalog administration tasks", long_about = None)]
struct Args {
    /// PostgreSQL connection string.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply pending schema migrations.
    Migrate,
    /// Insert the categories, subcategories and items from a JSON seed file.
    Seed {
        /// Path to the seed document.
        file: PathBuf,
    },
    /// Delete a category together with its subcategories and items.
    DeleteCategory {
        /// Category id.
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carte_admin=info,carte_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let pool = carte_db::create_pool(&args.database_url, 1)
        .await
        .context("Failed to connect to database")?;

    match args.command {
        Command::Migrate => {
            carte_db::run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");
        }
        Command::Seed { file } => {
            carte_admin::seed_from_file(&pool, &file).await?;
        }
        Command::DeleteCategory { id } => {
            carte_admin::delete_category(&pool, id).await?;
        }
    }

    pool.close().await;
    Ok(())
}
