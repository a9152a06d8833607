//! CLI administration tool for url-alias.
//!
//! Creates and inspects mappings and performs database operations without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create the schema (safe to repeat)
//! cargo run --bin admin -- db init
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Create a mapping with a generated or explicit alias
//! cargo run --bin admin -- shorten https://example.com
//! cargo run --bin admin -- shorten https://example.com --alias mysite
//!
//! # Look up an alias
//! cargo run --bin admin -- resolve mysite
//!
//! # Show statistics
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`
//! - `ALIAS_LENGTH`, `ALIAS_GENERATION_ATTEMPTS` (same meaning as for the server)
//! - `DB_QUERY_TIMEOUT` - Per-operation timeout in seconds (default: 5)

use url_alias::application::services::{ResolutionService, ShorteningService};
use url_alias::config::{Config, load_alias_policy, parse_var};
use url_alias::error::AppError;
use url_alias::infrastructure::persistence::PgMappingStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing url-alias.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Create a mapping
    Shorten {
        /// Destination URL
        url: String,

        /// Alias to claim (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Print the destination of an alias
    Resolve {
        /// Alias to look up
        alias: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Create the mapping table and index if missing
    Init,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;
    let timeout = Duration::from_secs(parse_var("DB_QUERY_TIMEOUT", 5)?);

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;
    let store = Arc::new(PgMappingStore::new(Arc::new(pool), timeout));

    match cli.command {
        Commands::Shorten { url, alias } => handle_shorten(store, url, alias).await?,
        Commands::Resolve { alias } => handle_resolve(store, alias).await?,
        Commands::Stats => handle_stats(store.pool()).await?,
        Commands::Db { action } => handle_db_action(action, &store).await?,
    }

    Ok(())
}

/// Creates a mapping through the shortening service.
async fn handle_shorten(
    store: Arc<PgMappingStore>,
    url: String,
    alias: Option<String>,
) -> Result<()> {
    let policy = load_alias_policy()?;
    let service = ShorteningService::new(store, policy);

    match service.shorten(&url, alias.as_deref()).await {
        Ok(mapping) => {
            println!("{}", "✅ Mapping created".green().bold());
            println!();
            println!("  Alias: {}", mapping.alias.bright_green().bold());
            println!("  URL:   {}", mapping.url.bright_white());
            println!("  ID:    {}", mapping.id);
            println!();
            Ok(())
        }
        Err(AppError::Conflict { .. }) => {
            println!("{}", "❌ Alias already exists".red().bold());
            anyhow::bail!("alias already exists")
        }
        Err(AppError::Validation { details, .. }) => {
            println!("{}", "❌ Invalid input".red().bold());
            println!("  {}", details);
            anyhow::bail!("invalid input")
        }
        Err(e) => Err(e).context("Failed to create mapping"),
    }
}

/// Resolves an alias through the resolution service.
async fn handle_resolve(store: Arc<PgMappingStore>, alias: String) -> Result<()> {
    let service = ResolutionService::new(store);

    match service.resolve(&alias).await {
        Ok(url) => {
            println!("{} → {}", alias.bright_green().bold(), url.bright_white());
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("⚠️  Alias '{}' not found", alias).yellow());
            anyhow::bail!("alias not found")
        }
        Err(e) => Err(e).context("Failed to resolve alias"),
    }
}

/// Displays mapping statistics.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let mappings_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await
        .context("Failed to count mappings (run `admin db init` first?)")?;

    let destinations_count: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT url) FROM url")
        .fetch_one(pool)
        .await?;

    println!(
        "  Aliases:      {}",
        mappings_count.to_string().bright_green().bold()
    );
    println!(
        "  Destinations: {}",
        destinations_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, store: &PgMappingStore) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            store.ping().await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Init => {
            println!("{}", "🛠  Initializing schema...".bright_blue());

            store.init_schema().await?;

            println!("{}", "✅ Schema ready".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(store.pool())
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
