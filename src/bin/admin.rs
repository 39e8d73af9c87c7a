//! CLI administration tool for shorturl.
//!
//! Inspects stored URL records and checks the database without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # Count stored urls
//! cargo run --bin admin -- urls count
//!
//! # Show a single record
//! cargo run --bin admin -- urls show 42
//!
//! # List records
//! cargo run --bin admin -- urls list --limit 20 --offset 40
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*` components).

use shorturl::application::services::ShortenerService;
use shorturl::config;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::PgUrlRepository;
use shorturl::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorturl.
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
    /// Inspect stored urls
    Urls {
        #[command(subcommand)]
        action: UrlsAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// URL record subcommands.
#[derive(Subcommand)]
enum UrlsAction {
    /// Print the number of stored urls
    Count,

    /// Show the record for a short identifier
    Show {
        /// Short identifier, e.g. 42
        short_url: String,
    },

    /// List records ordered by short identifier
    List {
        #[arg(short, long, default_value_t = 20)]
        limit: i64,

        #[arg(short, long, default_value_t = 0)]
        offset: i64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Urls { action } => handle_urls_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches URL record commands.
async fn handle_urls_action(action: UrlsAction, pool: &PgPool) -> Result<()> {
    let service = ShortenerService::new(Arc::new(PgUrlRepository::new(Arc::new(pool.clone()))));

    match action {
        UrlsAction::Count => {
            let count = service.count().await?;
            println!(
                "  Stored urls: {}",
                count.to_string().bright_green().bold()
            );
        }
        UrlsAction::Show { short_url } => match service.resolve(&short_url).await {
            Ok(record) => {
                println!("  Short url:    {}", record.short_url.to_string().cyan());
                println!("  Original url: {}", record.original_url.bright_white());
            }
            Err(AppError::NotFound) => {
                println!("{}", format!("No short URL found for '{short_url}'").yellow());
            }
            Err(e) => return Err(e.into()),
        },
        UrlsAction::List { limit, offset } => {
            if limit <= 0 || offset < 0 {
                anyhow::bail!("--limit must be positive and --offset must not be negative");
            }

            let records = service.list(limit, offset).await?;

            if records.is_empty() {
                println!("{}", "No urls stored".yellow());
                return Ok(());
            }

            println!(
                "  {:<8} {}",
                "ID".bright_white().bold(),
                "ORIGINAL URL".bright_white().bold()
            );
            for record in &records {
                println!(
                    "  {:<8} {}",
                    record.short_url.to_string().cyan(),
                    record.original_url
                );
            }
            println!();
            println!(
                "  Shown: {}",
                records.len().to_string().bright_white().bold()
            );
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations").run(pool).await?;

            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
