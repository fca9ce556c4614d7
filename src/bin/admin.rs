//! CLI administration tool for short-url.
//!
//! Works directly against the database configured for the server, without
//! going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Check the database and make sure the schema exists
//! cargo run --bin admin -- db check
//!
//! # Show database location and record count
//! cargo run --bin admin -- db info
//!
//! # Shorten a URL
//! cargo run --bin admin -- link create https://example.com
//!
//! # Look up a short code
//! cargo run --bin admin -- link show aB3dE6gH
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (`DATA_DIR`, `DATABASE_FILE`, `BASE_URL`, ...), see
//! `short_url::config`.

use short_url::config::{self, Config};
use short_url::server::{build_state, open_store};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::SqlitePool;

/// CLI tool for managing short-url.
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
    /// Short URL operations
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short URL subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Shorten a URL
    Create {
        /// The URL to shorten
        url: String,
    },

    /// Show the record behind a short code
    Show {
        /// The short code to look up
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and schema
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &config).await?,
        Commands::Db { action } => handle_db_action(action, &config).await?,
    }

    Ok(())
}

/// Dispatches short URL commands through the same service the server uses.
async fn handle_link_action(action: LinkAction, config: &Config) -> Result<()> {
    let (pool, repository) = open_store(config).await?;
    let state = build_state(config, repository);
    let service = &state.shortening_service;

    match action {
        LinkAction::Create { url } => {
            if url.is_empty() {
                anyhow::bail!("URL cannot be empty");
            }

            let created = service
                .create_short_url(url)
                .await
                .context("Failed to create short URL")?;

            println!("{}", "Short URL created".green().bold());
            println!();
            println!("  ID:        {}", created.id.to_string().bright_black());
            println!("  Code:      {}", created.short_code.cyan());
            println!("  Original:  {}", created.original_url);
            println!(
                "  Short URL: {}",
                service.short_url(&created.short_code).bright_yellow().bold()
            );
            println!();
        }
        LinkAction::Show { code } => match service.get_original_url(&code).await {
            Ok(found) => {
                println!("{}", "Short URL".bright_blue().bold());
                println!();
                println!("  ID:        {}", found.id.to_string().bright_black());
                println!("  Code:      {}", found.short_code.cyan());
                println!("  Original:  {}", found.original_url);
                println!(
                    "  Created:   {}",
                    found
                        .created_at
                        .format("%Y-%m-%d %H:%M:%S UTC")
                        .to_string()
                        .bright_black()
                );
                println!();
            }
            Err(e) if e.is_not_found() => {
                println!("{} {}", "No short URL for code".yellow(), code.cyan());
            }
            Err(e) => return Err(e).context("Failed to look up short code"),
        },
    }

    pool.close().await;
    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database".bright_blue().bold());
            println!();

            let (pool, _repository) = open_store(config).await?;

            println!("{}", "  Connection OK".green());
            println!("{}", "  Schema OK".green());
            println!();

            pool.close().await;
        }
        DbAction::Info => {
            let (pool, _repository) = open_store(config).await?;
            print_db_info(config, &pool).await?;
            pool.close().await;
        }
    }

    Ok(())
}

/// Prints database location, engine version and record count.
async fn print_db_info(config: &Config, pool: &SqlitePool) -> Result<()> {
    let version: String = sqlx::query_scalar("SELECT sqlite_version()")
        .fetch_one(pool)
        .await?;

    let records: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await?;

    println!("{}", "Database info".bright_blue().bold());
    println!();
    println!(
        "  File:    {}",
        config.database_path().display().to_string().cyan()
    );
    println!("  SQLite:  {}", version.bright_black());
    println!(
        "  Records: {}",
        records.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}
