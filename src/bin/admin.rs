//! CLI administration tool for civic-directory.
//!
//! Maintains the PostgreSQL store without going through the HTTP API:
//! seed imports, submission review and vocabulary cleanup.
//!
//! # Usage
//!
//! ```bash
//! # Import categories, regions and resources from a seed file
//! cargo run --bin admin -- import seed/ahmedabad.json
//!
//! # Review submissions
//! cargo run --bin admin -- pending
//! cargo run --bin admin -- approve sewa-free-clinic
//!
//! # Fold a duplicate category into another one
//! cargo run --bin admin -- merge-category category-food-bank-ngo category-food-bank
//!
//! # Counts and connectivity
//! cargo run --bin admin -- stats
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` (required): PostgreSQL connection
//! - `REDIS_URL` or `REDIS_*` (optional): cache whose entries are evicted
//!   after `import`, `approve` and `merge-category`

use civic_directory::application::services::{CurationService, Eviction};
use civic_directory::config::{self, mask_connection_string};
use civic_directory::domain::entities::Resource;
use civic_directory::domain::repositories::ResourceRepository;
use civic_directory::infrastructure::persistence::{PgResourceRepository, read_seed_file};
use civic_directory::server::{build_cache, connect_pool};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing civic-directory.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upsert categories, regions and resources from a JSON seed file
    Import {
        /// Path to the seed file
        path: PathBuf,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List submissions waiting for approval
    Pending,

    /// Approve a submitted resource
    Approve {
        /// Slug of the submission
        slug: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Move all resources from one category to another and delete the first
    MergeCategory {
        /// Id of the duplicate category to remove
        from: String,

        /// Id of the category to keep
        into: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show directory statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

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
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL (or DB_USER, DB_PASSWORD, DB_NAME) must be set")?;

    let pool = connect_pool(&config, &database_url).await?;
    let repo = Arc::new(PgResourceRepository::new(Arc::new(pool.clone())));
    let curation = CurationService::new(repo.clone(), build_cache(&config).await);

    match cli.command {
        Commands::Import { path, yes } => import(&curation, path, yes).await?,
        Commands::Pending => list_pending(&repo).await?,
        Commands::Approve { slug, yes } => approve(&curation, &slug, yes).await?,
        Commands::MergeCategory { from, into, yes } => {
            merge_category(&curation, &from, &into, yes).await?
        }
        Commands::Stats => show_stats(&repo).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &database_url).await?,
    }

    Ok(())
}

fn confirm(prompt: &str, default: bool) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
    }
    Ok(confirmed)
}

type Curation = CurationService<PgResourceRepository>;

fn print_eviction(eviction: &Eviction) {
    if eviction.failed.is_empty() {
        println!(
            "  {} cached entries evicted",
            eviction.evicted.to_string().bright_black()
        );
        return;
    }

    println!(
        "{}",
        format!(
            "⚠️  Could not evict {} cached entries; they expire with the cache TTL:",
            eviction.failed.len()
        )
        .yellow()
    );
    for slug in &eviction.failed {
        println!("    {}", slug.yellow());
    }
}

/// Imports a seed file in one transaction.
///
/// Records are upserted by id, so re-running an import is safe.
async fn import(curation: &Curation, path: PathBuf, skip_confirm: bool) -> Result<()> {
    println!("{}", "📥 Import seed".bright_blue().bold());
    println!();

    let seed = read_seed_file(&path).await?;

    println!("  File:       {}", path.display().to_string().cyan());
    println!("  Categories: {}", seed.categories.len().to_string().bright_white());
    println!("  Regions:    {}", seed.regions.len().to_string().bright_white());
    println!("  Resources:  {}", seed.resources.len().to_string().bright_white());
    println!();

    if !skip_confirm && !confirm("Import these records?", true)? {
        return Ok(());
    }

    let (summary, eviction) = curation
        .import_seed(seed)
        .await
        .map_err(|e| anyhow::anyhow!("Import failed: {}", e))?;

    println!();
    println!(
        "{} {} categories, {} regions, {} resources",
        "✅ Imported".green().bold(),
        summary.categories,
        summary.regions,
        summary.resources
    );
    print_eviction(&eviction);

    Ok(())
}

fn print_resource_row(resource: &Resource) {
    let submitted = resource
        .created_at
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());

    println!(
        "  {:<17} {:<32} {:<24} {:<20} {}",
        submitted.bright_black(),
        resource.slug.cyan(),
        resource.category_title().unwrap_or("-"),
        resource.region_title().unwrap_or("-"),
        resource.title.bright_white()
    );
}

async fn list_pending(repo: &PgResourceRepository) -> Result<()> {
    println!("{}", "📋 Pending submissions".bright_blue().bold());
    println!();

    let pending = repo
        .list_pending()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list submissions: {}", e))?;

    if pending.is_empty() {
        println!("{}", "  Nothing to review".yellow());
        return Ok(());
    }

    println!(
        "  {:<17} {:<32} {:<24} {:<20} {}",
        "Submitted".bright_white().bold(),
        "Slug".bright_white().bold(),
        "Category".bright_white().bold(),
        "Region".bright_white().bold(),
        "Title".bright_white().bold()
    );
    println!("  {}", "─".repeat(108).bright_black());

    for resource in &pending {
        print_resource_row(resource);
    }

    println!();
    println!("  Total: {}", pending.len().to_string().bright_white().bold());

    Ok(())
}

async fn approve(curation: &Curation, slug: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "✔️  Approve submission".bright_blue().bold());
    println!();

    if !skip_confirm && !confirm(&format!("Publish '{}'?", slug), true)? {
        return Ok(());
    }

    let (approved, eviction) = curation
        .approve(slug)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to approve: {}", e))?;

    if approved {
        println!("{}", "✅ Published".green().bold());
        print_eviction(&eviction);
    } else {
        println!(
            "{}",
            format!("⚠️  No pending submission with slug '{}'", slug).yellow()
        );
    }

    Ok(())
}

/// Folds a duplicate category into another.
///
/// Defaults to "No" since the source category is deleted.
async fn merge_category(
    curation: &Curation,
    from: &str,
    into: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔀 Merge categories".bright_blue().bold());
    println!();
    println!("  From: {}", from.red());
    println!("  Into: {}", into.green());
    println!();

    if !skip_confirm && !confirm("Move all resources and delete the source category?", false)? {
        return Ok(());
    }

    let (moved, eviction) = curation
        .merge_category(from, into)
        .await
        .map_err(|e| anyhow::anyhow!("Merge failed: {}", e))?;

    println!(
        "{} {} resources moved",
        "✅ Merged".green().bold(),
        moved.to_string().bright_white()
    );
    print_eviction(&eviction);

    Ok(())
}

async fn show_stats(repo: &PgResourceRepository) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let stats = repo
        .stats()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!("  Categories:          {}", stats.categories.to_string().cyan());
    println!("  Regions:             {}", stats.regions.to_string().cyan());
    println!(
        "  Published resources: {}",
        stats.approved_resources.to_string().green()
    );
    println!(
        "  Pending submissions: {}",
        stats.pending_resources.to_string().yellow()
    );
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool, database_url: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔌 Database check".bright_blue().bold());
            println!();
            println!("  URL: {}", mask_connection_string(database_url).bright_black());

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await
                .context("Connection check failed")?;

            println!("  {}", "✅ Connected".green().bold());
            println!("  {}", version.bright_black());
        }
        DbAction::Migrate => {
            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;
            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
