//! Command-line client for a running kvlink server.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin linkctl -- list
//!
//! # Show where a short id points
//! cargo run --bin linkctl -- get gh/repo
//!
//! # Create a link
//! cargo run --bin linkctl -- add gh/repo https://github.com/example/repo
//!
//! # Delete a link without prompting
//! cargo run --bin linkctl -- delete gh/repo --yes
//! ```
//!
//! # Credentials
//!
//! The API token is read from `API_TOKEN=` in the config file
//! (`~/.config/kvlink` by default). `KVLINK_API_TOKEN` overrides it.

use kvlink::client::config::{DEFAULT_CONFIG_FILE, expand_home, load_api_token};
use kvlink::client::{LinkClient, Lookup};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing kvlink links.
#[derive(Parser)]
#[command(name = "linkctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the credentials file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config_file: String,

    /// Base URL of the kvlink server
    #[arg(
        long,
        global = true,
        env = "KVLINK_BASE_URL",
        default_value = "http://localhost:3000"
    )]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all links
    List,

    /// Show the target of a short id
    Get {
        /// Short id, may contain '/'
        short_id: String,
    },

    /// Create a link
    Add {
        /// Short id, may contain '/'
        short_id: String,

        /// Destination URL
        target_url: String,
    },

    /// Delete a link
    Delete {
        /// Short id, may contain '/'
        short_id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let token = resolve_token(&cli.config_file)?;
    let client = LinkClient::new(&cli.base_url, token)
        .with_context(|| format!("Invalid base URL '{}'", cli.base_url))?;

    match cli.command {
        Commands::List => list_links(&client).await?,
        Commands::Get { short_id } => get_link(&client, &short_id).await?,
        Commands::Add {
            short_id,
            target_url,
        } => add_link(&client, &short_id, &target_url).await?,
        Commands::Delete { short_id, yes } => delete_link(&client, &short_id, yes).await?,
    }

    Ok(())
}

/// Picks the API token: `KVLINK_API_TOKEN` first, then the config file.
fn resolve_token(config_file: &str) -> Result<Option<String>> {
    if let Ok(token) = std::env::var("KVLINK_API_TOKEN")
        && !token.is_empty()
    {
        return Ok(Some(token));
    }

    let path = expand_home(config_file);
    load_api_token(&path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Prints every link as pretty JSON, sorted by short id.
async fn list_links(client: &LinkClient) -> Result<()> {
    let links = client.list().await.context("Failed to list links")?;

    if links.is_empty() {
        println!("{}", "No links found".yellow());
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&links)?);
    Ok(())
}

async fn get_link(client: &LinkClient, short_id: &str) -> Result<()> {
    match client.lookup(short_id).await? {
        Lookup::Found { status, location } => {
            println!("{} {}", "✓".green(), short_id.cyan());
            println!("  Status:   {}", status.to_string().bright_black());
            if let Some(location) = location {
                println!("  Location: {}", location.bright_yellow());
            }
        }
        Lookup::NotFound => {
            println!("{} {} not found", "✗".red(), short_id.cyan());
        }
    }

    Ok(())
}

async fn add_link(client: &LinkClient, short_id: &str, target_url: &str) -> Result<()> {
    client
        .create(short_id, target_url)
        .await
        .with_context(|| format!("Failed to create '{short_id}'"))?;

    println!(
        "{} {} -> {}",
        "✅ Link created:".green().bold(),
        short_id.cyan(),
        target_url.bright_yellow()
    );
    Ok(())
}

/// Deletes a link after confirmation (default: No) unless `--yes` is given.
async fn delete_link(client: &LinkClient, short_id: &str, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete '{short_id}'?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    client
        .delete(short_id)
        .await
        .with_context(|| format!("Failed to delete '{short_id}'"))?;

    println!("{} {}", "✅ Deleted".green().bold(), short_id.cyan());
    Ok(())
}
