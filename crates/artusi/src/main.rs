//! Artusi CLI binary.
//!
//! This binary provides command-line access to the recipe backend:
//! - Trigger a corpus load and list the result
//! - Fetch, search, and inspect recipes
//! - Browse the full application flow with filters and tags

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_browse, handle_get, handle_list, handle_load, handle_search};

    // Pick up ARTUSI_* variables from a local .env if present
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let config = cli.client_config()?;

    // Execute the requested command
    match cli.command {
        Commands::Load => {
            handle_load(config).await?;
        }

        Commands::List {
            sort,
            order,
            tag,
            json,
        } => {
            handle_list(config, sort, order, tag, json).await?;
        }

        Commands::Get { id, json } => {
            handle_get(config, id, json).await?;
        }

        Commands::Search { query, json } => {
            handle_search(config, &query, json).await?;
        }

        Commands::Browse {
            query,
            sort,
            order,
            tag,
        } => {
            handle_browse(config, query.as_deref(), sort, order, tag).await?;
        }
    }

    Ok(())
}
