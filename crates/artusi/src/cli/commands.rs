//! CLI command definitions.

use artusi::{ArtusiResult, ClientConfig, SortKey, SortOrder};
use clap::{Parser, Subcommand};
use std::time::Duration;

/// Artusi - Recipe browsing client with filtering, sorting, and search
#[derive(Parser, Debug)]
#[command(name = "artusi")]
#[command(about = "Recipe browsing client with filtering, sorting, and search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (overrides ARTUSI_API_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Per-call timeout in milliseconds (overrides ARTUSI_REQUEST_TIMEOUT_MS)
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the client configuration: environment first, flags override.
    pub fn client_config(&self) -> ArtusiResult<ClientConfig> {
        let mut config = ClientConfig::from_env()?;
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config = config.with_timeout(Duration::from_millis(timeout_ms));
        }
        Ok(config)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask the backend to (re)populate its recipe corpus
    Load,

    /// Fetch all recipes and render them, filtered and sorted
    List {
        /// Sort key
        #[arg(long, default_value = "cookTimeMinutes")]
        sort: SortKey,

        /// Sort direction
        #[arg(long, default_value = "asc")]
        order: SortOrder,

        /// Keep only recipes carrying one of these tags (repeatable)
        #[arg(long)]
        tag: Vec<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Fetch a single recipe by id
    Get {
        /// Recipe id
        id: u64,

        /// Emit JSON instead of a detail view
        #[arg(long)]
        json: bool,
    },

    /// Free-text search over recipe names and cuisines
    Search {
        /// Query string (the backend enforces its own minimum length)
        query: String,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Drive the full browsing flow: load, optional search, filters
    Browse {
        /// Search query submitted after the initial load
        #[arg(long)]
        query: Option<String>,

        /// Sort key
        #[arg(long, default_value = "cookTimeMinutes")]
        sort: SortKey,

        /// Sort direction
        #[arg(long, default_value = "asc")]
        order: SortOrder,

        /// Keep only recipes carrying one of these tags (repeatable)
        #[arg(long)]
        tag: Vec<String>,
    },
}
