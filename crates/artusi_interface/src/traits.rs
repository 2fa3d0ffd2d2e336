//! Trait definitions for recipe backends.

use artusi_core::Recipe;
use artusi_error::ClientError;
use async_trait::async_trait;

/// Core trait that all recipe backends must implement.
///
/// This is the minimal interface the application state controller depends
/// on. The HTTP client in `artusi_client` is the production implementation;
/// tests substitute scripted in-memory sources.
///
/// Every operation maps to exactly one backend call; implementations must
/// not retry on failure.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Ask the backend to (re)populate its recipe corpus from its own
    /// source. Returns the backend's status message.
    async fn trigger_load(&self) -> Result<String, ClientError>;

    /// Retrieve the full corpus in backend order.
    async fn fetch_all(&self) -> Result<Vec<Recipe>, ClientError>;

    /// Retrieve a single recipe. An unknown id is a `NotFound` failure;
    /// implementations never return a partially constructed recipe.
    async fn fetch_by_id(&self, id: u64) -> Result<Recipe, ClientError>;

    /// Free-text search over the corpus. The query is passed through
    /// verbatim; empty strings are legal and the backend decides what they
    /// mean.
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, ClientError>;
}
