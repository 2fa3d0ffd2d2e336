//! Client for the recipe backend API.

use crate::{ClientConfig, SearchRequest};
use artusi_core::{Envelope, Recipe};
use artusi_error::{ClientError, ClientErrorKind};
use artusi_interface::RecipeSource;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

/// Client for the recipe backend API.
///
/// Each operation maps one endpoint to a typed result. Failures come in two
/// families: transport problems (`Http`, `Timeout`, `Malformed`) and backend
/// rejections reported through the envelope (`Remote`, `NotFound`). The
/// envelope's success flag is authoritative; HTTP status codes are only a
/// fallback signal when the body cannot be parsed.
#[derive(Debug, Clone)]
pub struct RecipeClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl RecipeClient {
    /// Create a new client with the configured per-call timeout.
    #[instrument(skip(config), fields(base_url = %config.base_url))]
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        debug!("Creating recipe client");
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                error!(error = ?e, "Failed to build HTTP client");
                ClientError::new(ClientErrorKind::Http(format!(
                    "Failed to build HTTP client: {e}"
                )))
            })?;
        Ok(Self { config, client })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Ask the backend to (re)populate its corpus; returns its status message.
    #[instrument(skip(self))]
    pub async fn trigger_load(&self) -> Result<String, ClientError> {
        let url = format!("{}/recipes/load", self.config.base_url);
        debug!("Requesting corpus load at {}", url);

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(transport_error)?;
        unwrap_envelope::<String>(response).await
    }

    /// Retrieve the full corpus in backend order.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<Recipe>, ClientError> {
        let url = format!("{}/recipes", self.config.base_url);
        debug!("Fetching all recipes from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;
        unwrap_envelope::<Vec<Recipe>>(response).await
    }

    /// Retrieve a single recipe by id.
    #[instrument(skip(self))]
    pub async fn fetch_by_id(&self, id: u64) -> Result<Recipe, ClientError> {
        let url = format!("{}/recipes/{}", self.config.base_url, id);
        debug!("Fetching recipe {} from {}", id, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;
        unwrap_envelope::<Recipe>(response)
            .await
            .map_err(ClientError::into_not_found)
    }

    /// Free-text search; the query string travels verbatim.
    #[instrument(skip(self), fields(query_len = query.len()))]
    pub async fn search(&self, query: &str) -> Result<Vec<Recipe>, ClientError> {
        let url = format!("{}/recipes/search", self.config.base_url);
        debug!("Searching recipes at {}", url);

        let response = self
            .client
            .post(&url)
            .json(&SearchRequest::new(query))
            .send()
            .await
            .map_err(transport_error)?;
        unwrap_envelope::<Vec<Recipe>>(response).await
    }
}

/// Normalize a reqwest transport failure into a `ClientError`.
fn transport_error(e: reqwest::Error) -> ClientError {
    error!(error = ?e, "Request failed");
    if e.is_timeout() {
        ClientError::new(ClientErrorKind::Timeout(format!("Request timed out: {e}")))
    } else {
        ClientError::new(ClientErrorKind::Http(format!("Request failed: {e}")))
    }
}

/// Unwrap the backend envelope from a response.
///
/// The body is parsed before the HTTP status is consulted: a backend that
/// pairs an error status with a well-formed envelope still gets its message
/// through verbatim. Only an unparsable body falls back to the status line.
async fn unwrap_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    match serde_json::from_str::<Envelope<T>>(&body) {
        Ok(envelope) => envelope.into_data(),
        Err(_) if !status.is_success() => {
            error!(status = %status, "Backend returned error without a parsable envelope");
            Err(ClientError::new(ClientErrorKind::Http(format!(
                "Server returned: {status}"
            ))))
        }
        Err(e) => {
            error!(error = ?e, "Failed to parse response envelope");
            Err(ClientError::new(ClientErrorKind::Malformed(format!(
                "Failed to parse response: {e}"
            ))))
        }
    }
}

#[async_trait::async_trait]
impl RecipeSource for RecipeClient {
    async fn trigger_load(&self) -> Result<String, ClientError> {
        self.trigger_load().await
    }

    async fn fetch_all(&self) -> Result<Vec<Recipe>, ClientError> {
        self.fetch_all().await
    }

    async fn fetch_by_id(&self, id: u64) -> Result<Recipe, ClientError> {
        self.fetch_by_id(id).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Recipe>, ClientError> {
        self.search(query).await
    }
}
