//! Request bodies sent to the recipe backend.

use serde::{Deserialize, Serialize};

/// Body of a `POST /recipes/search` call.
///
/// The query travels verbatim; minimum-length rules belong to the UI layer,
/// not this contract.
///
/// # Examples
///
/// ```
/// use artusi_client::SearchRequest;
///
/// let request = SearchRequest::new("pasta");
/// assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"query":"pasta"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query forwarded to the backend search index
    pub query: String,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}
