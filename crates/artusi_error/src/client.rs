//! Error types for the recipe repository client.

/// Error kinds for backend operations.
///
/// The `Http`, `Timeout`, and `Malformed` variants describe failures of the
/// transport itself; `Remote` and `NotFound` carry a rejection reported by
/// the backend through the response envelope.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ClientErrorKind {
    /// HTTP request failed: {0}
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// Request timed out: {0}
    #[display("Request timed out: {}", _0)]
    Timeout(String),

    /// Response body could not be parsed as an envelope: {0}
    #[display("Malformed response: {}", _0)]
    Malformed(String),

    /// The backend reported failure; carries its message verbatim.
    #[display("Backend error: {}", _0)]
    Remote(String),

    /// Lookup by id rejected by the backend.
    #[display("Recipe not found: {}", _0)]
    NotFound(String),
}

/// Error wrapper with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Client Error: {} at line {} in {}", kind, line, file)]
pub struct ClientError {
    /// The error kind
    pub kind: ClientErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ClientError {
    /// Create a new ClientError with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use artusi_error::{ClientError, ClientErrorKind};
    ///
    /// let err = ClientError::new(ClientErrorKind::Remote("Search failed".to_string()));
    /// assert_eq!(err.message(), "Search failed");
    /// ```
    #[track_caller]
    pub fn new(kind: ClientErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// The transport- or backend-supplied message carried by this error.
    pub fn message(&self) -> &str {
        match &self.kind {
            ClientErrorKind::Http(msg)
            | ClientErrorKind::Timeout(msg)
            | ClientErrorKind::Malformed(msg)
            | ClientErrorKind::Remote(msg)
            | ClientErrorKind::NotFound(msg) => msg,
        }
    }

    /// True when the failure happened below the envelope layer: transport,
    /// timeout, or an unparsable body.
    pub fn is_network(&self) -> bool {
        matches!(
            self.kind,
            ClientErrorKind::Http(_) | ClientErrorKind::Timeout(_) | ClientErrorKind::Malformed(_)
        )
    }

    /// Relabel a backend rejection as a failed lookup, preserving the message.
    ///
    /// Transport failures pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use artusi_error::{ClientError, ClientErrorKind};
    ///
    /// let err = ClientError::new(ClientErrorKind::Remote("not found".to_string()));
    /// let err = err.into_not_found();
    /// assert!(matches!(err.kind, ClientErrorKind::NotFound(_)));
    /// ```
    pub fn into_not_found(mut self) -> Self {
        if let ClientErrorKind::Remote(msg) = self.kind {
            self.kind = ClientErrorKind::NotFound(msg);
        }
        self
    }
}
