//! Top-level error wrapper types.

use crate::{ClientError, ConfigError, JsonError};

/// This is the foundation error enum for the Artusi workspace.
///
/// # Examples
///
/// ```
/// use artusi_error::{ArtusiError, ClientError, ClientErrorKind};
///
/// let client_err = ClientError::new(ClientErrorKind::Http("Connection failed".to_string()));
/// let err: ArtusiError = client_err.into();
/// assert!(format!("{}", err).contains("HTTP request failed"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ArtusiErrorKind {
    /// Repository client error
    #[from(ClientError)]
    Client(ClientError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Artusi error with kind discrimination.
///
/// # Examples
///
/// ```
/// use artusi_error::{ArtusiResult, ConfigError};
///
/// fn might_fail() -> ArtusiResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Artusi Error: {}", _0)]
pub struct ArtusiError(Box<ArtusiErrorKind>);

impl ArtusiError {
    /// Create a new error from a kind.
    pub fn new(kind: ArtusiErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ArtusiErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ArtusiErrorKind
impl<T> From<T> for ArtusiError
where
    T: Into<ArtusiErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Artusi operations.
///
/// # Examples
///
/// ```
/// use artusi_error::{ArtusiResult, JsonError};
///
/// fn render() -> ArtusiResult<String> {
///     Err(JsonError::new("unexpected end of input"))?
/// }
/// ```
pub type ArtusiResult<T> = std::result::Result<T, ArtusiError>;
