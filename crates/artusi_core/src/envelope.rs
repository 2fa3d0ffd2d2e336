//! The uniform response envelope every backend call is wrapped in.

use artusi_error::{ClientError, ClientErrorKind};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Response envelope carrying success/failure plus payload.
///
/// `success == false` means `data` must not be trusted and `message` is the
/// authoritative failure reason. The HTTP status code is informational only;
/// callers unwrap the envelope through [`Envelope::into_data`] rather than
/// inspecting `status`.
///
/// # Examples
///
/// ```
/// use artusi_core::Envelope;
///
/// let envelope: Envelope<String> = serde_json::from_str(
///     r#"{
///         "status": 200,
///         "message": "Recipes loaded successfully",
///         "data": "Loaded 50 recipes",
///         "timestamp": "2024-06-01T12:30:00",
///         "success": true
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(envelope.into_data().unwrap(), "Loaded 50 recipes");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// HTTP-style status code reported inside the body
    pub status: i32,
    /// Human-readable outcome; authoritative on failure
    pub message: String,
    /// Payload; only meaningful when `success` is true
    #[serde(default)]
    pub data: Option<T>,
    /// Server-side timestamp (ISO-8601, no offset)
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
    /// Whether the operation succeeded
    pub success: bool,
}

impl<T> Envelope<T> {
    /// Extracts the payload, honoring the success flag.
    ///
    /// A failed envelope becomes `ClientErrorKind::Remote` carrying the
    /// backend message verbatim. A successful envelope with no payload is
    /// malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use artusi_core::Envelope;
    /// use artusi_error::ClientErrorKind;
    ///
    /// let envelope: Envelope<String> = serde_json::from_str(
    ///     r#"{"status": 404, "message": "not found", "success": false}"#,
    /// )
    /// .unwrap();
    ///
    /// let err = envelope.into_data().unwrap_err();
    /// assert_eq!(err.kind, ClientErrorKind::Remote("not found".to_string()));
    /// ```
    pub fn into_data(self) -> Result<T, ClientError> {
        if !self.success {
            return Err(ClientError::new(ClientErrorKind::Remote(self.message)));
        }
        self.data.ok_or_else(|| {
            ClientError::new(ClientErrorKind::Malformed(
                "envelope reported success but carried no data".to_string(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_envelope_yields_remote_error_with_verbatim_message() {
        let envelope: Envelope<Vec<String>> = serde_json::from_str(
            r#"{"status": 500, "message": "Search failed", "data": null, "timestamp": "2024-06-01T08:15:30", "success": false}"#,
        )
        .unwrap();

        let err = envelope.into_data().unwrap_err();
        assert_eq!(err.kind, ClientErrorKind::Remote("Search failed".to_string()));
        assert_eq!(err.message(), "Search failed");
        assert!(!err.is_network());
    }

    #[test]
    fn successful_envelope_without_data_is_malformed() {
        let envelope: Envelope<String> = serde_json::from_str(
            r#"{"status": 200, "message": "ok", "success": true}"#,
        )
        .unwrap();

        let err = envelope.into_data().unwrap_err();
        assert!(matches!(err.kind, ClientErrorKind::Malformed(_)));
        assert!(err.is_network());
    }

    #[test]
    fn failed_envelope_data_is_never_surfaced() {
        // A buggy backend may attach data to a failed envelope; the flag wins.
        let envelope: Envelope<String> = serde_json::from_str(
            r#"{"status": 500, "message": "boom", "data": "stale", "success": false}"#,
        )
        .unwrap();

        assert!(envelope.into_data().is_err());
    }

    #[test]
    fn rejected_lookup_relabels_as_not_found_with_verbatim_message() {
        // What the backend sends for GET /recipes/{id} with an unknown id.
        let envelope: Envelope<crate::Recipe> = serde_json::from_str(
            r#"{"status": 404, "message": "not found", "data": null, "success": false}"#,
        )
        .unwrap();

        let err = envelope.into_data().unwrap_err().into_not_found();
        assert_eq!(err.kind, ClientErrorKind::NotFound("not found".to_string()));
        assert_eq!(err.message(), "not found");
    }

    #[test]
    fn missing_timestamp_is_tolerated() {
        let envelope: Envelope<String> = serde_json::from_str(
            r#"{"status": 200, "message": "ok", "data": "payload", "success": true}"#,
        )
        .unwrap();

        assert!(envelope.timestamp.is_none());
        assert_eq!(envelope.into_data().unwrap(), "payload");
    }
}
