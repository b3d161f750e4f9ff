use fibercheck_core::Locale;
use thiserror::Error;

/// Errors returned by the coverage lookup client.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Network, DNS, TLS or timeout failure; no HTTP response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("coverage service returned HTTP {status}")]
    Status { status: u16, body: String },

    /// A success response whose body is not valid coverage JSON.
    #[error("invalid coverage response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid endpoint URL \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

impl LookupError {
    /// Text shown to the user for this failure.
    ///
    /// Server-reported failures use the response body when it has any text,
    /// otherwise `HTTP <status>`. Failures without an HTTP response use the
    /// locale's generic message.
    #[must_use]
    pub fn user_message(&self, locale: Locale) -> String {
        match self {
            LookupError::Status { status, body } => {
                let body = body.trim();
                if body.is_empty() {
                    format!("HTTP {status}")
                } else {
                    body.to_string()
                }
            }
            LookupError::Decode { source } => source.to_string(),
            LookupError::Http(_) | LookupError::InvalidEndpoint { .. } => {
                locale.generic_error().to_string()
            }
        }
    }
}
