//! Error types and handling for gmaps-geocode.

/// Result type alias for geocoding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for geocoding operations.
///
/// A lookup that reaches the provider but matches nothing is not an error;
/// it comes back as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The address to look up was empty
    #[error("Address must not be empty")]
    EmptyAddress,

    /// The request could not be sent or its body could not be read
    #[error("Transport error: {message}")]
    Transport {
        /// Error message
        message: String,
    },

    /// The endpoint answered with a non-success HTTP status
    #[error("HTTP error: endpoint replied with status {status}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
    },

    /// The response body is not the expected JSON document
    #[error("Decode error: {source}")]
    Decode {
        /// Source error
        #[from]
        source: serde_json::Error,
    },

    /// The provider refused or failed the request
    #[error("Provider error: {status}{}", provider_detail(.message.as_deref()))]
    Provider {
        /// Status string reported by the provider, e.g. `REQUEST_DENIED`
        status: String,
        /// Optional human readable explanation from the provider
        message: Option<String>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },
}

fn provider_detail(message: Option<&str>) -> String {
    message
        .map(|m| format!(" ({m})"))
        .unwrap_or_default()
}

impl Error {
    /// Create a new transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new HTTP status error
    pub fn http_status(status: u16) -> Self {
        Self::HttpStatus { status }
    }

    /// Create a new provider error
    pub fn provider(status: impl Into<String>, message: Option<String>) -> Self {
        Self::Provider {
            status: status.into(),
            message,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = Error::provider("REQUEST_DENIED", Some("The provided API key is invalid.".into()));
        assert_eq!(
            err.to_string(),
            "Provider error: REQUEST_DENIED (The provided API key is invalid.)"
        );

        let err = Error::provider("OVER_QUERY_LIMIT", None);
        assert_eq!(err.to_string(), "Provider error: OVER_QUERY_LIMIT");
    }

    #[test]
    fn test_decode_error_from_serde() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = source.into();
        assert!(err.to_string().starts_with("Decode error:"));
    }
}
