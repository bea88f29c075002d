use thiserror::Error;

/// Errors that can occur while talking to the kanji API.
///
/// The views only care that an error happened; the variants exist for logs.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No API key in config or environment
    #[error("API key not configured: {reason}")]
    MissingCredential { reason: String },

    /// Base URL cannot carry a path
    #[error("Invalid API URL '{url}'")]
    InvalidUrl { url: String },

    /// HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport failure (DNS, connect, TLS, timeout, body read)
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status
    #[error("Upstream returned {status} for '{url}'")]
    Status { url: String, status: u16 },

    /// Body was not the expected JSON
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Short machine-readable kind, used in log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::MissingCredential { .. } => "missing_credential",
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Client(_) => "client_error",
            ApiError::Request { .. } => "request_error",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode { .. } => "decode_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message() {
        let err = ApiError::Status {
            url: "https://example.com/api/public/kanji/all".to_string(),
            status: 403,
        };
        assert_eq!(err.error_type(), "status_error");
        assert!(err.to_string().contains("403"));
    }

    #[test]
    fn decode_error_keeps_source() {
        let source = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err = ApiError::Decode {
            url: "u".to_string(),
            source,
        };
        assert_eq!(err.error_type(), "decode_error");
        assert!(std::error::Error::source(&err).is_some());
    }
}
