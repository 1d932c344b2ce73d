use thiserror::Error;

/// Errors returned by the outreach REST client.
///
/// Transport, status and decoding failures are all "the request failed"; the
/// variants only keep the detail for logs. There are no structured error codes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("API request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a status outside 2xx.
    #[error("API request to {endpoint} failed: HTTP {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected JSON shape.
    #[error("API request to {endpoint} failed: invalid JSON body: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The underlying `reqwest::Client` could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Builder(#[source] reqwest::Error),

    #[error("invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Errors from the brief submission flows.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    InvalidForm(#[from] outreach_core::CoreError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("upload was cancelled before completion")]
    Cancelled,
}
