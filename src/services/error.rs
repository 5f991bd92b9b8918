use thiserror::Error;

/// Everything that can go wrong between the dashboard and the backend.
/// Views do not distinguish between the variants; they log and keep
/// whatever they were showing.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid backend URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Backend URL '{url}' must be an absolute http(s) URL")]
    UnsupportedBaseUrl { url: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Backend answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}
