use serde::{Deserialize, Serialize};
use url::Url;

use crate::services::ApiError;

pub const BACKEND_URL_ENV: &str = "MINDPULSE_BACKEND_URL";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the MindPulse backend, without trailing slash
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `MINDPULSE_BACKEND_URL` from the process environment, then from
    /// the value captured at build time (browsers have no environment). A
    /// blank runtime value counts as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            non_blank(std::env::var(key).ok())
                .or_else(|| option_env!("MINDPULSE_BACKEND_URL").map(str::to_string))
        })
    }

    /// What [`Self::from_env`] resolves to when nothing is set at runtime.
    pub fn build_time_default() -> Self {
        Self::from_lookup(|_| option_env!("MINDPULSE_BACKEND_URL").map(str::to_string))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match non_blank(lookup(BACKEND_URL_ENV)) {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<Url, ApiError> {
        let url = Url::parse(&self.base_url).map_err(|source| ApiError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ApiError::UnsupportedBaseUrl {
                url: self.base_url.clone(),
            });
        }
        Ok(url)
    }

    /// Appends percent-encoded path segments to the base URL.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.validate()?;
        {
            let mut path = url.path_segments_mut().map_err(|_| ApiError::UnsupportedBaseUrl {
                url: self.base_url.clone(),
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
