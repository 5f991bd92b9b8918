pub mod api_config;

pub use api_config::{ApiConfig, BACKEND_URL_ENV, DEFAULT_BACKEND_URL};
