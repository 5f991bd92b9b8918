use std::rc::Rc;

use crate::config::ApiConfig;
use crate::services::{ApiClient, HttpApiClient};

/// Backend client shared with every page through the Dioxus context
#[derive(Clone)]
pub struct ApiHandle(Rc<dyn ApiClient>);

impl ApiHandle {
    pub fn new(client: impl ApiClient + 'static) -> Self {
        Self(Rc::new(client))
    }

    pub fn from_env() -> Self {
        Self::new(HttpApiClient::new(ApiConfig::from_env()))
    }

    pub fn client(&self) -> &dyn ApiClient {
        self.0.as_ref()
    }
}
