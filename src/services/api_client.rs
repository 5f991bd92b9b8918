use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::ApiConfig;
use crate::domain::{build_patient_records, PatientRecord, QuestionnaireDetail, QuestionnaireSummary};

use super::error::ApiError;

pub const PATIENT_SCORES_PATH: &[&str] = &["api", "patient_scores"];
pub const QUESTIONNAIRES_PATH: &[&str] = &["api", "frageboegen"];

/// Read-only access to the MindPulse backend - allows for mocking in tests.
/// Futures are not `Send` because the browser build runs on a single thread.
#[async_trait(?Send)]
pub trait ApiClient {
    /// `GET /api/patient_scores`, reshaped into patient records
    async fn patient_scores(&self) -> Result<Vec<PatientRecord>, ApiError>;

    /// `GET /api/frageboegen`
    async fn questionnaire_names(&self) -> Result<Vec<QuestionnaireSummary>, ApiError>;

    /// `GET /api/frageboegen/{name}`
    async fn questionnaire_detail(&self, name: &str) -> Result<QuestionnaireDetail, ApiError>;
}

/// Real implementation talking HTTP via reqwest
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let result = self.fetch_json(segments).await;
        if let Err(e) = &result {
            error!(
                base_url = %self.config.base_url,
                path = %segments.join("/"),
                error = %e,
                "API error"
            );
        }
        result
    }

    async fn fetch_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.config.endpoint(segments)?;
        debug!(url = %url, "GET");

        let response = self
            .client
            .get(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn patient_scores(&self) -> Result<Vec<PatientRecord>, ApiError> {
        let raw: Vec<Value> = self.get_json(PATIENT_SCORES_PATH).await?;
        let records = build_patient_records(&raw);
        debug!(received = raw.len(), mapped = records.len(), "Patient scores mapped");
        Ok(records)
    }

    async fn questionnaire_names(&self) -> Result<Vec<QuestionnaireSummary>, ApiError> {
        self.get_json(QUESTIONNAIRES_PATH).await
    }

    async fn questionnaire_detail(&self, name: &str) -> Result<QuestionnaireDetail, ApiError> {
        let segments: Vec<&str> = QUESTIONNAIRES_PATH
            .iter()
            .copied()
            .chain(std::iter::once(name))
            .collect();
        self.get_json(&segments).await
    }
}

pub mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Canned answer for one endpoint
    #[derive(Debug, Clone)]
    pub enum MockResponse {
        Json(Value),
        Status(u16),
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum MockCall {
        PatientScores,
        QuestionnaireNames,
        QuestionnaireDetail(String),
    }

    /// Mock implementation for testing. Clones share responses and call history.
    #[derive(Clone)]
    pub struct MockApiClient {
        patient_scores: Rc<RefCell<MockResponse>>,
        questionnaire_names: Rc<RefCell<MockResponse>>,
        questionnaire_details: Rc<RefCell<HashMap<String, MockResponse>>>,
        call_history: Rc<RefCell<Vec<MockCall>>>,
    }

    impl MockApiClient {
        pub fn new() -> Self {
            Self {
                patient_scores: Rc::new(RefCell::new(MockResponse::Json(Value::Array(Vec::new())))),
                questionnaire_names: Rc::new(RefCell::new(MockResponse::Json(Value::Array(Vec::new())))),
                questionnaire_details: Rc::new(RefCell::new(HashMap::new())),
                call_history: Rc::new(RefCell::new(Vec::new())),
            }
        }

        pub fn set_patient_scores(&self, response: MockResponse) {
            *self.patient_scores.borrow_mut() = response;
        }

        pub fn set_questionnaire_names(&self, response: MockResponse) {
            *self.questionnaire_names.borrow_mut() = response;
        }

        pub fn set_questionnaire_detail(&self, name: &str, response: MockResponse) {
            self.questionnaire_details
                .borrow_mut()
                .insert(name.to_string(), response);
        }

        pub fn calls(&self) -> Vec<MockCall> {
            self.call_history.borrow().clone()
        }

        pub fn detail_requests_for(&self, name: &str) -> usize {
            self.call_history
                .borrow()
                .iter()
                .filter(|call| matches!(call, MockCall::QuestionnaireDetail(n) if n == name))
                .count()
        }

        fn respond<T: DeserializeOwned>(&self, path: &str, response: MockResponse) -> Result<T, ApiError> {
            let url = format!("mock://{}", path);
            match response {
                MockResponse::Json(value) => {
                    serde_json::from_value(value).map_err(|source| ApiError::Decode { url, source })
                }
                MockResponse::Status(status) => Err(ApiError::Status { status, url }),
            }
        }
    }

    impl Default for MockApiClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait(?Send)]
    impl ApiClient for MockApiClient {
        async fn patient_scores(&self) -> Result<Vec<PatientRecord>, ApiError> {
            self.call_history.borrow_mut().push(MockCall::PatientScores);
            let response = self.patient_scores.borrow().clone();
            let raw: Vec<Value> = self.respond("api/patient_scores", response)?;
            Ok(build_patient_records(&raw))
        }

        async fn questionnaire_names(&self) -> Result<Vec<QuestionnaireSummary>, ApiError> {
            self.call_history.borrow_mut().push(MockCall::QuestionnaireNames);
            let response = self.questionnaire_names.borrow().clone();
            self.respond("api/frageboegen", response)
        }

        async fn questionnaire_detail(&self, name: &str) -> Result<QuestionnaireDetail, ApiError> {
            self.call_history
                .borrow_mut()
                .push(MockCall::QuestionnaireDetail(name.to_string()));
            let response = self
                .questionnaire_details
                .borrow()
                .get(name)
                .cloned()
                .unwrap_or(MockResponse::Status(404));
            self.respond(&format!("api/frageboegen/{}", name), response)
        }
    }
}
