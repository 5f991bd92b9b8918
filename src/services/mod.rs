pub mod api_client;
mod error;
mod patient_service;
mod questionnaire_service;

pub use api_client::{ApiClient, HttpApiClient};
pub use error::ApiError;
pub use patient_service::PatientExplorer;
pub use questionnaire_service::{BrowserView, DetailRequest, DetailResponse, QuestionnaireBrowser};
