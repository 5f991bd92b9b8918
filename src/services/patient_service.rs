use tracing::{info, warn};

use crate::domain::{find_patient, PatientId, PatientRecord};

use super::api_client::ApiClient;
use super::error::ApiError;

/// View state of the patient explorer: the last successfully fetched list
/// and the id the user picked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientExplorer {
    patients: Option<Vec<PatientRecord>>,
    selected_id: Option<PatientId>,
}

impl PatientExplorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list on success. On failure the error is logged and the
    /// previous state stays as it was.
    pub fn apply_fetch(&mut self, result: Result<Vec<PatientRecord>, ApiError>) {
        match result {
            Ok(patients) => {
                info!(patients = patients.len(), "Patient scores loaded");
                self.patients = Some(patients);
            }
            Err(e) => {
                warn!(error = %e, "Keeping previous patient list");
            }
        }
    }

    pub async fn load(&mut self, client: &dyn ApiClient) {
        let result = client.patient_scores().await;
        self.apply_fetch(result);
    }

    pub fn is_loaded(&self) -> bool {
        self.patients.is_some()
    }

    pub fn patients(&self) -> &[PatientRecord] {
        self.patients.as_deref().unwrap_or_default()
    }

    pub fn select(&mut self, id: PatientId) {
        self.selected_id = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    pub fn selected_id(&self) -> Option<PatientId> {
        self.selected_id
    }

    /// The selected patient, if the id is still present in the current list
    pub fn selected(&self) -> Option<&PatientRecord> {
        self.selected_id
            .and_then(|id| find_patient(self.patients(), id))
    }
}
