use tracing::{debug, info, warn};

use crate::domain::{QuestionnaireDetail, QuestionnaireSummary};

use super::api_client::ApiClient;
use super::error::ApiError;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum BrowserView {
    #[default]
    List,
    Detail {
        name: String,
        /// `None` while the detail request is in flight
        detail: Option<QuestionnaireDetail>,
    },
}

/// The one detail request owed for a questionnaire that was just opened.
/// Sending consumes it, so each `open` yields at most one request.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "an opened questionnaire waits for its detail request"]
pub struct DetailRequest {
    name: String,
}

impl DetailRequest {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn send(self, client: &dyn ApiClient) -> DetailResponse {
        let result = client.questionnaire_detail(&self.name).await;
        DetailResponse {
            name: self.name,
            result,
        }
    }
}

/// Outcome of a [`DetailRequest`], tagged with the name it was sent for.
#[derive(Debug)]
pub struct DetailResponse {
    name: String,
    result: Result<QuestionnaireDetail, ApiError>,
}

/// List ⇄ detail toggle of the questionnaire page. Transitions are driven by
/// user actions only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionnaireBrowser {
    names: Vec<QuestionnaireSummary>,
    view: BrowserView,
}

impl QuestionnaireBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> &[QuestionnaireSummary] {
        &self.names
    }

    pub fn view(&self) -> &BrowserView {
        &self.view
    }

    pub fn selected_name(&self) -> Option<&str> {
        match &self.view {
            BrowserView::List => None,
            BrowserView::Detail { name, .. } => Some(name),
        }
    }

    pub fn detail(&self) -> Option<&QuestionnaireDetail> {
        match &self.view {
            BrowserView::List => None,
            BrowserView::Detail { detail, .. } => detail.as_ref(),
        }
    }

    pub fn apply_names(&mut self, result: Result<Vec<QuestionnaireSummary>, ApiError>) {
        match result {
            Ok(names) => {
                info!(questionnaires = names.len(), "Questionnaire list loaded");
                self.names = names;
            }
            Err(e) => warn!(error = %e, "Keeping previous questionnaire list"),
        }
    }

    pub async fn load_names(&mut self, client: &dyn ApiClient) {
        let result = client.questionnaire_names().await;
        self.apply_names(result);
    }

    /// Switches to detail mode for `name`. The returned request is sent by
    /// the caller and its response handed to [`Self::apply_response`].
    pub fn open(&mut self, name: &str) -> DetailRequest {
        debug!(questionnaire = name, "Opening questionnaire");
        self.view = BrowserView::Detail {
            name: name.to_string(),
            detail: None,
        };
        DetailRequest {
            name: name.to_string(),
        }
    }

    pub fn apply_response(&mut self, response: DetailResponse) {
        self.apply_detail(&response.name, response.result);
    }

    pub fn apply_detail(&mut self, name: &str, result: Result<QuestionnaireDetail, ApiError>) {
        let BrowserView::Detail { name: open_name, detail } = &mut self.view else {
            debug!(questionnaire = name, "Dropping detail response, browser is back on the list");
            return;
        };
        if open_name.as_str() != name {
            debug!(
                questionnaire = name,
                open = %open_name,
                "Dropping detail response for a questionnaire that is no longer open"
            );
            return;
        }

        match result {
            Ok(loaded) => {
                let undeclared = loaded.undeclared_keys();
                if !undeclared.is_empty() {
                    warn!(
                        questionnaire = name,
                        keys = ?undeclared,
                        "Rows contain keys that are not declared as columns"
                    );
                }
                info!(
                    questionnaire = name,
                    columns = loaded.columns.len(),
                    rows = loaded.rows.len(),
                    "Questionnaire detail loaded"
                );
                *detail = Some(loaded);
            }
            Err(e) => warn!(questionnaire = name, error = %e, "Questionnaire detail unavailable"),
        }
    }

    /// Opens `name` and issues exactly one detail request for it. The page
    /// runs the same open, send, apply sequence around its signal, since a
    /// signal cannot stay borrowed across the await.
    pub async fn select(&mut self, client: &dyn ApiClient, name: &str) {
        let request = self.open(name);
        let response = request.send(client).await;
        self.apply_response(response);
    }

    /// Returns to the list, forgetting the selected name and its detail.
    pub fn back(&mut self) {
        self.view = BrowserView::List;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::mock::{MockApiClient, MockCall, MockResponse};
    use serde_json::json;

    fn detail(name: &str) -> QuestionnaireDetail {
        QuestionnaireDetail {
            name: name.to_string(),
            columns: vec!["Item_1".to_string()],
            rows: Vec::new(),
        }
    }

    #[test]
    fn test_starts_in_list_mode() {
        let browser = QuestionnaireBrowser::new();
        assert_eq!(browser.view(), &BrowserView::List);
        assert!(browser.selected_name().is_none());
        assert!(browser.names().is_empty());
    }

    #[test]
    fn test_open_then_apply() {
        let mut browser = QuestionnaireBrowser::new();
        let request = browser.open("BDI-II");
        assert_eq!(request.name(), "BDI-II");
        assert_eq!(browser.selected_name(), Some("BDI-II"));
        assert!(browser.detail().is_none());

        browser.apply_detail("BDI-II", Ok(detail("BDI-II")));
        assert_eq!(browser.detail().map(|d| d.columns.len()), Some(1));
    }

    #[test]
    fn test_stale_detail_is_dropped() {
        let mut browser = QuestionnaireBrowser::new();
        let _ = browser.open("BDI-II");
        let _ = browser.open("SCL-90");
        browser.apply_detail("BDI-II", Ok(detail("BDI-II")));

        assert_eq!(browser.selected_name(), Some("SCL-90"));
        assert!(browser.detail().is_none());

        browser.back();
        browser.apply_detail("SCL-90", Ok(detail("SCL-90")));
        assert_eq!(browser.view(), &BrowserView::List);
    }

    #[test]
    fn test_failed_names_fetch_keeps_list() {
        let mut browser = QuestionnaireBrowser::new();
        browser.apply_names(Ok(vec![QuestionnaireSummary::new("BDI-II")]));
        browser.apply_names(Err(ApiError::Status {
            status: 500,
            url: "http://localhost:5000/api/frageboegen".to_string(),
        }));

        assert_eq!(browser.names().len(), 1);
    }

    #[tokio::test]
    async fn test_select_issues_one_request_and_back_clears() {
        let client = MockApiClient::new();
        client.set_questionnaire_detail(
            "BDI-II",
            MockResponse::Json(json!({
                "name": "BDI-II",
                "columns": ["BDI_01", "BDI_02"],
                "data": [{ "BDI_01": 3, "BDI_02": null }]
            })),
        );

        let mut browser = QuestionnaireBrowser::new();
        browser.select(&client, "BDI-II").await;

        assert_eq!(browser.selected_name(), Some("BDI-II"));
        assert_eq!(browser.detail().map(|d| d.rows.len()), Some(1));
        assert_eq!(
            client.calls(),
            vec![MockCall::QuestionnaireDetail("BDI-II".to_string())]
        );

        browser.back();
        assert_eq!(browser.view(), &BrowserView::List);
        assert!(browser.detail().is_none());
        assert_eq!(client.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_detail_stays_in_detail_mode() {
        let client = MockApiClient::new();
        let mut browser = QuestionnaireBrowser::new();
        browser.select(&client, "Unbekannt").await;

        assert_eq!(browser.selected_name(), Some("Unbekannt"));
        assert!(browser.detail().is_none());
    }

    #[tokio::test]
    async fn test_response_for_a_replaced_selection_is_dropped() {
        let client = MockApiClient::new();
        client.set_questionnaire_detail(
            "BDI-II",
            MockResponse::Json(json!({ "name": "BDI-II", "columns": [], "data": [] })),
        );

        let mut browser = QuestionnaireBrowser::new();
        let first = browser.open("BDI-II");
        let _ = browser.open("SCL-90");
        let response = first.send(&client).await;
        browser.apply_response(response);

        assert_eq!(browser.selected_name(), Some("SCL-90"));
        assert!(browser.detail().is_none());
        assert_eq!(client.detail_requests_for("BDI-II"), 1);
        assert_eq!(client.detail_requests_for("SCL-90"), 0);
    }
}
