//! Admin case review console.

use api::{ApiClient, ApiError, CaseInfo, CaseStatus, Transport};

use crate::operation::AsyncOperation;

pub const UPDATE_FAILED: &str = "Failed to update case status";
pub const LOAD_FAILED: &str = "Failed to load cases";

/// Status transitions offered in the detail modal, with their button labels.
pub const STATUS_ACTIONS: [(CaseStatus, &str); 4] = [
    (CaseStatus::UnderReview, "Review"),
    (CaseStatus::InProgress, "Start work"),
    (CaseStatus::Completed, "Complete"),
    (CaseStatus::Rejected, "Reject"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseSummary {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
}

impl CaseSummary {
    pub fn of(cases: &[CaseInfo]) -> Self {
        let count = |status| cases.iter().filter(|c| c.status == status).count();
        Self {
            total: cases.len(),
            pending: count(CaseStatus::Pending),
            in_progress: count(CaseStatus::InProgress),
        }
    }
}

/// A status change waiting to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub case_id: String,
    pub status: CaseStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminConsole {
    pub cases: AsyncOperation<Vec<CaseInfo>>,
    /// Case shown in the detail modal.
    pub selected: Option<CaseInfo>,
    pub update: AsyncOperation<()>,
}

impl AdminConsole {
    pub fn list(&self) -> &[CaseInfo] {
        self.cases.value().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn summary(&self) -> CaseSummary {
        CaseSummary::of(self.list())
    }

    pub fn apply_cases(&mut self, result: Result<Vec<CaseInfo>, ApiError>) {
        self.cases.finish(result.map_err(|e| {
            tracing::warn!("admin case list unavailable: {e}");
            e.message_or(LOAD_FAILED)
        }));
    }

    pub fn open(&mut self, case_id: &str) {
        self.selected = self.list().iter().find(|c| c.id == case_id).cloned();
        self.update.reset();
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.update.reset();
    }

    /// Start moving the open case to `status`. `None` while nothing is open
    /// or another update is in flight.
    pub fn begin_update(&mut self, status: CaseStatus) -> Option<StatusChange> {
        if self.update.is_pending() {
            return None;
        }
        let case_id = self.selected.as_ref()?.id.clone();
        self.update.start();
        Some(StatusChange { case_id, status })
    }

    /// Apply the server's answer. Returns whether the list must be reloaded.
    ///
    /// A failed update leaves the modal open with the case as it was.
    pub fn finish_update(&mut self, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.close();
                true
            }
            Err(e) => {
                tracing::warn!("case status update failed: {e}");
                self.update.fail(e.message_or(UPDATE_FAILED));
                false
            }
        }
    }
}

pub async fn change_status<T: Transport>(
    client: &ApiClient<T>,
    token: &str,
    change: &StatusChange,
) -> Result<(), ApiError> {
    client
        .update_case_status(token, &change.case_id, change.status)
        .await
}

#[cfg(test)]
mod tests {
    use api::mock::MockTransport;
    use api::transport::{Method, Payload};
    use serde_json::json;

    use super::*;

    fn case(id: &str, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "case_type": "divorce",
            "title": format!("Case {id}"),
            "description": "",
            "status": status,
            "user_name": "Client"
        })
    }

    fn loaded(client: &ApiClient<MockTransport>) -> AdminConsole {
        client.transport().respond(
            Method::Get,
            "/api/admin/cases",
            200,
            json!([case("c1", "pending"), case("c2", "in_progress"), case("c3", "pending")]),
        );
        AdminConsole::default()
    }

    #[tokio::test]
    async fn test_summary_counts() {
        let client = ApiClient::new(MockTransport::new());
        let mut console = loaded(&client);
        console.apply_cases(client.admin_cases("admin").await);

        assert_eq!(
            console.summary(),
            CaseSummary {
                total: 3,
                pending: 2,
                in_progress: 1
            }
        );
    }

    #[tokio::test]
    async fn test_review_puts_status_and_requests_reload() {
        let client = ApiClient::new(MockTransport::new());
        let mut console = loaded(&client);
        console.apply_cases(client.admin_cases("admin").await);
        client.transport().respond(
            Method::Put,
            "/api/admin/cases/c1/status",
            200,
            json!({"message": "Case status updated"}),
        );

        console.open("c1");
        assert_eq!(console.selected.as_ref().map(|c| c.id.as_str()), Some("c1"));

        let change = console.begin_update(CaseStatus::UnderReview).unwrap();
        assert!(console.begin_update(CaseStatus::Rejected).is_none());

        let reload = console.finish_update(change_status(&client, "admin", &change).await);
        assert!(reload);
        assert!(console.selected.is_none());

        let put = client.transport().last_request().unwrap();
        assert_eq!(put.path, "/api/admin/cases/c1/status");
        assert_eq!(put.bearer.as_deref(), Some("admin"));
        assert_eq!(put.payload, Payload::Json(json!({"status": "under_review"})));
    }

    #[tokio::test]
    async fn test_failed_update_keeps_modal_open() {
        let client = ApiClient::new(MockTransport::new());
        let mut console = loaded(&client);
        console.apply_cases(client.admin_cases("admin").await);
        client.transport().respond(
            Method::Put,
            "/api/admin/cases/c2/status",
            403,
            json!({"detail": "Admin access required"}),
        );

        console.open("c2");
        let change = console.begin_update(CaseStatus::Completed).unwrap();
        let reload = console.finish_update(change_status(&client, "admin", &change).await);

        assert!(!reload);
        assert_eq!(console.selected.as_ref().map(|c| c.status), Some(CaseStatus::InProgress));
        assert_eq!(
            console.update.error().map(String::as_str),
            Some("Admin access required")
        );
    }

    #[test]
    fn test_nothing_selected_sends_nothing() {
        let mut console = AdminConsole::default();
        console.open("missing");
        assert!(console.begin_update(CaseStatus::Rejected).is_none());
        assert!(console.update.is_idle());
    }
}
