//! Client dashboard: the caller's cases and appointments.
//!
//! Both lists are fetched together on entering the page. A list whose fetch
//! fails is shown as empty; the failure is logged, never bannered.
//!
//! Opening a case fetches its current detail (`GET /api/cases/{id}`) into a
//! modal.

use api::{ApiClient, ApiError, AppointmentInfo, AppointmentStatus, CaseInfo, CaseStatus, Transport};

use crate::operation::AsyncOperation;

pub const CASE_DETAIL_FAILED: &str = "Failed to load case";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub cases: Vec<CaseInfo>,
    pub appointments: Vec<AppointmentInfo>,
    pub loading: bool,
    /// Case opened in the detail modal.
    pub viewing: AsyncOperation<CaseInfo>,
    requested: Option<String>,
}

/// Outcome of one dashboard load, each half independent.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub cases: Result<Vec<CaseInfo>, ApiError>,
    pub appointments: Result<Vec<AppointmentInfo>, ApiError>,
}

/// Fetch cases and appointments concurrently.
pub async fn load<T: Transport>(client: &ApiClient<T>, token: &str) -> DashboardData {
    let (cases, appointments) =
        futures::join!(client.list_cases(token), client.list_appointments(token));
    DashboardData {
        cases,
        appointments,
    }
}

impl Dashboard {
    pub fn start(&mut self) {
        self.loading = true;
        self.close_case();
    }

    pub fn begin_case(&mut self, case_id: &str) -> Option<String> {
        if self.viewing.is_pending() {
            return None;
        }
        self.viewing.start();
        self.requested = Some(case_id.to_string());
        Some(case_id.to_string())
    }

    /// Ignored once the modal was closed or another case was opened.
    pub fn finish_case(&mut self, case_id: &str, result: Result<CaseInfo, ApiError>) {
        if !self.viewing.is_pending() || self.requested.as_deref() != Some(case_id) {
            tracing::debug!(case_id, "dropping late case detail");
            return;
        }
        self.viewing.finish(result.map_err(|e| {
            tracing::warn!(case_id, "case detail unavailable: {e}");
            e.message_or(CASE_DETAIL_FAILED)
        }));
    }

    pub fn close_case(&mut self) {
        self.viewing.reset();
        self.requested = None;
    }

    pub fn apply(&mut self, data: DashboardData) {
        self.loading = false;
        self.cases = data.cases.unwrap_or_else(|e| {
            tracing::warn!("dashboard cases unavailable: {e}");
            Vec::new()
        });
        self.appointments = data.appointments.unwrap_or_else(|e| {
            tracing::warn!("dashboard appointments unavailable: {e}");
            Vec::new()
        });
    }
}

/// Badge colour class for a case status.
pub fn case_badge(status: CaseStatus) -> &'static str {
    match status {
        CaseStatus::Pending => "badge badge-pending",
        CaseStatus::UnderReview => "badge badge-review",
        CaseStatus::InProgress => "badge badge-progress",
        CaseStatus::Completed => "badge badge-done",
        CaseStatus::Rejected => "badge badge-rejected",
    }
}

pub fn appointment_badge(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Pending => "badge badge-pending",
        AppointmentStatus::Confirmed => "badge badge-progress",
        AppointmentStatus::Completed => "badge badge-done",
        AppointmentStatus::Rejected | AppointmentStatus::Cancelled => "badge badge-rejected",
    }
}
