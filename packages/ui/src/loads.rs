//! Page-entry fetches, split into a request (built while holding portal state)
//! and a result (applied back to it) so no state borrow spans the await.

use api::{ApiClient, ApiError, CaseInfo, Transport, VideoInfo};

use crate::dashboard::{self, DashboardData};
use crate::route::PageLoad;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRequest {
    Dashboard { token: String },
    AdminCases { token: String },
    Videos,
}

impl LoadRequest {
    pub fn load(&self) -> PageLoad {
        match self {
            LoadRequest::Dashboard { .. } => PageLoad::Dashboard,
            LoadRequest::AdminCases { .. } => PageLoad::AdminCases,
            LoadRequest::Videos => PageLoad::Videos,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadResult {
    /// `token` is the session the load was issued under.
    Dashboard { token: String, data: DashboardData },
    AdminCases {
        token: String,
        cases: Result<Vec<CaseInfo>, ApiError>,
    },
    Videos(Result<Vec<VideoInfo>, ApiError>),
}

pub async fn fetch<T: Transport>(client: &ApiClient<T>, request: LoadRequest) -> LoadResult {
    tracing::debug!(load = ?request.load(), "page load");
    match request {
        LoadRequest::Dashboard { token } => {
            let data = dashboard::load(client, &token).await;
            LoadResult::Dashboard { token, data }
        }
        LoadRequest::AdminCases { token } => {
            let cases = client.admin_cases(&token).await;
            LoadResult::AdminCases { token, cases }
        }
        LoadRequest::Videos => LoadResult::Videos(client.list_videos().await),
    }
}
