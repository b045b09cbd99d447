//! # Typed client for the portal REST API
//!
//! [`ApiClient`] maps every endpoint the portal uses onto one async method.
//! Each method builds an [`ApiRequest`], sends it through the configured
//! [`Transport`], and decodes the JSON body. Non-success statuses become
//! [`ApiError::Status`] carrying the server's `detail` message when there is
//! one.
//!
//! | Method | Endpoint | Auth |
//! |--------|----------|------|
//! | [`register`](ApiClient::register) | `POST /api/auth/register` | - |
//! | [`login`](ApiClient::login) | `POST /api/auth/login` | - |
//! | [`me`](ApiClient::me) | `GET /api/auth/me` | bearer |
//! | [`list_cases`](ApiClient::list_cases) | `GET /api/cases` | bearer |
//! | [`get_case`](ApiClient::get_case) | `GET /api/cases/{id}` | bearer |
//! | [`submit_case`](ApiClient::submit_case) | `POST /api/cases` (multipart) | bearer |
//! | [`list_appointments`](ApiClient::list_appointments) | `GET /api/appointments` | bearer |
//! | [`book_appointment`](ApiClient::book_appointment) | `POST /api/appointments` | bearer |
//! | [`admin_cases`](ApiClient::admin_cases) | `GET /api/admin/cases` | bearer (admin) |
//! | [`update_case_status`](ApiClient::update_case_status) | `PUT /api/admin/cases/{id}/status` | bearer (admin) |
//! | [`list_videos`](ApiClient::list_videos) | `GET /api/videos` | - |
//! | [`get_video`](ApiClient::get_video) | `GET /api/videos/{id}` | - |

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{extract_detail, ApiError};
use crate::models::{
    AppointmentInfo, AppointmentReceipt, AuthResponse, CaseInfo, CaseReceipt, CaseStatus,
    Credentials, NewAppointment, NewCase, Registration, StatusUpdate, UserInfo, VideoInfo,
};
use crate::transport::{ApiRequest, FormPart, ReqwestTransport, Transport};

/// Client used by the web front end.
pub type HttpClient = ApiClient<ReqwestTransport>;

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl HttpClient {
    pub fn from_config(config: ApiConfig) -> Self {
        Self::new(ReqwestTransport::new(config))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Create an account. The response carries a fresh session token.
    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(registration)?;
        self.call(ApiRequest::post("/api/auth/register").with_json(body))
            .await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(credentials)?;
        self.call(ApiRequest::post("/api/auth/login").with_json(body))
            .await
    }

    /// Profile of the token's owner.
    pub async fn me(&self, token: &str) -> Result<UserInfo, ApiError> {
        self.call(ApiRequest::get("/api/auth/me").with_bearer(token))
            .await
    }

    /// Cases submitted by the token's owner.
    pub async fn list_cases(&self, token: &str) -> Result<Vec<CaseInfo>, ApiError> {
        self.call(ApiRequest::get("/api/cases").with_bearer(token))
            .await
    }

    pub async fn get_case(&self, token: &str, case_id: &str) -> Result<CaseInfo, ApiError> {
        self.call(ApiRequest::get(format!("/api/cases/{case_id}")).with_bearer(token))
            .await
    }

    /// Submit a case as multipart form data: the three text fields followed by
    /// one `files` part per attachment (none when there are no attachments).
    pub async fn submit_case(&self, token: &str, case: &NewCase) -> Result<CaseReceipt, ApiError> {
        let mut parts = vec![
            FormPart::text("case_type", case.case_type.as_str()),
            FormPart::text("title", case.title.clone()),
            FormPart::text("description", case.description.clone()),
        ];
        parts.extend(case.files.iter().map(|attachment| FormPart::File {
            name: "files".to_string(),
            attachment: attachment.clone(),
        }));
        self.call(
            ApiRequest::post("/api/cases")
                .with_bearer(token)
                .with_multipart(parts),
        )
        .await
    }

    pub async fn list_appointments(&self, token: &str) -> Result<Vec<AppointmentInfo>, ApiError> {
        self.call(ApiRequest::get("/api/appointments").with_bearer(token))
            .await
    }

    pub async fn book_appointment(
        &self,
        token: &str,
        appointment: &NewAppointment,
    ) -> Result<AppointmentReceipt, ApiError> {
        let body = serde_json::to_value(appointment)?;
        self.call(
            ApiRequest::post("/api/appointments")
                .with_bearer(token)
                .with_json(body),
        )
        .await
    }

    /// Every client's cases. The server rejects non-admin tokens.
    pub async fn admin_cases(&self, token: &str) -> Result<Vec<CaseInfo>, ApiError> {
        self.call(ApiRequest::get("/api/admin/cases").with_bearer(token))
            .await
    }

    pub async fn update_case_status(
        &self,
        token: &str,
        case_id: &str,
        status: CaseStatus,
    ) -> Result<(), ApiError> {
        let body = serde_json::to_value(StatusUpdate { status })?;
        let _: Value = self
            .call(
                ApiRequest::put(format!("/api/admin/cases/{case_id}/status"))
                    .with_bearer(token)
                    .with_json(body),
            )
            .await?;
        Ok(())
    }

    pub async fn list_videos(&self) -> Result<Vec<VideoInfo>, ApiError> {
        self.call(ApiRequest::get("/api/videos")).await
    }

    /// A single video. The server counts this as a view.
    pub async fn get_video(&self, video_id: &str) -> Result<VideoInfo, ApiError> {
        self.call(ApiRequest::get(format!("/api/videos/{video_id}")))
            .await
    }

    async fn call<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let method = request.method;
        let path = request.path.clone();

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!("{:?} {} failed: {}", method, path, e);
            ApiError::Network(e.0)
        })?;

        if !response.is_success() {
            tracing::warn!("{:?} {} returned {}", method, path, response.status);
            return Err(ApiError::Status {
                status: response.status,
                detail: extract_detail(&response.body),
            });
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            tracing::warn!("{:?} {} returned an unreadable body: {}", method, path, e);
            ApiError::Decode(e.to_string())
        })
    }
}
