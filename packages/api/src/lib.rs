//! # API crate: typed client for the Union Law Firm portal API
//!
//! The portal front end talks to an external REST service. This crate owns
//! everything about that conversation: the wire models, the request building,
//! the error taxonomy, and where the service lives.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`client`] | - | [`ApiClient`]: one async method per endpoint |
//! | [`config`] | - | [`ApiConfig`]: base URL from `BACKEND_URL`, defaulting to `http://localhost:8001` |
//! | [`error`] | - | [`ApiError`] and the user-facing message policy |
//! | [`models`] | - | Users, cases, appointments, videos and the request bodies that create them |
//! | [`transport`] | - | The [`Transport`] seam and the `reqwest` implementation |
//! | [`mock`] | `mock` | Recording transport with canned replies, for tests |

pub mod client;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod models;
pub mod transport;

pub use client::{ApiClient, HttpClient};
pub use config::ApiConfig;
pub use error::{ApiError, NETWORK_ERROR_MESSAGE};
pub use models::{
    AppointmentInfo, AppointmentReceipt, AppointmentStatus, Attachment, AuthResponse, CaseInfo,
    CaseReceipt, CaseStatus, CaseType, Credentials, NewAppointment, NewCase, Registration, Role,
    UserInfo, VideoInfo,
};
pub use transport::{Transport, TransportError};
