//! # Legal cases
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`CaseType`] | The closed set of matters the firm accepts. Also used as the video catalog's category set. |
//! | [`CaseStatus`] | Review stage of a case. Only an admin moves a case between stages. |
//! | [`CaseInfo`] | A case as listed by `GET /api/cases` (own cases) or `GET /api/admin/cases` (all cases, with the submitter's name and email). |
//! | [`NewCase`] | The multipart submission sent to `POST /api/cases`, including any [`Attachment`]s. |
//! | [`CaseReceipt`] | What the server answers after accepting a submission. |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of legal matter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseType {
    #[default]
    Divorce,
    Inheritance,
    Custody,
    Alimony,
    Other,
}

impl CaseType {
    pub const ALL: [CaseType; 5] = [
        CaseType::Divorce,
        CaseType::Inheritance,
        CaseType::Custody,
        CaseType::Alimony,
        CaseType::Other,
    ];

    /// Wire value, e.g. `"custody"`.
    pub fn as_str(self) -> &'static str {
        match self {
            CaseType::Divorce => "divorce",
            CaseType::Inheritance => "inheritance",
            CaseType::Custody => "custody",
            CaseType::Alimony => "alimony",
            CaseType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CaseType::Divorce => "Divorce",
            CaseType::Inheritance => "Inheritance",
            CaseType::Custody => "Child Custody",
            CaseType::Alimony => "Alimony & Support",
            CaseType::Other => "Other",
        }
    }
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Review stage of a case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    #[default]
    Pending,
    UnderReview,
    InProgress,
    Completed,
    Rejected,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 5] = [
        CaseStatus::Pending,
        CaseStatus::UnderReview,
        CaseStatus::InProgress,
        CaseStatus::Completed,
        CaseStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CaseStatus::Pending => "pending",
            CaseStatus::UnderReview => "under_review",
            CaseStatus::InProgress => "in_progress",
            CaseStatus::Completed => "completed",
            CaseStatus::Rejected => "rejected",
        }
    }

    /// Human-readable form: `under_review` → `"under review"`.
    pub fn label(self) -> &'static str {
        match self {
            CaseStatus::Pending => "pending",
            CaseStatus::UnderReview => "under review",
            CaseStatus::InProgress => "in progress",
            CaseStatus::Completed => "completed",
            CaseStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// A string that names none of an enum's variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value: {0}")]
pub struct UnknownVariant(pub String);

/// A case as returned by the listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseInfo {
    pub id: String,
    pub case_type: CaseType,
    pub title: String,
    pub description: String,
    pub status: CaseStatus,
    /// Stored file names of the uploaded attachments, in upload order.
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Only present on the admin listing.
    #[serde(default)]
    pub user_name: Option<String>,
    /// Only present on the admin listing.
    #[serde(default)]
    pub user_email: Option<String>,
}

/// A file picked for upload.
#[derive(Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A case submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCase {
    pub case_type: CaseType,
    pub title: String,
    pub description: String,
    pub files: Vec<Attachment>,
}

/// Server acknowledgement of a new case.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CaseReceipt {
    #[serde(default)]
    pub message: Option<String>,
    pub case_id: String,
    #[serde(default)]
    pub status: CaseStatus,
}

/// Body of `PUT /api/admin/cases/{id}/status`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub status: CaseStatus,
}
