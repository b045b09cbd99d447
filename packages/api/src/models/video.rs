//! Legal education videos from the public catalog.

use serde::{Deserialize, Serialize};

/// A video as listed by `GET /api/videos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    /// Free-form on the wire; the catalog compares it against case type names.
    pub category: String,
    /// Length in seconds.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl VideoInfo {
    /// Duration as `m:ss`, or `h:mm:ss` for an hour or more.
    pub fn duration_label(&self) -> String {
        let hours = self.duration / 3600;
        let minutes = (self.duration % 3600) / 60;
        let seconds = self.duration % 60;
        if hours > 0 {
            format!("{hours}:{minutes:02}:{seconds:02}")
        } else {
            format!("{minutes}:{seconds:02}")
        }
    }
}
