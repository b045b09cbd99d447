//! Legal education video catalog.
//!
//! The whole catalog is fetched once per visit; the category filter runs over
//! the fetched list.

use api::{ApiError, CaseType, VideoInfo};

use crate::operation::AsyncOperation;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VideoFilter {
    #[default]
    All,
    Category(CaseType),
}

impl VideoFilter {
    /// Every filter, in select-box order.
    pub const OPTIONS: [VideoFilter; 6] = [
        VideoFilter::All,
        VideoFilter::Category(CaseType::Divorce),
        VideoFilter::Category(CaseType::Inheritance),
        VideoFilter::Category(CaseType::Custody),
        VideoFilter::Category(CaseType::Alimony),
        VideoFilter::Category(CaseType::Other),
    ];

    pub fn id(self) -> &'static str {
        match self {
            VideoFilter::All => "all",
            VideoFilter::Category(case_type) => case_type.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VideoFilter::All => "All",
            VideoFilter::Category(case_type) => case_type.label(),
        }
    }

    /// Unknown ids fall back to `All`.
    pub fn from_id(id: &str) -> Self {
        id.parse::<CaseType>().map(VideoFilter::Category).unwrap_or_default()
    }

    pub fn matches(self, video: &VideoInfo) -> bool {
        match self {
            VideoFilter::All => true,
            VideoFilter::Category(case_type) => {
                video.category.eq_ignore_ascii_case(case_type.as_str())
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoCatalog {
    pub videos: AsyncOperation<Vec<VideoInfo>>,
    pub filter: VideoFilter,
    /// Video opened for playback.
    pub watching: AsyncOperation<VideoInfo>,
    requested: Option<String>,
}

impl VideoCatalog {
    pub fn apply(&mut self, result: Result<Vec<VideoInfo>, ApiError>) {
        self.videos.finish(result.map_err(|e| {
            tracing::warn!("video catalog unavailable: {e}");
            e.message_or("Failed to load videos")
        }));
    }

    /// Fetched videos passing the current filter.
    pub fn visible(&self) -> Vec<&VideoInfo> {
        self.videos
            .value()
            .into_iter()
            .flatten()
            .filter(|video| self.filter.matches(video))
            .collect()
    }

    pub fn begin_watch(&mut self, video_id: &str) -> Option<String> {
        if self.watching.is_pending() {
            return None;
        }
        self.watching.start();
        self.requested = Some(video_id.to_string());
        Some(video_id.to_string())
    }

    /// Ignored once the player was closed or another video was requested.
    pub fn finish_watch(&mut self, video_id: &str, result: Result<VideoInfo, ApiError>) {
        if !self.watching.is_pending() || self.requested.as_deref() != Some(video_id) {
            tracing::debug!(video_id, "dropping late video detail");
            return;
        }
        self.watching
            .finish(result.map_err(|e| e.message_or("Failed to load video")));
    }

    pub fn stop_watching(&mut self) {
        self.watching.reset();
        self.requested = None;
    }
}

#[cfg(test)]
mod tests {
    use api::mock::MockTransport;
    use api::transport::Method;
    use api::ApiClient;
    use serde_json::json;

    use super::*;

    fn video(id: &str, category: &str) -> serde_json::Value {
        json!({"id": id, "title": format!("Video {id}"), "category": category, "duration": 95})
    }

    #[tokio::test]
    async fn test_custody_filter_over_catalog() {
        let client = ApiClient::new(MockTransport::new());
        client.transport().respond(
            Method::Get,
            "/api/videos",
            200,
            json!([
                video("v1", "divorce"),
                video("v2", "custody"),
                video("v3", "inheritance"),
                video("v4", "custody"),
                video("v5", "alimony"),
            ]),
        );

        let mut catalog = VideoCatalog::default();
        catalog.apply(client.list_videos().await);
        assert_eq!(catalog.visible().len(), 5);

        catalog.filter = VideoFilter::from_id("custody");
        let ids: Vec<_> = catalog.visible().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["v2", "v4"]);
    }

    #[test]
    fn test_filter_ids() {
        for filter in VideoFilter::OPTIONS {
            assert_eq!(VideoFilter::from_id(filter.id()), filter);
        }
        assert_eq!(VideoFilter::from_id("tax"), VideoFilter::All);
    }

    #[tokio::test]
    async fn test_watch_fetches_detail() {
        let client = ApiClient::new(MockTransport::new());
        client
            .transport()
            .respond(Method::Get, "/api/videos/v2", 200, video("v2", "custody"));

        let mut catalog = VideoCatalog::default();
        let id = catalog.begin_watch("v2").unwrap();
        assert!(catalog.begin_watch("v3").is_none());
        catalog.finish_watch(&id, client.get_video(&id).await);

        assert_eq!(catalog.watching.value().map(|v| v.duration_label()), Some("1:35".to_string()));
        catalog.stop_watching();
        assert!(catalog.watching.is_idle());
    }

    #[tokio::test]
    async fn test_closed_player_stays_closed() {
        let client = ApiClient::new(MockTransport::new());
        client
            .transport()
            .respond(Method::Get, "/api/videos/v2", 200, video("v2", "custody"));

        let mut catalog = VideoCatalog::default();
        let id = catalog.begin_watch("v2").unwrap();
        let detail = client.get_video(&id).await;
        catalog.stop_watching();
        catalog.finish_watch(&id, detail.clone());
        assert!(catalog.watching.is_idle());

        catalog.begin_watch("v3").unwrap();
        catalog.finish_watch(&id, detail);
        assert!(catalog.watching.is_pending());
    }

    #[test]
    fn test_failed_load_shows_nothing() {
        let mut catalog = VideoCatalog::default();
        catalog.apply(Err(ApiError::Network("offline".to_string())));
        assert!(catalog.visible().is_empty());
        assert_eq!(
            catalog.videos.error().map(String::as_str),
            Some(api::NETWORK_ERROR_MESSAGE)
        );
    }
}
