//! Wire types for the YouTube Data API v3 responses we read.

use ms_core::{parse_iso8601_duration, parse_timestamp, MediaItem};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Snippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub channel_title: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchId {
    #[serde(default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResult {
    pub id: SearchId,
    #[serde(default)]
    pub snippet: Snippet,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentDetails {
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Video {
    pub id: String,
    #[serde(default)]
    pub snippet: Snippet,
    #[serde(default)]
    pub content_details: Option<ContentDetails>,
}

fn from_snippet(id: String, snippet: Snippet, duration_secs: Option<u64>) -> MediaItem {
    MediaItem {
        id,
        title: snippet.title,
        description: snippet.description,
        channel_id: snippet.channel_id,
        channel_title: snippet.channel_title,
        duration_secs,
        published_at: snippet.published_at.as_deref().and_then(parse_timestamp),
    }
}

impl SearchResult {
    /// Search hits never carry a duration, so these are always stubs.
    /// Channel and playlist hits have no video id and are skipped.
    pub fn into_stub(self) -> Option<MediaItem> {
        let id = self.id.video_id?;
        Some(from_snippet(id, self.snippet, None))
    }
}

impl Video {
    pub fn into_media_item(self) -> MediaItem {
        let duration = self
            .content_details
            .and_then(|d| d.duration)
            .as_deref()
            .and_then(parse_iso8601_duration);
        from_snippet(self.id, self.snippet, duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_results_become_stubs() {
        let json = r#"{
            "items": [
                {"id": {"kind": "youtube#video", "videoId": "abc123"},
                 "snippet": {"title": "Full Show", "description": "d", "channelId": "UC1",
                             "channelTitle": "Show", "publishedAt": "2024-09-01T10:00:00Z"}},
                {"id": {"kind": "youtube#channel", "channelId": "UC2"},
                 "snippet": {"title": "A channel"}}
            ]
        }"#;
        let response: ListResponse<SearchResult> = serde_json::from_str(json).unwrap();
        let items: Vec<_> = response.items.into_iter().filter_map(SearchResult::into_stub).collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "abc123");
        assert!(items[0].is_stub());
        assert!(items[0].published_at.is_some());
    }

    #[test]
    fn test_video_details_carry_duration() {
        let json = r#"{
            "items": [
                {"id": "abc123",
                 "snippet": {"title": "Ep. 12", "channelId": "UC1"},
                 "contentDetails": {"duration": "PT1H5M"}}
            ]
        }"#;
        let response: ListResponse<Video> = serde_json::from_str(json).unwrap();
        let item = response.items.into_iter().next().unwrap().into_media_item();
        assert_eq!(item.duration_secs, Some(3900));
        assert_eq!(item.channel_id, "UC1");
    }

    #[test]
    fn test_missing_items_is_empty() {
        let response: ListResponse<Video> = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
    }
}
