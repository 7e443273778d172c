use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ms_core::{Error, MediaCatalog, MediaItem, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::api::{ListResponse, SearchResult, Video};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Pause between per-channel searches to stay under the API rate limit.
pub const CHANNEL_SEARCH_DELAY: Duration = Duration::from_millis(100);

pub struct YouTubeClient {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for YouTubeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YouTubeClient")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl YouTubeClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Arc::new(Client::new()),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub(crate) fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| Error::Fetch(format!("Invalid endpoint URL: {}", e)))?;
        url.query_pairs_mut()
            .extend_pairs(params.iter().copied())
            .append_pair("key", &self.api_key);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url.path());
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("API request failed with status {}", status.as_u16())));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| Error::Fetch(format!("Failed to parse response: {}", e)))
    }

    async fn search(&self, params: &[(&str, &str)]) -> Result<Vec<MediaItem>> {
        let url = self.endpoint("search", params)?;
        let response: ListResponse<SearchResult> = self.get_json(url).await?;
        Ok(response.items.into_iter().filter_map(SearchResult::into_stub).collect())
    }

    /// Search all of YouTube. Results are stubs without a duration.
    pub async fn search_videos(&self, query: &str, max_results: u32) -> Result<Vec<MediaItem>> {
        let max = max_results.to_string();
        self.search(&[("part", "snippet"), ("q", query), ("type", "video"), ("maxResults", &max)])
            .await
    }

    pub async fn search_channel(&self, query: &str, channel_id: &str, max_results: u32) -> Result<Vec<MediaItem>> {
        let max = max_results.to_string();
        self.search(&[
            ("part", "snippet"),
            ("channelId", channel_id),
            ("q", query),
            ("type", "video"),
            ("maxResults", &max),
        ])
        .await
    }

    /// Search each channel in turn. A failing channel is logged and skipped.
    pub async fn search_channels(&self, query: &str, channel_ids: &[String], per_channel: u32) -> Vec<MediaItem> {
        let mut results = Vec::new();
        for (i, channel_id) in channel_ids.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(CHANNEL_SEARCH_DELAY).await;
            }
            match self.search_channel(query, channel_id, per_channel).await {
                Ok(items) => results.extend(items),
                Err(e) => warn!("Error searching channel {}: {}", channel_id, e),
            }
        }
        results
    }

    pub async fn video_details(&self, id: &str) -> Result<MediaItem> {
        let url = self.endpoint("videos", &[("part", "snippet,contentDetails"), ("id", id)])?;
        let response: ListResponse<Video> = self.get_json(url).await?;
        response
            .items
            .into_iter()
            .next()
            .map(Video::into_media_item)
            .ok_or_else(|| Error::Fetch(format!("Video not found: {}", id)))
    }
}

#[async_trait]
impl MediaCatalog for YouTubeClient {
    async fn media_details(&self, id: &str) -> Result<MediaItem> {
        self.video_details(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_params_and_key() {
        let client = YouTubeClient::new("secret").with_base_url("https://example.test/yt/");
        let url = client.endpoint("search", &[("q", "Josh Allen"), ("type", "video")]).unwrap();
        assert_eq!(url.as_str(), "https://example.test/yt/search?q=Josh+Allen&type=video&key=secret");
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = YouTubeClient::new("secret");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("googleapis"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        let client = YouTubeClient::new("k").with_base_url("http://127.0.0.1:9");
        let err = client.video_details("abc").await.unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));
    }
}
