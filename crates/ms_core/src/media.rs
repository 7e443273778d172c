use async_trait::async_trait;
use crate::types::{MediaItem, Transcript};
use crate::Result;

/// Lookup of full media metadata. Search endpoints usually return stubs
/// without a duration; implementors fill in the complete item.
#[async_trait]
pub trait MediaCatalog: Send + Sync {
    /// Fetch complete details for a single item
    async fn media_details(&self, id: &str) -> Result<MediaItem>;
}

#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the caption track for an item. An empty track is not an error here;
    /// the engine reports it as unavailable.
    async fn fetch_transcript(&self, id: &str) -> Result<Transcript>;
}
