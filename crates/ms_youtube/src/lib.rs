//! YouTube Data API collaborator: channel searches that return stubs, and
//! full video details for the content-type classifier.

mod api;
pub mod client;

pub use client::{YouTubeClient, CHANNEL_SEARCH_DELAY};

pub mod prelude {
    pub use super::client::YouTubeClient;
    pub use ms_core::{Error, MediaCatalog, MediaItem, Result};
}
