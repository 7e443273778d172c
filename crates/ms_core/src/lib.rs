pub mod duration;
pub mod error;
pub mod media;
pub mod types;

pub use duration::parse_iso8601_duration;
pub use error::{Error, Result};
pub use media::{MediaCatalog, TranscriptSource};
pub use types::*;

pub mod prelude {
    pub use super::types::{MediaItem, RawArticle, ScoredArticle, SentimentLabel, SentimentScore, SourceType, Transcript};
    pub use super::{Error, Result};
}
