pub mod aggregate;
pub mod config;
pub mod engine;
pub mod injury;
pub mod podcast;
pub mod sentiment;
pub mod sources;
pub mod transcript;

pub use config::AnalysisConfig;
pub use engine::{MediaSignalEngine, NewsReport};

pub mod prelude {
    pub use super::aggregate::{AggregateAnalysis, ArticleAggregator};
    pub use super::config::AnalysisConfig;
    pub use super::engine::{MediaSignalEngine, NewsReport};
    pub use super::injury::{InjuryAlert, InjuryDetector};
    pub use super::podcast::{PodcastClassification, PodcastClassifier};
    pub use super::sentiment::SentimentAnalyzer;
    pub use super::sources::SourceClassifier;
    pub use super::transcript::{ContextExtractor, TranscriptReport};
    pub use ms_core::{Error, Result};
}
