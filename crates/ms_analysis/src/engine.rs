use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use ms_core::{MediaCatalog, MediaItem, RawArticle, Result, ScoredArticle, SentimentScore, Transcript, TranscriptSource};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::aggregate::{AggregateAnalysis, ArticleAggregator};
use crate::config::AnalysisConfig;
use crate::injury::{InjuryAlert, InjuryDetector};
use crate::podcast::{PodcastClassification, PodcastClassifier};
use crate::sentiment::{AfinnLexicon, SentimentAnalyzer};
use crate::sources::SourceClassifier;
use crate::transcript::{ContextExtractor, TranscriptReport};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsReport {
    pub articles: Vec<ScoredArticle>,
    pub analysis: Option<AggregateAnalysis>,
    pub injury_alert: Option<InjuryAlert>,
}

/// Entry point bundling every analysis component behind one read-only value.
/// Safe to share across tasks; no call mutates it.
pub struct MediaSignalEngine {
    scorer: SentimentAnalyzer,
    aggregator: ArticleAggregator,
    podcast: PodcastClassifier,
    extractor: ContextExtractor,
}

impl fmt::Debug for MediaSignalEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaSignalEngine")
            .field("scorer", &self.scorer)
            .field("extractor", &self.extractor)
            .finish()
    }
}

impl MediaSignalEngine {
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        let mut lexicon = AfinnLexicon::new();
        lexicon.extend(config.lexicon.extra.iter().map(|(w, s)| (w.clone(), *s)));
        let scorer = SentimentAnalyzer::new(Arc::new(lexicon));

        let aggregator = ArticleAggregator::new(
            scorer.clone(),
            SourceClassifier::new(&config.sources),
            InjuryDetector::new(&config.injury),
        );
        let podcast = PodcastClassifier::new(&config.podcast)?;
        let extractor = ContextExtractor::from_config(scorer.clone(), &config.transcript);

        Ok(Self { scorer, aggregator, podcast, extractor })
    }

    pub fn score_text(&self, text: &str) -> SentimentScore {
        self.scorer.analyze(text)
    }

    /// Score, classify and summarize a batch, then look for breaking injury
    /// coverage in the window ending at `now`.
    pub fn analyze_news(&self, articles: &[RawArticle], now: DateTime<Utc>) -> NewsReport {
        info!("📰 Analyzing {} articles", articles.len());
        let result = self.aggregator.aggregate(articles);
        let injury_alert = self.aggregator.injury_detector().detect_alert(&result.articles, now);
        if let Some(alert) = &injury_alert {
            info!(
                "🚑 Breaking injury coverage: {} article(s), latest {}h ago",
                alert.count, alert.most_recent_article.hours_ago
            );
        }
        NewsReport {
            articles: result.articles,
            analysis: result.analysis,
            injury_alert,
        }
    }

    pub fn classify_media(&self, item: &MediaItem) -> Result<PodcastClassification> {
        self.podcast.classify(item)
    }

    pub async fn classify_media_resolved(
        &self,
        item: &MediaItem,
        catalog: &dyn MediaCatalog,
    ) -> Result<PodcastClassification> {
        self.podcast.classify_resolved(item, catalog).await
    }

    pub fn analyze_transcript(&self, transcript: &Transcript, subject: &str) -> TranscriptReport {
        self.extractor.analyze(transcript, subject)
    }

    pub async fn analyze_transcript_from(
        &self,
        source: &dyn TranscriptSource,
        id: &str,
        subject: &str,
    ) -> TranscriptReport {
        self.extractor.analyze_from(source, id, subject).await
    }
}
