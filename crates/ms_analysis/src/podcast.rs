//! Long-form content detection for video/audio items.

use std::collections::HashSet;

use ms_core::{Error, MediaCatalog, MediaItem, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::PodcastConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PodcastSignal {
    LongDuration,
    KnownChannel,
    LongFormTitle,
    PodcastDescription,
    ShortFormTitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalHit {
    pub signal: PodcastSignal,
    pub weight: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastClassification {
    pub is_podcast: bool,
    pub score: i32,
    /// Signals that fired, in evaluation order.
    pub signals: Vec<SignalHit>,
}

#[derive(Debug, Clone)]
pub struct PodcastClassifier {
    config: PodcastConfig,
    channels: HashSet<String>,
    long_form: Vec<Regex>,
    short_form: Vec<Regex>,
    description_keywords: Vec<String>,
}

fn compile(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(|e| Error::Config(format!("Invalid title pattern {:?}: {}", p, e))))
        .collect()
}

impl PodcastClassifier {
    pub fn new(config: &PodcastConfig) -> Result<Self> {
        Ok(Self {
            long_form: compile(&config.long_form_patterns)?,
            short_form: compile(&config.short_form_patterns)?,
            channels: config.channels.iter().cloned().collect(),
            description_keywords: config
                .description_keywords
                .iter()
                .map(|k| k.to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            config: config.clone(),
        })
    }

    /// Additive score over complete metadata. A stub without a duration is
    /// rejected rather than scored as if the duration were short.
    pub fn classify(&self, item: &MediaItem) -> Result<PodcastClassification> {
        let duration = item.duration_secs.ok_or_else(|| Error::MissingMetadata {
            item: item.id.clone(),
            field: "duration",
        })?;

        let mut signals = Vec::new();
        if duration >= self.config.min_duration_secs {
            signals.push(SignalHit { signal: PodcastSignal::LongDuration, weight: self.config.duration_weight });
        }
        if self.channels.contains(&item.channel_id) {
            signals.push(SignalHit { signal: PodcastSignal::KnownChannel, weight: self.config.channel_weight });
        }
        if self.long_form.iter().any(|re| re.is_match(&item.title)) {
            signals.push(SignalHit { signal: PodcastSignal::LongFormTitle, weight: self.config.title_weight });
        }
        let description = item.description.to_lowercase();
        if self.description_keywords.iter().any(|k| description.contains(k.as_str())) {
            signals.push(SignalHit {
                signal: PodcastSignal::PodcastDescription,
                weight: self.config.description_weight,
            });
        }
        if self.short_form.iter().any(|re| re.is_match(&item.title)) {
            signals.push(SignalHit { signal: PodcastSignal::ShortFormTitle, weight: -self.config.short_form_penalty });
        }

        let score = signals.iter().map(|s| s.weight).sum();
        let is_podcast = score >= self.config.threshold;
        debug!(id = %item.id, score, is_podcast, "Classified media item");

        Ok(PodcastClassification { is_podcast, score, signals })
    }

    /// Classify, fetching full details from the catalog first when the item
    /// is a search-result stub.
    pub async fn classify_resolved(
        &self,
        item: &MediaItem,
        catalog: &dyn MediaCatalog,
    ) -> Result<PodcastClassification> {
        if !item.is_stub() {
            return self.classify(item);
        }
        info!("🔎 Fetching full details for {}", item.id);
        let full = catalog.media_details(&item.id).await?;
        self.classify(&full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn item(title: &str, description: &str, channel_id: &str, duration_secs: Option<u64>) -> MediaItem {
        MediaItem {
            id: "vid1".to_string(),
            title: title.to_string(),
            description: description.to_string(),
            channel_id: channel_id.to_string(),
            channel_title: None,
            duration_secs,
            published_at: None,
        }
    }

    fn classifier() -> PodcastClassifier {
        PodcastClassifier::new(&PodcastConfig::default()).unwrap()
    }

    #[test]
    fn test_long_interview_is_podcast() {
        let result = classifier()
            .classify(&item("Full Episode: Guest Interview", "", "UCunknown", Some(2400)))
            .unwrap();
        assert_eq!(result.score, 5);
        assert!(result.is_podcast);
        assert_eq!(
            result.signals.iter().map(|s| s.signal).collect::<Vec<_>>(),
            vec![PodcastSignal::LongDuration, PodcastSignal::LongFormTitle]
        );
    }

    #[test]
    fn test_long_highlight_reel_is_suppressed() {
        // 3 (duration) - 2 (highlights) = 1
        let result = classifier()
            .classify(&item("Top 10 Plays: Season Highlights", "", "UCunknown", Some(3600)))
            .unwrap();
        assert_eq!(result.score, 1);
        assert!(!result.is_podcast);
    }

    #[test]
    fn test_known_channel_with_description() {
        let result = classifier()
            .classify(&item(
                "Monday reactions",
                "Listen to the full podcast on all platforms",
                "UCxdQI43w4AgkXwEHhPj6Zhg",
                Some(600),
            ))
            .unwrap();
        assert_eq!(result.score, 4);
        assert!(result.is_podcast);
    }

    #[test]
    fn test_title_patterns() {
        let c = classifier();
        let score = |title: &str| c.classify(&item(title, "", "", Some(60))).unwrap().score;
        assert_eq!(score("Episode 112 - Draft talk"), 2);
        assert_eq!(score("Sitting down with Patrick Mahomes"), 2);
        assert_eq!(score("Sitting down with the coach"), 0);
        assert_eq!(score("10 minutes of pure chaos"), -2);
        assert_eq!(score("Best moments from week 3"), -2);
        assert_eq!(score("Game recap"), -2);
    }

    #[test]
    fn test_boundary_duration() {
        let c = classifier();
        assert_eq!(c.classify(&item("", "", "", Some(1800))).unwrap().score, 3);
        assert_eq!(c.classify(&item("", "", "", Some(1799))).unwrap().score, 0);
    }

    #[test]
    fn test_stub_is_rejected() {
        let err = classifier().classify(&item("Podcast", "", "", None)).unwrap_err();
        assert!(matches!(err, Error::MissingMetadata { field: "duration", .. }));
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let config = PodcastConfig {
            long_form_patterns: vec!["(unclosed".to_string()],
            ..PodcastConfig::default()
        };
        assert!(matches!(PodcastClassifier::new(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_pure_function_of_metadata() {
        let c = classifier();
        let it = item("The Podcast #42 with Jane Doe", "full episode", "UCxcTeAKWJca6XyJ37_ZoKIQ", Some(5000));
        assert_eq!(c.classify(&it).unwrap(), c.classify(&it).unwrap());
        assert_eq!(c.classify(&it).unwrap().score, 9);
    }

    struct FakeCatalog {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl MediaCatalog for FakeCatalog {
        async fn media_details(&self, id: &str) -> Result<MediaItem> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(MediaItem {
                id: id.to_string(),
                title: "Around the league podcast".to_string(),
                description: String::new(),
                channel_id: "UCother".to_string(),
                channel_title: None,
                duration_secs: Some(4000),
                published_at: None,
            })
        }
    }

    #[tokio::test]
    async fn test_resolves_stub_before_scoring() {
        let catalog = FakeCatalog { calls: AtomicUsize::new(0) };
        let c = classifier();

        let result = c.classify_resolved(&item("clip", "", "", None), &catalog).await.unwrap();
        assert_eq!(result.score, 5);
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 1);

        let result = c.classify_resolved(&item("clip", "", "", Some(30)), &catalog).await.unwrap();
        assert_eq!(result.score, -2);
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 1);
    }
}
