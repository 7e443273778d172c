//! Injury keyword detection and the breaking-injury alert window.

use chrono::{DateTime, Duration, Utc};
use ms_core::ScoredArticle;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::InjuryConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertArticle {
    pub title: String,
    pub source: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub hours_ago: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuryAlert {
    pub detected: bool,
    /// Number of flagged articles inside the window.
    pub count: usize,
    pub most_recent_article: AlertArticle,
    pub articles: Vec<ScoredArticle>,
}

#[derive(Debug, Clone)]
pub struct InjuryDetector {
    high_priority: Vec<String>,
    medium_priority: Vec<String>,
    min_medium_matches: usize,
    window: Duration,
}

impl InjuryDetector {
    pub fn new(config: &InjuryConfig) -> Self {
        // Not trimmed: padded entries such as " ir" carry their own boundary.
        let lower = |words: &[String]| -> Vec<String> {
            let mut out: Vec<String> = Vec::new();
            for word in words {
                let word = word.to_lowercase();
                if !word.trim().is_empty() && !out.contains(&word) {
                    out.push(word);
                }
            }
            out
        };
        Self {
            high_priority: lower(&config.high_priority),
            medium_priority: lower(&config.medium_priority),
            min_medium_matches: config.min_medium_matches.max(1),
            window: Duration::hours(config.window_hours.max(0)),
        }
    }

    /// Two-tier substring check: one high-priority term is enough,
    /// medium-priority terms need `min_medium_matches` distinct entries to hit.
    /// Terms match inside longer words ("tears", "fractures").
    pub fn has_injury_keywords(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        if self.high_priority.iter().any(|k| text.contains(k.as_str())) {
            return true;
        }
        let medium = self
            .medium_priority
            .iter()
            .filter(|k| text.contains(k.as_str()))
            .count();
        medium >= self.min_medium_matches
    }

    /// Flagged articles published inside the window ending at `now`. Articles
    /// without a usable timestamp never qualify.
    pub fn detect_alert(&self, articles: &[ScoredArticle], now: DateTime<Utc>) -> Option<InjuryAlert> {
        let start = now - self.window;
        let recent: Vec<(&ScoredArticle, DateTime<Utc>)> = articles
            .iter()
            .filter(|a| a.has_injury_keywords)
            .filter_map(|a| a.published_at.map(|t| (a, t)))
            .filter(|(_, t)| *t >= start && *t <= now)
            .collect();

        // Strictly-greater keeps the earliest entry on equal timestamps.
        let mut newest = *recent.first()?;
        for candidate in &recent[1..] {
            if candidate.1 > newest.1 {
                newest = *candidate;
            }
        }

        let (article, published_at) = newest;
        let hours_ago = (now - published_at).num_hours().max(0) as u64;
        debug!(count = recent.len(), hours_ago, "Breaking injury coverage detected");

        Some(InjuryAlert {
            detected: true,
            count: recent.len(),
            most_recent_article: AlertArticle {
                title: article.title.clone(),
                source: article.source.clone(),
                url: article.url.clone(),
                published_at,
                hours_ago,
            },
            articles: recent.into_iter().map(|(a, _)| a.clone()).collect(),
        })
    }
}

impl Default for InjuryDetector {
    fn default() -> Self {
        Self::new(&InjuryConfig::default())
    }
}
