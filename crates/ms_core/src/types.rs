use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publisher block as delivered by news search APIs (`source: { id, name }`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: ArticleSource,
    #[serde(default)]
    pub url: String,
    /// `None` when the feed omitted the timestamp or sent something unparseable.
    #[serde(default, with = "lenient_timestamp")]
    pub published_at: Option<DateTime<Utc>>,
}

impl RawArticle {
    /// Title and description joined the way they are scored.
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.description.as_deref().unwrap_or(""))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "Very Negative")]
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    #[serde(rename = "Very Positive")]
    VeryPositive,
}

impl SentimentLabel {
    pub fn from_score(score: i32) -> Self {
        Self::from_average(f64::from(score))
    }

    /// Fixed threshold mapping shared by single scores and batch averages.
    pub fn from_average(score: f64) -> Self {
        if score > 2.0 {
            Self::VeryPositive
        } else if score > 0.0 {
            Self::Positive
        } else if score == 0.0 {
            Self::Neutral
        } else if score > -2.0 {
            Self::Negative
        } else {
            Self::VeryNegative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryNegative => "Very Negative",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Positive => "Positive",
            Self::VeryPositive => "Very Positive",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentScore {
    pub score: i32,
    pub comparative: f64,
    pub label: SentimentLabel,
    /// Number of tokens the comparative score was normalised by.
    pub tokens: usize,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl SentimentScore {
    pub fn neutral() -> Self {
        Self {
            score: 0,
            comparative: 0.0,
            label: SentimentLabel::Neutral,
            tokens: 0,
            positive: Vec::new(),
            negative: Vec::new(),
        }
    }
}

impl Default for SentimentScore {
    fn default() -> Self {
        Self::neutral()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    National,
    Local,
    Other,
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::National => "national",
            Self::Local => "local",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredArticle {
    pub title: String,
    pub description: Option<String>,
    pub source: String,
    pub source_type: SourceType,
    pub url: String,
    #[serde(default, with = "lenient_timestamp")]
    pub published_at: Option<DateTime<Utc>>,
    pub sentiment: SentimentScore,
    pub has_injury_keywords: bool,
}

/// Video or audio metadata. Search results arrive as stubs with no duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub channel_title: Option<String>,
    #[serde(default)]
    pub duration_secs: Option<u64>,
    #[serde(default, with = "lenient_timestamp")]
    pub published_at: Option<DateTime<Utc>>,
}

impl MediaItem {
    pub fn is_stub(&self) -> bool {
        self.duration_secs.is_none()
    }

    pub fn url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionSegment {
    pub text: String,
    #[serde(default)]
    pub offset: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(default)]
    pub segments: Vec<CaptionSegment>,
}

impl Transcript {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            segments: vec![CaptionSegment { text: text.into(), offset: 0.0 }],
        }
    }

    /// Caption text in playback order, one space between segments.
    pub fn text(&self) -> String {
        let mut segments: Vec<&CaptionSegment> = self.segments.iter().collect();
        segments.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        segments
            .iter()
            .map(|s| s.text.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.text.trim().is_empty())
    }
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Serde adapter that maps missing or malformed timestamps to `None`
/// instead of failing the whole batch.
pub mod lenient_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(serde_json::Value::String(s)) => super::parse_timestamp(&s),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_label_thresholds() {
        assert_eq!(SentimentLabel::from_score(3), SentimentLabel::VeryPositive);
        assert_eq!(SentimentLabel::from_score(1), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-1), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(-2), SentimentLabel::VeryNegative);
        assert_eq!(SentimentLabel::from_average(2.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_average(-1.99), SentimentLabel::Negative);
    }

    #[test]
    fn test_label_is_monotonic() {
        let labels: Vec<_> = (-6..=6).map(SentimentLabel::from_score).collect();
        assert!(labels.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_raw_article_from_news_api() {
        let json = r#"{
            "source": {"id": "espn", "name": "ESPN"},
            "title": "Star returns",
            "description": null,
            "url": "https://espn.com/a",
            "publishedAt": "2024-10-01T12:30:00Z"
        }"#;
        let article: RawArticle = serde_json::from_str(json).unwrap();
        assert_eq!(article.source.name, "ESPN");
        assert_eq!(
            article.published_at,
            Some(Utc.with_ymd_and_hms(2024, 10, 1, 12, 30, 0).unwrap())
        );
        assert_eq!(article.text(), "Star returns ");
    }

    #[test]
    fn test_malformed_timestamp_is_none() {
        let json = r#"{"title": "x", "source": {"name": "y"}, "url": "", "publishedAt": "yesterday"}"#;
        let article: RawArticle = serde_json::from_str(json).unwrap();
        assert!(article.published_at.is_none());

        let json = r#"{"title": "x", "publishedAt": 12}"#;
        let article: RawArticle = serde_json::from_str(json).unwrap();
        assert!(article.published_at.is_none());
    }

    #[test]
    fn test_transcript_text_orders_segments() {
        let transcript = Transcript {
            segments: vec![
                CaptionSegment { text: "world.".into(), offset: 2.5 },
                CaptionSegment { text: " ".into(), offset: 1.0 },
                CaptionSegment { text: "Hello".into(), offset: 0.0 },
            ],
        };
        assert_eq!(transcript.text(), "Hello world.");
        assert!(!transcript.is_empty());
        assert!(Transcript::default().is_empty());
    }

    #[test]
    fn test_media_item_stub() {
        let json = r#"{"id": "abc", "title": "Clip", "channelId": "UC1"}"#;
        let item: MediaItem = serde_json::from_str(json).unwrap();
        assert!(item.is_stub());
        assert_eq!(item.url(), "https://www.youtube.com/watch?v=abc");
    }
}
