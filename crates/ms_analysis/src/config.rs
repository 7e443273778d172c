use std::collections::HashMap;
use std::path::Path;

use ms_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Score at or above which a media item is treated as long-form discussion.
pub const PODCAST_THRESHOLD: i32 = 4;
/// Duration and channel identity are the hardest signals to fake, so they
/// carry the largest weight.
pub const DURATION_WEIGHT: i32 = 3;
pub const CHANNEL_WEIGHT: i32 = 3;
/// Title patterns are supportive only.
pub const TITLE_WEIGHT: i32 = 2;
pub const DESCRIPTION_WEIGHT: i32 = 1;
/// Subtracted when the title looks like a clip compilation.
pub const SHORT_FORM_PENALTY: i32 = 2;
pub const MIN_LONG_FORM_SECS: u64 = 1800;

pub const ALERT_WINDOW_HOURS: i64 = 48;
pub const MIN_MEDIUM_MATCHES: usize = 2;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Every tunable table and threshold of the engine. Partial JSON documents
/// override only the fields they name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub sources: SourceConfig,
    pub injury: InjuryConfig,
    pub podcast: PodcastConfig,
    pub transcript: TranscriptConfig,
    pub lexicon: LexiconConfig,
}

impl AnalysisConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| Error::Config(format!("Invalid analysis config: {}", e)))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Outlet names or slugs that mark a publisher as national.
    pub national: Vec<String>,
    /// Generic words found in local paper names.
    pub local: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            national: strings(&[
                "espn",
                "fox sports",
                "fox-sports",
                "bleacher report",
                "bleacher-report",
                "cbs sports",
                "cbs-sports",
                "nfl.com",
                "nfl-news",
                "usa today",
                "usa-today",
                "sports illustrated",
                "sports-illustrated",
                "the athletic",
                "the-athletic",
            ]),
            local: strings(&[
                "tribune", "times", "post", "journal", "gazette", "chronicle", "herald", "news", "press",
            ]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InjuryConfig {
    /// Any single match flags the text.
    pub high_priority: Vec<String>,
    /// Ambiguous terms; `min_medium_matches` distinct entries must hit.
    pub medium_priority: Vec<String>,
    pub min_medium_matches: usize,
    pub window_hours: i64,
}

impl Default for InjuryConfig {
    fn default() -> Self {
        Self {
            high_priority: strings(&[
                "torn",
                "tear",
                "tore",
                "acl",
                "mcl",
                "achilles",
                "broken",
                "fracture",
                "fractured",
                "surgery",
                "injured reserve",
                "out for season",
                "season-ending",
                "ruled out",
                "sidelined",
            ]),
            medium_priority: strings(&[
                "injury",
                "injured",
                "hurt",
                "concussion",
                "ir ",
                " ir",
                "week-to-week",
                "day-to-day",
                "questionable",
                "doubtful",
            ]),
            min_medium_matches: MIN_MEDIUM_MATCHES,
            window_hours: ALERT_WINDOW_HOURS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PodcastConfig {
    pub threshold: i32,
    pub min_duration_secs: u64,
    pub duration_weight: i32,
    pub channel_weight: i32,
    pub title_weight: i32,
    pub description_weight: i32,
    pub short_form_penalty: i32,
    /// Channel ids known to publish long-form shows.
    pub channels: Vec<String>,
    /// Regular expressions matched against the title.
    pub long_form_patterns: Vec<String>,
    pub short_form_patterns: Vec<String>,
    /// Case-insensitive phrases looked up in the description.
    pub description_keywords: Vec<String>,
}

impl Default for PodcastConfig {
    fn default() -> Self {
        Self {
            threshold: PODCAST_THRESHOLD,
            min_duration_secs: MIN_LONG_FORM_SECS,
            duration_weight: DURATION_WEIGHT,
            channel_weight: CHANNEL_WEIGHT,
            title_weight: TITLE_WEIGHT,
            description_weight: DESCRIPTION_WEIGHT,
            short_form_penalty: SHORT_FORM_PENALTY,
            channels: strings(&[
                "UCxcTeAKWJca6XyJ37_ZoKIQ", // NFL
                "UCxdQI43w4AgkXwEHhPj6Zhg", // Pat McAfee Show
                "UCFR2oaNj02WnXkOgLH0iqOA", // Good Morning Football
                "UCqFMzb-4AUf6WAIbl132QKA", // Around the NFL
                "UCmEKLdY0dHyS8udUMx2VWPg", // NFL Network
            ]),
            long_form_patterns: strings(&[
                r"(?i)\bep(isode)?\.?\s*#?\d+",
                r"#\d+\b",
                r"(?i)\bpodcast\b",
                r"(?i)\bfull (show|episode)\b",
                r"(?i)\binterviews?\b",
                r"(?i)\bdiscussion\b",
                r"\b[Ww]ith [A-Z][a-z]+(?: [A-Z][a-z]+)?",
            ]),
            short_form_patterns: strings(&[
                r"(?i)\bhighlights?\b",
                r"(?i)\bclips?\b",
                r"(?i)\brecap\b",
                r"(?i)\b\d+\s+minutes? of\b",
                r"(?i)\btop \d+\b",
                r"(?i)\bbest (plays|moments)\b",
            ]),
            description_keywords: strings(&["podcast", "full episode"]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitterKind {
    #[default]
    Punctuation,
    Unicode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptConfig {
    /// Sentences kept on each side of a mention.
    pub context_radius: usize,
    pub splitter: SplitterKind,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            context_radius: 1,
            splitter: SplitterKind::Punctuation,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Added to (or overriding) the built-in word weights.
    pub extra: HashMap<String, i32>,
}
