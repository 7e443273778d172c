//! Subject mentions and localized sentiment in long-form transcripts.

use std::fmt;
use std::sync::Arc;

use ms_core::{SentimentScore, Transcript, TranscriptSource};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{SplitterKind, TranscriptConfig};
use crate::sentiment::SentimentAnalyzer;

pub mod splitter;

pub use splitter::{PunctuationSplitter, SentenceSplitter, UnicodeSentenceSplitter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionContext {
    /// Index of the matching sentence in the split transcript.
    pub sentence_index: usize,
    pub context: String,
    pub sentiment: SentimentScore,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectContext {
    /// Number of sentences naming the subject.
    pub count: usize,
    pub mentions: Vec<MentionContext>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptAnalysis {
    pub word_count: usize,
    /// Whole-document score; mention windows are scored separately.
    pub sentiment: SentimentScore,
    pub subject_context: SubjectContext,
}

/// Availability is part of the result so callers can branch on `available`
/// without error handling. Analysis fields are inlined when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptReport {
    available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(flatten)]
    analysis: Option<TranscriptAnalysis>,
}

impl TranscriptReport {
    pub fn available(analysis: TranscriptAnalysis) -> Self {
        Self { available: true, error: None, analysis: Some(analysis) }
    }

    pub fn unavailable(error: impl Into<String>) -> Self {
        Self { available: false, error: Some(error.into()), analysis: None }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn analysis(&self) -> Option<&TranscriptAnalysis> {
        self.analysis.as_ref()
    }
}

#[derive(Clone)]
pub struct ContextExtractor {
    scorer: SentimentAnalyzer,
    splitter: Arc<dyn SentenceSplitter>,
    radius: usize,
}

impl fmt::Debug for ContextExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextExtractor")
            .field("splitter", &self.splitter)
            .field("radius", &self.radius)
            .finish()
    }
}

impl ContextExtractor {
    pub fn new(scorer: SentimentAnalyzer, splitter: Arc<dyn SentenceSplitter>, radius: usize) -> Self {
        Self { scorer, splitter, radius }
    }

    pub fn from_config(scorer: SentimentAnalyzer, config: &TranscriptConfig) -> Self {
        let splitter: Arc<dyn SentenceSplitter> = match config.splitter {
            SplitterKind::Punctuation => Arc::new(PunctuationSplitter),
            SplitterKind::Unicode => Arc::new(UnicodeSentenceSplitter),
        };
        Self::new(scorer, splitter, config.context_radius)
    }

    /// One record per sentence containing the full name or the surname,
    /// case-insensitive. Overlapping windows are not merged.
    pub fn extract(&self, transcript: &str, subject: &str) -> SubjectContext {
        let full_name = subject.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        let Some(surname) = full_name.split(' ').last().filter(|s| !s.is_empty()) else {
            return SubjectContext::default();
        };

        let sentences = self.splitter.split(transcript);
        let mut mentions = Vec::new();
        for (i, sentence) in sentences.iter().enumerate() {
            let lower = sentence.to_lowercase();
            if !lower.contains(full_name.as_str()) && !lower.contains(surname) {
                continue;
            }
            let start = i.saturating_sub(self.radius);
            let end = i.saturating_add(self.radius).min(sentences.len() - 1);
            let context = sentences[start..=end].join(" ");
            let sentiment = self.scorer.analyze(&context);
            mentions.push(MentionContext { sentence_index: i, context, sentiment });
        }

        SubjectContext { count: mentions.len(), mentions }
    }

    pub fn analyze(&self, transcript: &Transcript, subject: &str) -> TranscriptReport {
        if transcript.is_empty() {
            return TranscriptReport::unavailable("No captions available");
        }
        let text = transcript.text();
        let analysis = TranscriptAnalysis {
            word_count: text.split_whitespace().count(),
            sentiment: self.scorer.analyze(&text),
            subject_context: self.extract(&text, subject),
        };
        info!(
            words = analysis.word_count,
            mentions = analysis.subject_context.count,
            "📝 Transcript analyzed"
        );
        TranscriptReport::available(analysis)
    }

    /// Fetch failures become an unavailable report instead of an error.
    pub async fn analyze_from(
        &self,
        source: &dyn TranscriptSource,
        id: &str,
        subject: &str,
    ) -> TranscriptReport {
        match source.fetch_transcript(id).await {
            Ok(transcript) => self.analyze(&transcript, subject),
            Err(e) => {
                warn!("Transcript for {} unavailable: {}", id, e);
                TranscriptReport::unavailable(e.to_string())
            }
        }
    }
}

impl Default for ContextExtractor {
    fn default() -> Self {
        Self::from_config(SentimentAnalyzer::default(), &TranscriptConfig::default())
    }
}
