//! Lexicon-based polarity scoring.

use std::fmt;
use std::sync::Arc;

use ms_core::{SentimentLabel, SentimentScore};

pub mod lexicon;

pub use lexicon::{AfinnLexicon, Lexicon};

/// A lexicon word directly after one of these has its weight negated.
const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "without", "cannot",
    "can't", "cant", "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "isn't", "isnt",
    "aren't", "arent", "wasn't", "wasnt", "weren't", "werent", "won't", "wont", "wouldn't",
    "shouldn't", "couldn't", "hasn't", "haven't", "hadn't",
];

#[derive(Clone)]
pub struct SentimentAnalyzer {
    lexicon: Arc<dyn Lexicon>,
}

impl fmt::Debug for SentimentAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentAnalyzer")
            .field("lexicon_entries", &self.lexicon.len())
            .finish()
    }
}

impl SentimentAnalyzer {
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Score a text. Empty or unscorable input yields a neutral zero score.
    pub fn analyze(&self, text: &str) -> SentimentScore {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return SentimentScore::neutral();
        }

        let mut score = 0i32;
        let mut positive = Vec::new();
        let mut negative = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut weight) = self.lexicon.weight(token) else {
                continue;
            };
            if i > 0 && NEGATORS.contains(&tokens[i - 1].as_str()) {
                weight = -weight;
            }
            if weight > 0 {
                positive.push(token.clone());
            } else if weight < 0 {
                negative.push(token.clone());
            }
            score += weight;
        }

        SentimentScore {
            score,
            comparative: f64::from(score) / tokens.len() as f64,
            label: SentimentLabel::from_score(score),
            tokens: tokens.len(),
            positive,
            negative,
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(AfinnLexicon::new()))
    }
}

/// Lowercase word tokens. Apostrophes and inner hyphens are kept so that
/// contractions like "don't" survive for negation checks.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace(['\u{2019}', '\u{2018}'], "'")
        .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '-'))
        .map(|t| t.trim_matches(|c| c == '\'' || c == '-'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
