use axum::{extract::State, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use ms_analysis::podcast::PodcastClassification;
use ms_analysis::transcript::TranscriptReport;
use ms_analysis::NewsReport;
use ms_core::{CaptionSegment, MediaItem, RawArticle, Transcript};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct NewsRequest {
    pub articles: Vec<RawArticle>,
    /// Reference instant for the alert window; the server clock when absent.
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptRequest {
    pub subject: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub segments: Vec<CaptionSegment>,
}

impl TranscriptRequest {
    fn transcript(self) -> Transcript {
        match self.text {
            Some(text) if self.segments.is_empty() => Transcript::from_text(text),
            _ => Transcript { segments: self.segments },
        }
    }
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn analyze_news(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewsRequest>,
) -> Json<NewsReport> {
    let now = request.now.unwrap_or_else(Utc::now);
    Json(state.engine.analyze_news(&request.articles, now))
}

pub async fn classify_media(
    State(state): State<Arc<AppState>>,
    Json(item): Json<MediaItem>,
) -> Result<Json<PodcastClassification>, ApiError> {
    let classification = state.engine.classify_media(&item)?;
    info!("🎙️ {} scored {}", item.id, classification.score);
    Ok(Json(classification))
}

pub async fn analyze_transcript(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TranscriptRequest>,
) -> Json<TranscriptReport> {
    let subject = request.subject.clone();
    let transcript = request.transcript();
    Json(state.engine.analyze_transcript(&transcript, &subject))
}
