use chrono::{DateTime, Utc};
use clap::Parser;
use ms_analysis::{AnalysisConfig, MediaSignalEngine};
use ms_core::{MediaItem, RawArticle, Result, Transcript};
use ms_web::AppState;
use ms_youtube::YouTubeClient;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Sentiment, injury alerts and podcast detection for sports media", long_about = None)]
pub struct Cli {
    /// JSON file overriding the default analysis configuration
    #[arg(long, env = "MS_CONFIG", global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Score a batch of news articles and check for breaking injury coverage
    News {
        /// JSON array of articles, or a NewsAPI-style `{"articles": [...]}` response
        #[arg(long)]
        input: PathBuf,
        /// Reference time for the alert window (RFC 3339), defaults to now
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },
    /// Decide whether a video is long-form podcast content
    Classify {
        /// JSON media item
        #[arg(long)]
        input: PathBuf,
        /// Used to fetch full details when the item is a search stub
        #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },
    /// Search the known podcast channels for a subject and classify every hit
    Podcasts {
        #[arg(long)]
        query: String,
        #[arg(long, default_value_t = 5)]
        per_channel: u32,
        #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
        api_key: String,
    },
    /// Analyze a transcript for mentions of a subject
    Transcript {
        /// Plain text, or JSON `{"segments": [{"text", "offset"}]}` when the extension is .json
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        subject: String,
    },
    /// Serve the JSON API
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: SocketAddr,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ArticleBatch {
    Bare(Vec<RawArticle>),
    Envelope { articles: Vec<RawArticle> },
}

impl ArticleBatch {
    fn into_articles(self) -> Vec<RawArticle> {
        match self {
            Self::Bare(articles) | Self::Envelope { articles } => articles,
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    match path {
        Some(path) => {
            info!("⚙️ Loading configuration from {}", path.display());
            AnalysisConfig::from_file(path)
        }
        None => Ok(AnalysisConfig::default()),
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn read_transcript(path: &Path) -> Result<Transcript> {
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        read_json(path)
    } else {
        Ok(Transcript::from_text(std::fs::read_to_string(path)?))
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct ClassifiedItem {
    item: MediaItem,
    classification: ms_analysis::podcast::PodcastClassification,
}

/// Items that cannot be classified (no duration, e.g. upcoming live streams)
/// are logged and skipped.
fn keep_podcasts(engine: &MediaSignalEngine, items: Vec<MediaItem>) -> Vec<ClassifiedItem> {
    let mut podcasts = Vec::new();
    for item in items {
        match engine.classify_media(&item) {
            Ok(classification) if classification.is_podcast => {
                podcasts.push(ClassifiedItem { item, classification });
            }
            Ok(_) => {}
            Err(e) => warn!("⚠️ Skipping {}: {}", item.id, e),
        }
    }
    podcasts
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let engine = MediaSignalEngine::new(&config)?;
    info!("✨ Analysis engine ready");

    match cli.command {
        Commands::News { input, now } => {
            let articles = read_json::<ArticleBatch>(&input)?.into_articles();
            let report = engine.analyze_news(&articles, now.unwrap_or_else(Utc::now));
            print_json(&report)?;
        }
        Commands::Classify { input, api_key } => {
            let item: MediaItem = read_json(&input)?;
            let classification = match api_key {
                Some(key) if item.is_stub() => {
                    let client = YouTubeClient::new(key);
                    engine.classify_media_resolved(&item, &client).await?
                }
                _ => engine.classify_media(&item)?,
            };
            print_json(&classification)?;
        }
        Commands::Podcasts { query, per_channel, api_key } => {
            let client = YouTubeClient::new(api_key);
            info!("🎧 Searching {} channels for {:?}", config.podcast.channels.len(), query);
            let stubs = client.search_channels(&query, &config.podcast.channels, per_channel).await;

            let mut items = Vec::new();
            for stub in stubs {
                match client.video_details(&stub.id).await {
                    Ok(item) => items.push(item),
                    Err(e) => warn!("⚠️ Skipping {}: {}", stub.id, e),
                }
            }
            let podcasts = keep_podcasts(&engine, items);
            info!("🎙️ Found {} podcast episode(s)", podcasts.len());
            print_json(&podcasts)?;
        }
        Commands::Transcript { input, subject } => {
            let transcript = read_transcript(&input)?;
            let report = engine.analyze_transcript(&transcript, &subject);
            print_json(&report)?;
        }
        Commands::Serve { addr } => {
            let state = AppState { engine: Arc::new(engine) };
            ms_web::serve(state, addr).await?;
        }
    }

    Ok(())
}
