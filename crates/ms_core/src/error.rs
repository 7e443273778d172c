use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Media item {item} is missing {field}; fetch full details before classifying")]
    MissingMetadata { item: String, field: &'static str },

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Transcript unavailable: {0}")]
    TranscriptUnavailable(String),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
