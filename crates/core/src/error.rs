use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum YtFetchError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("yt-dlp failed for {url}: {reason}")]
    ResolverFailed { url: String, reason: String },

    #[error("Could not run {binary}: {source}")]
    ResolverUnavailable {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read metadata for {url}: {source}")]
    MetadataParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl YtFetchError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        YtFetchError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Bad user input, as opposed to a failure reported by the resolver
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, YtFetchError::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, YtFetchError>;
