//! Error types for the Hello A site.

use thiserror::Error;

/// Result type alias using the site's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the site.
#[derive(Error, Debug)]
pub enum Error {
    // Catalog errors
    #[error("Episode not found: {0}")]
    EpisodeNotFound(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // Media errors
    #[error("Playback failed to start: {0}")]
    PlaybackStart(String),

    #[error("Seek failed: {0}")]
    Seek(String),

    // Browser side effects
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if this error should render the not-found page.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::EpisodeNotFound(_))
    }
}
