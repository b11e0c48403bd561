use std::collections::HashMap;

/// Outbound provider abstractions
///
/// Every third-party collaborator sits behind a trait so the service layer
/// and the tests never touch the network directly. Production wires in the
/// reqwest-backed implementations below; tests substitute mocks.
use crate::error::AppResult;
use crate::models::{GenreId, MovieSummary, MovieVideo, VideoHit};

pub mod deepface;
pub mod tmdb;
pub mod youtube;

/// Movie catalog provider (search/discovery plus per-movie videos)
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Popularity-ranked titles carrying the given genre
    async fn discover_by_genre(&self, genre_id: GenreId) -> AppResult<Vec<MovieSummary>>;

    /// Free-text title search
    async fn search_movies(&self, query: &str) -> AppResult<Vec<MovieSummary>>;

    /// Videos (trailers, teasers, clips) attached to one movie
    async fn movie_videos(&self, movie_id: u64) -> AppResult<Vec<MovieVideo>>;
}

/// What the external vision classifier reported for a set of frames
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionReading {
    /// Dominant label, in the classifier's own vocabulary
    pub emotion: String,
    /// Per-frame vote counts when more than one frame was analyzed
    pub votes: Option<HashMap<String, u32>>,
}

/// Emotion classification service
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Classifies one or more base64-encoded image frames
    async fn detect(&self, frames: &[String]) -> AppResult<EmotionReading>;
}

/// Video search provider (song/trailer lookups)
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait VideoSearch: Send + Sync {
    async fn search_videos(&self, query: &str) -> AppResult<Vec<VideoHit>>;
}
