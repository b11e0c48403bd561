use serde::{Deserialize, Serialize};

/// Movie snapshot as stored in a history entry and returned to the client
///
/// Field names match the catalog payload so a saved entry is a verbatim copy
/// of what the catalog returned at save time. Ratings may drift in the source
/// catalog afterwards; stored copies are never refreshed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

/// Raw movie object from the catalog's discover/search responses
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
}

impl From<TmdbMovie> for MovieSummary {
    fn from(movie: TmdbMovie) -> Self {
        MovieSummary {
            id: movie.id,
            title: movie.title,
            poster_path: movie.poster_path,
            vote_average: movie.vote_average,
            // Empty strings show up for unreleased titles; treat them as absent
            overview: movie.overview.filter(|s| !s.is_empty()),
            release_date: movie.release_date.filter(|s| !s.is_empty()),
        }
    }
}

/// Paged catalog response wrapper for discover/search
#[derive(Debug, Deserialize)]
pub struct TmdbPage {
    #[serde(default)]
    pub results: Vec<TmdbMovie>,
}

/// A single video attached to a movie (trailers, teasers, clips)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieVideo {
    pub key: String,
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
}

impl MovieVideo {
    /// Whether this video is a playable trailer hosted on YouTube
    pub fn is_trailer(&self) -> bool {
        self.site == "YouTube" && self.video_type == "Trailer"
    }
}

/// Catalog response wrapper for GET /movie/{id}/videos
#[derive(Debug, Deserialize)]
pub struct TmdbVideosResponse {
    #[serde(default)]
    pub results: Vec<MovieVideo>,
}

/// One hit from the external video search API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoHit {
    pub video_id: String,
    pub title: String,
}
