use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{MovieSummary, MovieVideo, VideoHit},
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// Handler for free-text movie search
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<MovieSummary>>> {
    let movies = state.catalog.search_movies(&params.q).await?;
    Ok(Json(movies))
}

/// Handler for a movie's attached videos (trailers, teasers, clips)
pub async fn videos(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<u64>,
) -> AppResult<Json<Vec<MovieVideo>>> {
    let videos = state.catalog.movie_videos(movie_id).await?;
    Ok(Json(videos))
}

/// Handler for external video search (movie songs, fan trailers)
pub async fn video_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<VideoHit>>> {
    let hits = state.video_search.search_videos(&params.q).await?;
    Ok(Json(hits))
}
