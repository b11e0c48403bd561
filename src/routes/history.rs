use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{HistoryEntry, MovieSummary},
    services::history,
};

use super::AppState;

/// Client-supplied content of a new history entry
///
/// The id and timestamp are assigned server-side on append.
#[derive(Debug, Deserialize)]
pub struct NewHistoryEntry {
    pub emotion: String,
    #[serde(default)]
    pub movies: Vec<MovieSummary>,
}

#[derive(Debug, Deserialize)]
pub struct AppendRequest {
    pub email: String,
    pub history: NewHistoryEntry,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub email: String,
}

/// Body for delete operations, naming the owning user
#[derive(Debug, Deserialize)]
pub struct OwnerRequest {
    pub email: String,
}

/// Handler for appending one history entry
pub async fn append(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AppendRequest>,
) -> AppResult<Json<Vec<HistoryEntry>>> {
    let entries = history::append(
        state.store.as_ref(),
        &request.email,
        request.history.emotion,
        request.history.movies,
    )
    .await?;

    Ok(Json(entries))
}

/// Handler for listing a user's history
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<HistoryEntry>>> {
    let entries = history::list(state.store.as_ref(), &query.email).await?;
    Ok(Json(entries))
}

/// Handler for deleting a single history entry
pub async fn delete_one(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<Uuid>,
    Json(request): Json<OwnerRequest>,
) -> AppResult<Json<Vec<HistoryEntry>>> {
    let entries = history::delete_one(state.store.as_ref(), &request.email, entry_id).await?;
    Ok(Json(entries))
}

/// Handler for clearing a user's entire history
pub async fn clear(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OwnerRequest>,
) -> AppResult<Json<Vec<HistoryEntry>>> {
    let entries = history::clear(state.store.as_ref(), &request.email).await?;
    Ok(Json(entries))
}
