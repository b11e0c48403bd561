use uuid::Uuid;

use crate::db::UserStore;
use crate::error::{AppError, AppResult};
use crate::models::{HistoryEntry, MovieSummary};

/// Per-user recommendation history
///
/// Every mutation is a read-modify-write against the user's single record,
/// guarded by the store's revision compare-and-swap. A concurrent writer
/// surfaces as `Conflict`; there is no automatic retry, the caller decides.

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

/// Appends one whole entry to the end of the user's history
///
/// The entry id and timestamp are assigned here so no partially-built
/// entry is ever persisted. Returns the updated history.
pub async fn append(
    store: &dyn UserStore,
    email: &str,
    emotion: String,
    movies: Vec<MovieSummary>,
) -> AppResult<Vec<HistoryEntry>> {
    let version = store
        .load_history(email)
        .await?
        .ok_or_else(user_not_found)?;

    let entry = HistoryEntry::new(emotion, movies);

    let mut entries = version.entries;
    entries.push(entry.clone());
    store.store_history(email, version.rev, &entries).await?;

    tracing::info!(
        entry_id = %entry.id,
        emotion = %entry.emotion,
        movies = entry.movies.len(),
        "History entry appended"
    );

    Ok(entries)
}

/// Returns the user's history in insertion order, oldest first
pub async fn list(store: &dyn UserStore, email: &str) -> AppResult<Vec<HistoryEntry>> {
    let version = store
        .load_history(email)
        .await?
        .ok_or_else(user_not_found)?;

    Ok(version.entries)
}

/// Removes the entry with the given id, if present
///
/// A missing id is a silent no-op: the unchanged list comes back and
/// nothing is written, so repeating a delete is always safe.
pub async fn delete_one(
    store: &dyn UserStore,
    email: &str,
    entry_id: Uuid,
) -> AppResult<Vec<HistoryEntry>> {
    let version = store
        .load_history(email)
        .await?
        .ok_or_else(user_not_found)?;

    let mut entries = version.entries;
    let before = entries.len();
    entries.retain(|entry| entry.id != entry_id);

    if entries.len() == before {
        return Ok(entries);
    }

    store.store_history(email, version.rev, &entries).await?;

    tracing::info!(entry_id = %entry_id, "History entry deleted");

    Ok(entries)
}

/// Truncates the user's entire history
pub async fn clear(store: &dyn UserStore, email: &str) -> AppResult<Vec<HistoryEntry>> {
    let version = store
        .load_history(email)
        .await?
        .ok_or_else(user_not_found)?;

    store.store_history(email, version.rev, &[]).await?;

    tracing::info!(removed = version.entries.len(), "History cleared");

    Ok(Vec::new())
}
