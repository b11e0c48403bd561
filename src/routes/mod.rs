use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::db::UserStore;
use crate::middleware::{make_span_with_request_id, request_id_middleware};
use crate::services::auth::TokenKeys;
use crate::services::providers::{EmotionClassifier, MovieCatalog, VideoSearch};

pub mod auth;
pub mod history;
pub mod movies;
pub mod recommendations;

/// Shared application state handed to every handler
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub catalog: Arc<dyn MovieCatalog>,
    pub classifier: Arc<dyn EmotionClassifier>,
    pub video_search: Arc<dyn VideoSearch>,
    pub token_keys: TokenKeys,
    pub bcrypt_cost: u32,
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Auth
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        // History
        .route(
            "/history",
            post(history::append)
                .get(history::list)
                .delete(history::clear),
        )
        .route("/history/:id", delete(history::delete_one))
        // Recommendations
        .route("/recommendations", get(recommendations::recommend))
        .route("/detect-emotion", post(recommendations::detect))
        // Catalog lookups
        .route("/movies/search", get(movies::search))
        .route("/movies/:id/videos", get(movies::videos))
        .route("/videos/search", get(movies::video_search))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
