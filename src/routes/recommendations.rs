use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    services::recommendations::{self, DetectedEmotion, EmotionRecommendations},
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub emotion: String,
}

/// Captured camera frames for classification
///
/// Accepts either a single `image` or a list of `images`; several frames
/// let the classifier vote across them.
#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl DetectRequest {
    fn into_frames(self) -> Vec<String> {
        if !self.images.is_empty() {
            self.images
        } else {
            self.image.into_iter().collect()
        }
    }
}

/// Handler for emotion-keyed movie recommendations
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<EmotionRecommendations>> {
    let result =
        recommendations::recommend_for_label(state.catalog.as_ref(), &query.emotion).await?;
    Ok(Json(result))
}

/// Handler for classifier-backed emotion detection
pub async fn detect(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DetectRequest>,
) -> AppResult<Json<DetectedEmotion>> {
    let frames = request.into_frames();
    let detected = recommendations::detect_emotion(state.classifier.as_ref(), &frames).await?;
    Ok(Json(detected))
}
