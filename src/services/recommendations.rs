use std::collections::HashMap;

use serde::Serialize;

use crate::error::AppResult;
use crate::models::{ClassifierEmotion, GenreId, MovieSummary, UiEmotion};
use crate::services::providers::{EmotionClassifier, MovieCatalog};
use crate::services::resolver;

/// Recommendations produced for one emotion label
#[derive(Debug, Serialize)]
pub struct EmotionRecommendations {
    /// The label the recommendations were produced for, normalized to the
    /// UI vocabulary when the input was recognizable
    pub emotion: String,
    pub genre_id: GenreId,
    pub movies: Vec<MovieSummary>,
}

/// Outcome of a classifier round-trip, normalized for the UI
#[derive(Debug, Serialize)]
pub struct DetectedEmotion {
    /// UI-vocabulary label (or the raw label if the classifier answered
    /// outside its documented vocabulary)
    pub emotion: String,
    /// The label exactly as the classifier reported it
    pub classifier_label: String,
    pub genre_id: GenreId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes: Option<HashMap<String, u32>>,
}

/// Resolves a label from either vocabulary to a genre and a UI spelling
///
/// Manual selections arrive as UI labels and take the UI table (the only
/// one that can represent `relaxed`); classifier labels take the classifier
/// table; anything else falls back to the default genre.
fn resolve_label(label: &str) -> (String, GenreId) {
    if let Ok(ui) = label.parse::<UiEmotion>() {
        return (ui.as_str().to_string(), resolver::genre_for_ui(ui));
    }

    if let Ok(classifier) = label.parse::<ClassifierEmotion>() {
        return (
            classifier.to_ui().as_str().to_string(),
            resolver::genre_for_classifier(classifier),
        );
    }

    (label.to_string(), resolver::DEFAULT_GENRE)
}

/// Fetches movie recommendations for an emotion label
pub async fn recommend_for_label(
    catalog: &dyn MovieCatalog,
    label: &str,
) -> AppResult<EmotionRecommendations> {
    let (emotion, genre_id) = resolve_label(label);

    let movies = catalog.discover_by_genre(genre_id).await?;

    tracing::info!(
        emotion = %emotion,
        genre_id = genre_id,
        results = movies.len(),
        "Recommendations resolved"
    );

    Ok(EmotionRecommendations {
        emotion,
        genre_id,
        movies,
    })
}

/// Runs captured frames through the classifier and normalizes the answer
pub async fn detect_emotion(
    classifier: &dyn EmotionClassifier,
    frames: &[String],
) -> AppResult<DetectedEmotion> {
    let reading = classifier.detect(frames).await?;

    let emotion = reading
        .emotion
        .parse::<ClassifierEmotion>()
        .map(|c| c.to_ui().as_str().to_string())
        .unwrap_or_else(|_| reading.emotion.clone());

    let genre_id = resolver::resolve(&reading.emotion);

    Ok(DetectedEmotion {
        emotion,
        classifier_label: reading.emotion,
        genre_id,
        votes: reading.votes,
    })
}
