/// Client for the external emotion classification service
///
/// The service accepts base64 data-URL frames and answers with a dominant
/// emotion label from its own vocabulary. A single frame goes to
/// `/detect-emotion`, several frames to `/detect-emotion-multi` (which also
/// returns per-frame vote counts). Failures are reported in-band as an
/// `{"error": ...}` body with a 200 status, so both channels are checked.
use std::collections::HashMap;

use serde::Deserialize;
use serde_json::json;

use crate::{
    error::{AppError, AppResult},
    services::providers::{EmotionClassifier, EmotionReading},
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct DeepFaceClassifier {
    http_client: HttpClient,
    base_url: String,
}

/// Raw classifier response body
#[derive(Debug, Deserialize)]
struct ClassifierResponse {
    #[serde(default)]
    emotion: Option<String>,
    #[serde(default)]
    votes: Option<HashMap<String, u32>>,
    #[serde(default)]
    error: Option<String>,
}

impl DeepFaceClassifier {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    fn convert_response(response: ClassifierResponse) -> AppResult<EmotionReading> {
        if let Some(error) = response.error {
            return Err(AppError::ExternalApi(format!(
                "Classifier reported failure: {}",
                error
            )));
        }

        let emotion = response.emotion.ok_or_else(|| {
            AppError::ExternalApi("Classifier response missing emotion label".to_string())
        })?;

        Ok(EmotionReading {
            emotion,
            votes: response.votes,
        })
    }
}

#[async_trait::async_trait]
impl EmotionClassifier for DeepFaceClassifier {
    async fn detect(&self, frames: &[String]) -> AppResult<EmotionReading> {
        if frames.is_empty() {
            return Err(AppError::InvalidInput(
                "At least one image frame is required".to_string(),
            ));
        }

        let (url, body) = if frames.len() == 1 {
            (
                format!("{}/detect-emotion", self.base_url),
                json!({ "image": frames[0] }),
            )
        } else {
            (
                format!("{}/detect-emotion-multi", self.base_url),
                json!({ "images": frames }),
            )
        };

        let response = self.http_client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Classifier returned status {}: {}",
                status, body
            )));
        }

        let parsed: ClassifierResponse = response.json().await?;
        let reading = Self::convert_response(parsed)?;

        tracing::info!(
            emotion = %reading.emotion,
            frames = frames.len(),
            provider = "deepface",
            "Emotion detected"
        );

        Ok(reading)
    }
}
