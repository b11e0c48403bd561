/// Video search provider backed by the YouTube Data API
///
/// Used for the song and trailer lookups attached to recommended movies.
/// Key-authed GET; only the video id and title are kept from each hit.
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::VideoHit,
    services::providers::VideoSearch,
};
use reqwest::Client as HttpClient;

const MAX_RESULTS: &str = "10";

#[derive(Clone)]
pub struct YouTubeSearch {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemId {
    #[serde(default)]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
}

impl YouTubeSearch {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    fn convert_response(response: SearchResponse) -> Vec<VideoHit> {
        response
            .items
            .into_iter()
            .filter_map(|item| {
                item.id.video_id.map(|video_id| VideoHit {
                    video_id,
                    title: item.snippet.title,
                })
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl VideoSearch for YouTubeSearch {
    async fn search_videos(&self, query: &str) -> AppResult<Vec<VideoHit>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/search", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", MAX_RESULTS),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Video search API returned status {}: {}",
                status, body
            )));
        }

        let parsed: SearchResponse = response.json().await?;
        let hits = Self::convert_response(parsed);

        tracing::info!(
            query = %query,
            results = hits.len(),
            provider = "youtube",
            "Video search completed"
        );

        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_response_extracts_id_and_title() {
        let json = r#"{
            "kind": "youtube#searchListResponse",
            "items": [
                {
                    "id": {"kind": "youtube#video", "videoId": "zSWdZVtXT7E"},
                    "snippet": {"title": "Interstellar Main Theme", "channelTitle": "SoundtrackFan"}
                }
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let hits = YouTubeSearch::convert_response(response);

        assert_eq!(
            hits,
            vec![VideoHit {
                video_id: "zSWdZVtXT7E".to_string(),
                title: "Interstellar Main Theme".to_string(),
            }]
        );
    }

    #[test]
    fn test_convert_response_skips_non_video_hits() {
        // Channel results come back without a videoId
        let json = r#"{
            "items": [
                {"id": {"kind": "youtube#channel"}, "snippet": {"title": "Some Channel"}},
                {"id": {"videoId": "abc123"}, "snippet": {"title": "A Song"}}
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let hits = YouTubeSearch::convert_response(response);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].video_id, "abc123");
    }

    #[test]
    fn test_convert_empty_response() {
        let response: SearchResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(YouTubeSearch::convert_response(response).is_empty());
    }
}
