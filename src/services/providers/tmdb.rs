/// Movie catalog provider backed by the TMDB API
///
/// All three operations are plain GETs authenticated with a bearer token.
/// Responses are cached in Redis: discovery and search move slowly enough
/// for an hour, a movie's video list for a week.
use crate::{
    cached,
    db::{Cache, CacheKey},
    error::{AppError, AppResult},
    models::{GenreId, MovieSummary, MovieVideo, TmdbPage, TmdbVideosResponse},
    services::providers::MovieCatalog,
};
use reqwest::Client as HttpClient;

const DISCOVER_CACHE_TTL: u64 = 3600; // 1 hour
const SEARCH_CACHE_TTL: u64 = 3600; // 1 hour
const VIDEOS_CACHE_TTL: u64 = 604800; // 1 week
const WATCH_REGION: &str = "US";

#[derive(Clone)]
pub struct TmdbCatalog {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    cache: Cache,
}

impl TmdbCatalog {
    pub fn new(cache: Cache, api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            cache,
        }
    }

    /// Issues an authenticated GET and decodes the JSON body
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let response = self
            .http_client
            .get(url)
            .bearer_auth(&self.api_key)
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Catalog API returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl MovieCatalog for TmdbCatalog {
    async fn discover_by_genre(&self, genre_id: GenreId) -> AppResult<Vec<MovieSummary>> {
        cached!(
            self.cache,
            CacheKey::Discover(genre_id),
            DISCOVER_CACHE_TTL,
            async move {
                let url = format!("{}/discover/movie", self.api_url);
                let genre = genre_id.to_string();

                let page: TmdbPage = self
                    .get_json(
                        &url,
                        &[
                            ("with_genres", genre.as_str()),
                            ("sort_by", "popularity.desc"),
                            ("watch_region", WATCH_REGION),
                        ],
                    )
                    .await?;

                let movies: Vec<MovieSummary> =
                    page.results.into_iter().map(MovieSummary::from).collect();

                tracing::info!(
                    genre_id = genre_id,
                    results = movies.len(),
                    provider = "tmdb",
                    "Genre discovery completed"
                );

                Ok::<_, AppError>(movies)
            }
        )
    }

    async fn search_movies(&self, query: &str) -> AppResult<Vec<MovieSummary>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        cached!(
            self.cache,
            CacheKey::MovieSearch(query.to_string()),
            SEARCH_CACHE_TTL,
            async move {
                let url = format!("{}/search/movie", self.api_url);

                let page: TmdbPage = self.get_json(&url, &[("query", query)]).await?;

                let movies: Vec<MovieSummary> =
                    page.results.into_iter().map(MovieSummary::from).collect();

                tracing::info!(
                    query = %query,
                    results = movies.len(),
                    provider = "tmdb",
                    "Movie search completed"
                );

                Ok::<_, AppError>(movies)
            }
        )
    }

    async fn movie_videos(&self, movie_id: u64) -> AppResult<Vec<MovieVideo>> {
        cached!(
            self.cache,
            CacheKey::Videos(movie_id),
            VIDEOS_CACHE_TTL,
            async move {
                let url = format!("{}/movie/{}/videos", self.api_url, movie_id);

                let response: TmdbVideosResponse = self.get_json(&url, &[]).await?;

                tracing::info!(
                    movie_id = movie_id,
                    results = response.results.len(),
                    provider = "tmdb",
                    "Videos fetched"
                );

                Ok::<_, AppError>(response.results)
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MovieSummary, TmdbPage, TmdbVideosResponse};

    async fn create_test_catalog() -> TmdbCatalog {
        TmdbCatalog {
            http_client: reqwest::Client::new(),
            api_key: "test_key".to_string(),
            api_url: "http://test.local".to_string(),
            cache: Cache::new(redis::Client::open("redis://localhost:6379").unwrap())
                .await
                .0,
        }
    }

    #[tokio::test]
    async fn test_search_rejects_empty_query() {
        let catalog = create_test_catalog().await;

        let err = catalog.search_movies("   ").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_discover_payload_deserialization() {
        let json = r#"{
            "page": 1,
            "results": [{
                "adult": false,
                "id": 27205,
                "title": "Inception",
                "genre_ids": [28, 878],
                "poster_path": "/poster.jpg",
                "vote_average": 8.368,
                "overview": "Cobb steals secrets from within the subconscious.",
                "release_date": "2010-07-15",
                "popularity": 29.1
            }],
            "total_pages": 500,
            "total_results": 10000
        }"#;

        let page: TmdbPage = serde_json::from_str(json).unwrap();
        let movies: Vec<MovieSummary> = page.results.into_iter().map(MovieSummary::from).collect();

        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id, 27205);
        assert_eq!(movies[0].title, "Inception");
        assert_eq!(movies[0].vote_average, Some(8.368));
    }

    #[test]
    fn test_videos_payload_deserialization() {
        let json = r#"{
            "id": 27205,
            "results": [
                {"key": "YoHD9XEInc0", "name": "Official Trailer", "site": "YouTube", "type": "Trailer", "official": true},
                {"key": "d3A3-zSOBT4", "name": "Behind the Scenes", "site": "YouTube", "type": "Featurette"}
            ]
        }"#;

        let response: TmdbVideosResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 2);
        assert!(response.results[0].is_trailer());
        assert!(!response.results[1].is_trailer());
    }

    #[test]
    fn test_empty_results_deserialize_to_empty_list() {
        let page: TmdbPage = serde_json::from_str(r#"{"page": 1, "results": []}"#).unwrap();
        assert!(page.results.is_empty());

        // A payload with no results key at all is also tolerated
        let page: TmdbPage = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert!(page.results.is_empty());
    }
}
