use std::sync::Arc;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use moodreel_api::config::Config;
use moodreel_api::db::{self, PostgresUserStore};
use moodreel_api::routes::{create_router, AppState};
use moodreel_api::services::auth::TokenKeys;
use moodreel_api::services::providers::deepface::DeepFaceClassifier;
use moodreel_api::services::providers::tmdb::TmdbCatalog;
use moodreel_api::services::providers::youtube::YouTubeSearch;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db_pool = db::create_pool(&config.database_url).await?;
    sqlx::migrate!().run(&db_pool).await?;

    let redis_client = db::create_redis_client(&config.redis_url)?;
    let (cache, cache_writer) = db::Cache::new(redis_client).await;

    let state = Arc::new(AppState {
        store: Arc::new(PostgresUserStore::new(db_pool)),
        catalog: Arc::new(TmdbCatalog::new(
            cache,
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
        )),
        classifier: Arc::new(DeepFaceClassifier::new(config.classifier_url.clone())),
        video_search: Arc::new(YouTubeSearch::new(
            config.youtube_api_key.clone(),
            config.youtube_api_url.clone(),
        )),
        token_keys: TokenKeys::new(&config.jwt_secret, config.token_ttl_secs),
        bcrypt_cost: config.bcrypt_cost,
    });

    let cors = match &config.frontend_url {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    };

    let app = create_router(state).layer(cors);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Flush pending cache writes before the process exits
    cache_writer.shutdown().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
