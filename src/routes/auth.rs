use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    services::auth::{self, AuthenticatedUser},
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Handler for user registration
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthenticatedUser>)> {
    let user = auth::register(
        state.store.as_ref(),
        &state.token_keys,
        state.bcrypt_cost,
        &request.name,
        &request.email,
        &request.password,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Handler for credential login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<AuthenticatedUser>> {
    let user = auth::login(
        state.store.as_ref(),
        &state.token_keys,
        &request.email,
        &request.password,
    )
    .await?;

    Ok(Json(user))
}
