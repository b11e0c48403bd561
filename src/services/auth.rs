use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::UserStore;
use crate::error::{AppError, AppResult};
use crate::models::UserRecord;

const BAD_CREDENTIALS: &str = "Invalid email or password";

/// Claims embedded in an issued auth token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's id
    pub sub: String,
    pub email: String,
    /// Issued at (unix timestamp)
    pub iat: i64,
    /// Expiry (unix timestamp)
    pub exp: i64,
}

/// Signing and verification keys for auth tokens
///
/// Tokens are HS256-signed and time-bounded; the shared secret comes from
/// server configuration and never leaves the process.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenKeys {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Issues a signed token for the given identity
    pub fn issue(&self, user_id: Uuid, email: &str) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("Token signing error: {}", e)))
    }

    /// Verifies a token's signature and expiry, returning its claims
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| AppError::InvalidToken(e.to_string()))
    }
}

/// Identity returned by successful registration or login
#[derive(Debug, Serialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub token: String,
}

/// Registers a new user
///
/// The password is stored only as a salted bcrypt hash. A duplicate email
/// surfaces as `Conflict`; the failed attempt writes nothing.
pub async fn register(
    store: &dyn UserStore,
    keys: &TokenKeys,
    bcrypt_cost: u32,
    name: &str,
    email: &str,
    password: &str,
) -> AppResult<AuthenticatedUser> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(AppError::InvalidInput(
            "name, email and password are required".to_string(),
        ));
    }

    let password_hash = bcrypt::hash(password, bcrypt_cost)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {}", e)))?;

    let user = UserRecord::new(name.to_string(), email.to_string(), password_hash);
    store.insert_user(&user).await?;

    let token = keys.issue(user.id, &user.email)?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok(AuthenticatedUser {
        id: user.id,
        name: user.name,
        email: user.email,
        token,
    })
}

/// Verifies credentials and issues a fresh token
///
/// Unknown email and wrong password collapse into the same `Unauthorized`
/// answer so the response does not leak which one was wrong.
pub async fn login(
    store: &dyn UserStore,
    keys: &TokenKeys,
    email: &str,
    password: &str,
) -> AppResult<AuthenticatedUser> {
    let user = store
        .find_by_email(email)
        .await?
        .ok_or_else(|| AppError::Unauthorized(BAD_CREDENTIALS.to_string()))?;

    let verified = bcrypt::verify(password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {}", e)))?;

    if !verified {
        return Err(AppError::Unauthorized(BAD_CREDENTIALS.to_string()));
    }

    let token = keys.issue(user.id, &user.email)?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(AuthenticatedUser {
        id: user.id,
        name: user.name,
        email: user.email,
        token,
    })
}
