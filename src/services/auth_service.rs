use crate::utils::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Access tokens live for three hours.
pub const TOKEN_TTL_HOURS: i64 = 3;

// JWT Claims: whatever the client posted to /jwt plus iat/exp
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    #[serde(default)]
    pub email: String,
    pub iat: usize,
    pub exp: usize,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// Signs `payload` as the token body. Client supplied `iat`/`exp` are replaced.
pub fn generate_jwt(
    mut payload: Map<String, Value>,
    secret: &str,
    ttl: Duration,
) -> Result<String, AppError> {
    let now = Utc::now();
    payload.insert("iat".to_string(), Value::from(now.timestamp()));
    payload.insert("exp".to_string(), Value::from((now + ttl).timestamp()));

    encode(
        &Header::new(Algorithm::HS256),
        &payload,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InvalidRequest(format!("Failed to generate token: {}", e)))
}

// Verify JWT token
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|data| data.claims)
        .map_err(|e| {
            log::debug!("Rejected token: {}", e);
            AppError::Unauthorized
        })
}

/// Token from an `Authorization` header value: the part after the scheme.
pub fn bearer_token(header: &str) -> Option<&str> {
    header.split_whitespace().nth(1)
}
