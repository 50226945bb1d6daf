use actix_web::{web, HttpResponse, ResponseError};
use chrono::Duration;
use serde_json::{Map, Value};

use crate::config::AppConfig;
use crate::services::auth_service::{self, TokenResponse, TOKEN_TTL_HOURS};

/// Issues an access token for whatever identity the client posts.
/// The login itself happens client side; this only signs the result.
#[utoipa::path(
    post,
    path = "/jwt",
    tag = "Auth",
    request_body(content = Object, description = "Claims to sign, normally `{ \"email\": ... }`"),
    responses(
        (status = 200, description = "Signed token, valid for 3 hours", body = TokenResponse)
    )
)]
pub async fn issue_token(
    config: web::Data<AppConfig>,
    payload: web::Json<Map<String, Value>>,
) -> HttpResponse {
    let email = payload
        .get("email")
        .and_then(Value::as_str)
        .unwrap_or("N/A")
        .to_string();
    log::info!("🔐 POST /jwt - email: {}", email);

    match auth_service::generate_jwt(
        payload.into_inner(),
        &config.access_token_secret,
        Duration::hours(TOKEN_TTL_HOURS),
    ) {
        Ok(token) => HttpResponse::Ok().json(TokenResponse { token }),
        Err(e) => {
            log::error!("❌ Failed to sign token for {}: {}", email, e);
            e.error_response()
        }
    }
}
