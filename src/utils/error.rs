use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

pub const UNAUTHORIZED_MESSAGE: &str = "unauthorized access";
pub const FORBIDDEN_ROLE_MESSAGE: &str = "forbidden message";
pub const FORBIDDEN_OWNER_MESSAGE: &str = "forbidden access";

#[derive(Debug)]
pub enum AppError {
    Unauthorized,
    Forbidden(&'static str),
    InvalidRequest(String),
    DatabaseError(String),
    PaymentError(String),
    ConfigError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthorized => write!(f, "{}", UNAUTHORIZED_MESSAGE),
            AppError::Forbidden(msg) => write!(f, "{}", msg),
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::PaymentError(msg) => write!(f, "Payment error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(e: mongodb::bson::ser::Error) -> Self {
        AppError::InvalidRequest(e.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PaymentError(_) => StatusCode::BAD_GATEWAY,
            AppError::DatabaseError(_) | AppError::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Same `{error, message}` envelope the web client already parses for 401/403.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": true,
            "message": self.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn unauthorized_renders_fixed_payload() {
        let res = AppError::Unauthorized.error_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let body = to_bytes(res.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": true, "message": "unauthorized access" }));
    }

    #[test]
    fn status_codes_follow_variant() {
        assert_eq!(
            AppError::Forbidden(FORBIDDEN_ROLE_MESSAGE).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::InvalidRequest("bad id".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::DatabaseError("down".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::PaymentError("declined".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }
}
