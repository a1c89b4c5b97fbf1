use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use safubot_domain::DomainError;
use serde_json::json;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::InvalidUpdate(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            DomainError::StoreUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "scam database unavailable".to_string(),
            ),

            DomainError::ExternalServiceError(_) | DomainError::TransportError(_) => {
                (StatusCode::BAD_GATEWAY, "upstream service error".to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
