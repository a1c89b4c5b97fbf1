use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
};
use safubot_domain::DomainError;
use tracing::{debug, error};

use crate::{dto::Update, errors::ApiError, state::AppState};

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

/// Receives Telegram updates. Non-JSON deliveries are refused with 403.
/// Once an update is accepted the response is 200 even if the reply could not
/// be sent, so Telegram does not redeliver it.
pub async fn webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    if !is_json(&headers) {
        return Ok(StatusCode::FORBIDDEN);
    }

    let update: Update = serde_json::from_slice(&body)
        .map_err(|e| ApiError(DomainError::InvalidUpdate(e.to_string())))?;

    let Some((target, text)) = update.text_message() else {
        debug!(update_id = update.update_id, "Update carries no text message");
        return Ok(StatusCode::OK);
    };

    if let Err(e) = state.handle_message.execute(target, text).await {
        error!(update_id = update.update_id, error = %e, "Failed to reply to update");
    }

    Ok(StatusCode::OK)
}
