use axum::{
    extract::{Query, State},
    Json,
};
use safubot_domain::LookupResult;
use tracing::debug;

use crate::{dto::LookupQuery, errors::ApiError, state::AppState};

pub async fn lookup_address(
    State(state): State<AppState>,
    Query(params): Query<LookupQuery>,
) -> Result<Json<LookupResult>, ApiError> {
    let result = state.lookup.check_address(params.value.trim()).await?;
    debug!(flagged = result.is_flagged, "Address lookup served");
    Ok(Json(result))
}

pub async fn lookup_domain(
    State(state): State<AppState>,
    Query(params): Query<LookupQuery>,
) -> Result<Json<LookupResult>, ApiError> {
    let result = state.lookup.check_domain(params.value.trim()).await?;
    debug!(flagged = result.is_flagged, "Domain lookup served");
    Ok(Json(result))
}
