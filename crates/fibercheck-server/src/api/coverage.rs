use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use fibercheck_core::{AddressQuery, CoverageResponse};

use crate::middleware::RequestId;

use super::AppState;

/// Lookup endpoint. Every address parameter is optional; an empty answer
/// is signalled with `204 No Content` rather than an empty list.
pub(super) async fn lookup_coverage(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<AddressQuery>,
) -> Response {
    let results = state.source.lookup(&query);
    tracing::info!(
        request_id = %req_id.0,
        city = %query.city,
        results = results.len(),
        "coverage lookup"
    );

    if results.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    Json(CoverageResponse {
        query: Some(query),
        results: Some(results),
    })
    .into_response()
}
