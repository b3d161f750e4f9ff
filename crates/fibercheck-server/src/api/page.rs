use axum::{
    extract::{Query, State},
    response::Html,
    Extension,
};
use fibercheck_core::{results_view, AddressQuery};

use crate::html::render_page;
use crate::middleware::RequestId;

use super::AppState;

/// Server-rendered coverage page.
///
/// Incomplete addresses render the form alone, without any message.
pub(super) async fn coverage_page(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<AddressQuery>,
) -> Html<String> {
    let view = query.is_submittable().then(|| {
        let results = state.source.lookup(&query);
        tracing::info!(
            request_id = %req_id.0,
            results = results.len(),
            "rendered coverage page lookup"
        );
        results_view(&query, &results, state.locale)
    });

    Html(render_page(&query, view.as_ref(), state.locale))
}
