//! Search endpoint.

use axum::{
    extract::{Query, State},
    response::Html,
};

use super::{render, HtmlResult};
use crate::models::SearchQuery;
use crate::AppState;

/// GET /searchtodos - List a user's to-dos matching one field.
pub async fn search_todos(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> HtmlResult {
    let hits = state
        .store
        .search(&params.name, &params.field, &params.query)
        .await?;

    tracing::debug!(
        "Search {}={:?} for {:?}: {} hits",
        params.field,
        params.query,
        params.name,
        hits.len()
    );
    Ok(Html(render::search_results_page(&params.name, &hits)))
}
