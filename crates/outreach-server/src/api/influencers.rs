//! GET /api/influencers and POST /api/influencers/search.

use axum::{extract::State, Extension, Json};
use outreach_core::{filter_influencers, Influencer, InfluencerFilter, SearchRequest};

use crate::middleware::RequestId;

use super::AppState;

pub(super) async fn list_influencers(State(state): State<AppState>) -> Json<Vec<Influencer>> {
    Json(state.roster.read().await.clone())
}

/// Matches `query` against name, username and niche, returning at most
/// `limit` results (the server default when absent).
pub(super) async fn search_influencers(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<SearchRequest>,
) -> Json<Vec<Influencer>> {
    let limit = request.limit.unwrap_or(state.default_limit);
    let roster = state.roster.read().await;
    let mut results = filter_influencers(&roster, &InfluencerFilter::with_term(&request.query));
    results.truncate(usize::try_from(limit).unwrap_or(usize::MAX));

    tracing::info!(
        request_id = %req_id.0,
        query = %request.query,
        limit,
        matched = results.len(),
        "influencer search"
    );
    Json(results)
}
