use crate::handlers::people::ServiceError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use content::PersonRecord;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct SearchParams {
    /// Search fragment matched against first and last name. Defaults to
    /// empty, which matches every person.
    pub s: Option<String>,
    /// Result count cap. Kept as a raw string and parsed leniently so a
    /// malformed value degrades to the builder's default of 5 instead of
    /// failing extraction with a non-envelope response.
    pub l: Option<String>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub data: Vec<PersonRecord>,
}

pub async fn search_people(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ServiceError> {
    let term = params.s.unwrap_or_default();
    let limit = params.l.as_deref().and_then(|l| l.parse::<i64>().ok());
    let query = state.queries.by_name(&term, limit);

    let result = state.repository.execute(&query).await.map_err(|e| {
        tracing::error!("People search failed: {}", e);
        ServiceError::Search(e.to_string())
    })?;

    // Hits are forwarded as-is: the repository already applied the sort
    // order and count cap.
    Ok(Json(SearchResponse { data: result.hits }))
}
