use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::models::{Recommendations, Strategy};
use crate::services::store;

use super::AppState;

/// Query parameters for the compute endpoints
///
/// `userInput` is optional; an absent parameter binds SQL NULL and falls
/// through to the no-match response.
#[derive(Debug, Deserialize)]
pub struct ComputeParams {
    #[serde(rename = "userInput")]
    pub user_input: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Home page
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

/// About page
pub async fn about() -> Html<&'static str> {
    Html(include_str!("../../templates/about.html"))
}

/// Precomputed recommendations from the Universal Recommender table
pub async fn compute_ur(
    State(state): State<AppState>,
    Query(params): Query<ComputeParams>,
) -> AppResult<Json<Recommendations>> {
    let result = store::lookup(&state.pool, Strategy::Ur, params.user_input.as_deref()).await?;
    Ok(Json(result))
}

/// Precomputed recommendations from the ALS table
pub async fn compute_als(
    State(state): State<AppState>,
    Query(params): Query<ComputeParams>,
) -> AppResult<Json<Recommendations>> {
    let result = store::lookup(&state.pool, Strategy::Als, params.user_input.as_deref()).await?;
    Ok(Json(result))
}
