use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppResult,
    middleware::RequestId,
    routes::{extract::ApiJson, movies::MovieResponse, AppState},
    services::recommender,
};

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub title: String,
    /// Number of recommendations; the configured default when omitted
    pub k: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendedMovie {
    #[serde(flatten)]
    pub movie: MovieResponse,
    pub similarity: f64,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub title: String,
    pub recommendations: Vec<RecommendedMovie>,
}

/// Handler for similar-movie recommendations
pub async fn recommend(
    State(state): State<AppState>,
    request_id: RequestId,
    ApiJson(request): ApiJson<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    let k = request.k.unwrap_or(state.config.recommendation_count);

    tracing::info!(
        request_id = %request_id,
        title = %request.title,
        k,
        "Processing recommendation request"
    );

    let recommendations = recommender::recommend(&state.catalog, &request.title, k)
        .inspect_err(|e| {
            tracing::info!(request_id = %request_id, error = %e, "No recommendations")
        })?
        .into_iter()
        .map(|rec| RecommendedMovie {
            movie: MovieResponse::new(rec.movie, &state.config.image_base_url),
            similarity: rec.similarity,
        })
        .collect();

    Ok(Json(RecommendationResponse {
        title: request.title,
        recommendations,
    }))
}
