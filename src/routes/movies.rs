use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::Movie,
    routes::{extract::ApiQuery, AppState},
    services::{self, browse},
};

/// Movie as returned to the client
#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub id: usize,
    pub title: String,
    pub year: i32,
    pub rating: f64,
    pub stars: String,
    pub genres: Vec<String>,
    pub description: String,
    pub poster_url: String,
}

impl MovieResponse {
    pub fn new(movie: &Movie, image_base_url: &str) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            year: movie.year,
            rating: movie.rating,
            stars: browse::rating_stars(movie.rating),
            genres: movie.genres.iter().cloned().collect(),
            description: movie.description.clone(),
            poster_url: browse::poster_url(image_base_url, &movie.poster_path),
        }
    }
}

fn to_responses(movies: &[&Movie], state: &AppState) -> Vec<MovieResponse> {
    movies
        .iter()
        .map(|movie| MovieResponse::new(movie, &state.config.image_base_url))
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: String,
}

#[derive(Debug, Deserialize)]
pub struct TopRatedQuery {
    /// Comma-separated genre names
    genres: Option<String>,
    min_rating: Option<f64>,
}

/// Handler for the full catalog listing
pub async fn list(State(state): State<AppState>) -> Json<Vec<MovieResponse>> {
    let movies: Vec<&Movie> = state.catalog.iter().collect();
    Json(to_responses(&movies, &state))
}

/// Handler for title/description search
pub async fn search(
    State(state): State<AppState>,
    request_id: RequestId,
    ApiQuery(params): ApiQuery<SearchQuery>,
) -> AppResult<Json<Vec<MovieResponse>>> {
    // Blank queries are rejected, but the query itself is matched verbatim
    if params.q.trim().is_empty() {
        return Err(AppError::InvalidInput("Search query must not be empty".to_string()));
    }

    let results = services::search(&state.catalog, &params.q);

    tracing::info!(
        request_id = %request_id,
        query = %params.q,
        matches = results.len(),
        "Movie search"
    );

    Ok(Json(to_responses(&results, &state)))
}

/// Handler for the top-rated list with optional genre and rating filters
pub async fn top_rated(
    State(state): State<AppState>,
    request_id: RequestId,
    ApiQuery(params): ApiQuery<TopRatedQuery>,
) -> AppResult<Json<Vec<MovieResponse>>> {
    let genres: BTreeSet<String> = params
        .genres
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect();
    let min_rating = params.min_rating.unwrap_or(state.config.default_min_rating);

    let movies = browse::top_rated(
        &state.catalog,
        &genres,
        min_rating,
        state.config.top_rated_limit,
    )?;

    tracing::info!(
        request_id = %request_id,
        genre_count = genres.len(),
        min_rating,
        matches = movies.len(),
        "Top rated movies"
    );

    Ok(Json(to_responses(&movies, &state)))
}

/// Handler listing every genre in the catalog
pub async fn genres(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(browse::all_genres(&state.catalog))
}
