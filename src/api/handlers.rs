use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{GenreLabel, GenreRecommendation, UserProfile},
    services::recommend_genres,
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub count: usize,
    pub genres: Vec<GenreLabel>,
}

#[derive(Debug, Serialize)]
pub struct GenreNodeResponse {
    pub genre: GenreLabel,
    pub children: Vec<GenreLabel>,
    pub parents: Vec<GenreLabel>,
    pub root: bool,
}

// Handlers

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "status": "healthy", "genres": state.catalog.len() }))
}

/// List the full genre catalog in catalog order
pub async fn list_genres(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        count: state.catalog.len(),
        genres: state.catalog.iter().cloned().collect(),
    })
}

/// Hierarchy view of a single catalog genre
pub async fn get_genre(
    State(state): State<AppState>,
    Path(genre): Path<String>,
) -> AppResult<Json<GenreNodeResponse>> {
    if !state.catalog.contains(&genre) {
        return Err(AppError::NotFound(format!("Genre '{}'", genre)));
    }

    let hierarchy = &state.hierarchy;
    let response = GenreNodeResponse {
        children: hierarchy
            .children(&genre)
            .map(<[GenreLabel]>::to_vec)
            .unwrap_or_default(),
        parents: hierarchy.parents(&genre).into_iter().cloned().collect(),
        root: hierarchy.is_root(&genre),
        genre,
    };

    Ok(Json(response))
}

/// Recommend undiscovered genres for a listening snapshot
pub async fn recommend_genre(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    params: Option<Query<RecommendQuery>>,
    payload: Option<Json<Value>>,
) -> AppResult<Json<GenreRecommendation>> {
    let Some(Query(params)) = params else {
        return Err(AppError::InvalidInput(
            "top_n must be a positive integer".to_string(),
        ));
    };

    let profile = UserProfile::from_payload(payload.map(|Json(value)| value))?;
    let top_n = params.top_n.unwrap_or(state.default_top_n);

    tracing::info!(
        request_id = %request_id,
        artists = profile.len(),
        top_n,
        "Processing genre recommendation request"
    );

    let outcome = tokio::task::spawn_blocking(move || {
        recommend_genres(
            &state.catalog,
            &profile,
            state.vector_space.as_deref(),
            top_n,
        )
    })
    .await
    .map_err(|e| AppError::Computation(format!("Recommendation task failed: {}", e)))??;

    tracing::info!(
        request_id = %request_id,
        recommended = outcome.genres().len(),
        "Genre recommendation completed"
    );

    Ok(Json(outcome))
}
