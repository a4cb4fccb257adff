//! Route handlers

use crate::server::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Successful detection payload
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DetectResponse {
    /// The `url` parameter, echoed verbatim
    pub url: String,
    /// Resolved sitemap URLs, possibly empty
    pub sitemaps: Vec<String>,
}

/// Error payload
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors a route can answer with
#[derive(Debug)]
pub enum ApiError {
    MissingUrl,
    InvalidQuery(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingUrl => (
                StatusCode::BAD_REQUEST,
                "Missing URL parameter".to_string(),
            ),
            ApiError::InvalidQuery(detail) => (StatusCode::BAD_REQUEST, detail),
        };

        let body = ErrorResponse { error: message };
        (status, Json(body)).into_response()
    }
}

/// `GET /detect_sitemap?url=<site>`
///
/// Only the first `url` pair counts; repeats are ignored. An absent or empty
/// first `url` is a client error; anything else is answered with 200, even
/// when no sitemap was found.
pub async fn detect_sitemap(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<DetectResponse>, ApiError> {
    let Query(pairs) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;

    let url = match first_param(pairs, "url") {
        Some(url) if !url.is_empty() => url,
        _ => return Err(ApiError::MissingUrl),
    };

    let sitemaps = state.detector.detect_sitemap(&url).await;
    Ok(Json(DetectResponse { url, sitemaps }))
}

/// Value of the first `name` pair in query order
fn first_param(pairs: Vec<(String, String)>, name: &str) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}
