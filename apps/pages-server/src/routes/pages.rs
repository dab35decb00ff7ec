//! Page API routes
//!
//! - `GET /api/pages` lists page slugs
//! - `POST /api/pages` creates or overwrites a page
//! - `GET /api/pages/:slug` returns a page's content
//!
//! `OPTIONS` requests never reach these handlers; the CORS layer answers them.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::document::Slug;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Body of `POST /api/pages`
#[derive(Debug, Deserialize)]
pub struct CreatePageRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct CreatePageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PageContent {
    pub content: String,
}

/// Create the pages router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pages", get(list_pages).post(create_page))
        .route("/api/pages/", get(missing_slug))
        .route("/api/pages/:slug", get(get_page))
}

/// List all page slugs
async fn list_pages(State(state): State<AppState>) -> Result<Json<Vec<Slug>>> {
    let slugs = state.store().list().await?;
    Ok(Json(slugs))
}

/// Create a page.
///
/// The body is decoded as JSON whatever its declared content type, so simple
/// cross-origin requests work without a preflight.
async fn create_page(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatePageResponse>)> {
    let request: CreatePageRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::MalformedRequest(format!("Invalid request body: {}", e)))?;

    let slug = state.store().create(&request.name, &request.content).await?;
    tracing::info!(slug = %slug, bytes = request.content.len(), "Page created");

    Ok((
        StatusCode::CREATED,
        Json(CreatePageResponse {
            message: "Page created successfully".to_string(),
        }),
    ))
}

/// Get the content of one page
async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PageContent>> {
    let content = state.store().get(&slug).await?;
    Ok(Json(PageContent { content }))
}

async fn missing_slug() -> AppError {
    AppError::BadRequest("Slug not provided".to_string())
}
