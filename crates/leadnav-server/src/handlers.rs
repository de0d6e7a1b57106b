//! Request handlers for the LeadNav API.
//!
//! Cookie handlers follow the same shape: resolve the authenticated
//! user, validate input, make exactly one store call, wrap the result in
//! the response envelope. The `/start` and `/pause` scraper controls are
//! placeholders — the scraping engine is a separate future project — but
//! they already sit behind the auth gate.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use leadnav_models::{ApiResponse, CookieData, CookieSaved, SaveOutcome, validate_cookie};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::AppState;
use crate::auth::AuthUser;
use crate::error::ApiError;

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Body of `POST /v1/scraper/salesnav/cookie`.
#[derive(Debug, Deserialize)]
pub struct SaveCookieRequest {
    /// The LinkedIn session cookie to store. Kept optional so a missing
    /// field reports "required" rather than a generic decode error.
    #[serde(default)]
    pub cookie: Option<String>,
}

/// Body of `POST /v1/scraper/salesnav/start`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartScrapeRequest {
    /// Sales Navigator search URL to scrape.
    #[serde(default)]
    pub url: Option<String>,
    /// Name for the resulting lead list.
    #[serde(default)]
    pub list_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Cookie handlers
// ---------------------------------------------------------------------------

/// `POST /v1/scraper/salesnav/cookie` — save or replace the caller's cookie.
///
/// Upsert semantics: 201 with `createdAt` on first save, 200 with
/// `updatedAt` when an existing record was replaced. The cookie value is
/// trimmed before storage and never echoed back.
pub async fn save_cookie(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<SaveCookieRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CookieSaved>>), ApiError> {
    let cookie = validate_cookie(req.cookie.as_deref())?;

    let outcome = state
        .store
        .save(&user, &cookie)
        .await
        .map_err(|e| ApiError::storage("Failed to save cookie", e))?;

    match outcome {
        SaveOutcome::Created { created_at } => {
            info!(user = %user, "cookie saved");
            Ok((
                StatusCode::CREATED,
                Json(ApiResponse::ok(
                    "Cookie saved successfully",
                    CookieSaved {
                        user_id: user,
                        created_at: Some(created_at),
                        updated_at: None,
                    },
                )),
            ))
        }
        SaveOutcome::Replaced { updated_at } => {
            info!(user = %user, "cookie replaced");
            Ok((
                StatusCode::OK,
                Json(ApiResponse::ok(
                    "Cookie updated successfully",
                    CookieSaved {
                        user_id: user,
                        created_at: None,
                        updated_at: Some(updated_at),
                    },
                )),
            ))
        }
    }
}

/// `GET /v1/scraper/salesnav/cookie` — fetch the caller's stored cookie.
pub async fn get_cookie(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<ApiResponse<CookieData>>, ApiError> {
    let stored = state
        .store
        .get(&user)
        .await
        .map_err(|e| ApiError::storage("Failed to retrieve cookie", e))?
        .ok_or(ApiError::NotFound("No cookie found for this user"))?;

    Ok(Json(ApiResponse::ok(
        "Cookie retrieved successfully",
        CookieData {
            cookie: stored.cookie,
            updated_at: stored.updated_at,
        },
    )))
}

/// `DELETE /v1/scraper/salesnav/cookie` — remove the caller's cookie.
///
/// Idempotent at the store level; a second delete reports 404 because
/// there was nothing left to remove.
pub async fn delete_cookie(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let removed = state
        .store
        .delete(&user)
        .await
        .map_err(|e| ApiError::storage("Failed to delete cookie", e))?;

    if !removed {
        return Err(ApiError::NotFound("No cookie found for this user"));
    }

    info!(user = %user, "cookie deleted");
    Ok(Json(ApiResponse::message("Cookie deleted successfully")))
}

// ---------------------------------------------------------------------------
// Scraper control placeholders
// ---------------------------------------------------------------------------

/// `POST /v1/scraper/salesnav/start` — placeholder.
pub async fn start_scrape(
    AuthUser(user): AuthUser,
    Json(req): Json<StartScrapeRequest>,
) -> Json<ApiResponse<()>> {
    info!(
        user = %user,
        url = req.url.as_deref().unwrap_or("-"),
        list = req.list_name.as_deref().unwrap_or("-"),
        "scraper start requested"
    );
    Json(ApiResponse::message("Scraper start is not implemented yet"))
}

/// `POST /v1/scraper/salesnav/pause` — placeholder.
pub async fn pause_scrape(AuthUser(user): AuthUser) -> Json<ApiResponse<()>> {
    info!(user = %user, "scraper pause requested");
    Json(ApiResponse::message("Scraper pause is not implemented yet"))
}

// ---------------------------------------------------------------------------
// Service plumbing
// ---------------------------------------------------------------------------

/// `GET /health` — liveness probe, no auth.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "leadnav-server" }))
}

/// Fallback for unknown paths: the JSON envelope instead of a bare 404.
pub async fn not_found() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error("API endpoint not found")),
    )
}
