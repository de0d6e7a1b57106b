//! LeadNav scraper API — router assembly.
//!
//! The service exposes the Sales Navigator cookie store under
//! `/v1/scraper/salesnav` plus an unauthenticated `/health` probe.
//! Everything the handlers need (the cookie store, the JWT verifier) is
//! carried in [`AppState`] and injected via `axum::extract::State` — no
//! process-global handles.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use leadnav_store::CookieStore;
use tower_http::cors::{Any, CorsLayer};

use crate::auth::JwtVerifier;
use crate::config::CorsOrigins;

// ---------------------------------------------------------------------------
// Shared application state
// ---------------------------------------------------------------------------

/// State shared across all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The cookie credential store.
    pub store: Arc<dyn CookieStore>,
    /// Verifier for incoming bearer tokens.
    pub verifier: Arc<JwtVerifier>,
}

impl AppState {
    /// Bundle a store and a verifier into shared state.
    pub fn new(store: Arc<dyn CookieStore>, verifier: JwtVerifier) -> Self {
        Self {
            store,
            verifier: Arc::new(verifier),
        }
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the full application router.
///
/// Route map (paths kept wire-compatible with the dashboard frontend):
///
/// ```text
/// GET    /health
/// POST   /v1/scraper/salesnav/cookie
/// GET    /v1/scraper/salesnav/cookie
/// DELETE /v1/scraper/salesnav/cookie
/// POST   /v1/scraper/salesnav/start   (placeholder)
/// POST   /v1/scraper/salesnav/pause   (placeholder)
/// ```
///
/// Unknown paths fall through to a JSON 404 envelope.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    let salesnav = Router::new()
        .route(
            "/cookie",
            post(handlers::save_cookie)
                .get(handlers::get_cookie)
                .delete(handlers::delete_cookie),
        )
        .route("/start", post(handlers::start_scrape))
        .route("/pause", post(handlers::pause_scrape));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/v1/scraper/salesnav", salesnav)
        .fallback(handlers::not_found)
        .layer(cors)
        .with_state(state)
}

/// Build the CORS layer from the configured origin allowlist.
///
/// `*` opens the service up completely (local development); otherwise
/// only the listed origins may call, with the methods and headers the
/// dashboard actually uses.
pub fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    match origins {
        CorsOrigins::Any => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsOrigins::List(list) => {
            let origins: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::DELETE])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        }
    }
}
