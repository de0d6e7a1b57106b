//! LeadNav scraper API — per-user LinkedIn cookie store behind a JWT gate.
//!
//! The service is configured entirely from environment variables (see
//! [`leadnav_server::config::AppConfig`]). On startup it:
//!
//! 1. Selects and connects the persistence backend.
//! 2. Builds the JWT verifier from the shared secret.
//! 3. Serves the REST surface under `/v1/scraper/salesnav`.

use std::sync::Arc;

use anyhow::Context;
use leadnav_server::auth::JwtVerifier;
use leadnav_server::config::{AppConfig, StoreBackend};
use leadnav_server::{AppState, cors_layer, router};
use leadnav_store::{CookieStore, MemoryCookieStore};
use tracing::info;

#[cfg(feature = "postgres")]
use leadnav_store::PostgresCookieStore;

/// Pool size for the Postgres backend.
#[cfg(feature = "postgres")]
const PG_MAX_CONNECTIONS: u32 = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging (controlled via RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let store: Arc<dyn CookieStore> = match config.store_backend {
        #[cfg(feature = "postgres")]
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("STORE_BACKEND=postgres requires DATABASE_URL")?;
            let store = PostgresCookieStore::connect(database_url, PG_MAX_CONNECTIONS).await?;
            store.ensure_schema().await?;
            Arc::new(store)
        }
        #[cfg(not(feature = "postgres"))]
        StoreBackend::Postgres => anyhow::bail!(
            "STORE_BACKEND=postgres but the server was built without the `postgres` feature"
        ),
        StoreBackend::Memory => Arc::new(MemoryCookieStore::new()),
    };
    info!(backend = store.backend_name(), "cookie store ready");

    let verifier = JwtVerifier::new(&config.jwt_secret);
    let state = AppState::new(store, verifier);
    let app = router(state, cors_layer(&config.cors_origins));

    let addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(address = %addr, "LeadNav scraper API listening");
    info!("  GET    /health");
    info!("  POST   /v1/scraper/salesnav/cookie");
    info!("  GET    /v1/scraper/salesnav/cookie");
    info!("  DELETE /v1/scraper/salesnav/cookie");
    info!("  POST   /v1/scraper/salesnav/start");
    info!("  POST   /v1/scraper/salesnav/pause");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
