//! Server configuration.
//!
//! Read once from environment variables at startup and injected into
//! Axum handlers via [`crate::AppState`] / layers built from it.

/// Which persistence backend to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// In-memory store; contents lost on restart.
    Memory,
    /// PostgreSQL via sqlx (requires the `postgres` cargo feature).
    Postgres,
}

/// CORS origin policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Allow any origin (`CORS_ALLOWED_ORIGINS=*`).
    Any,
    /// Allow exactly these origins.
    List(Vec<String>),
}

/// Global configuration shared across the service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to listen on (default `3001`).
    pub listen_port: u16,
    /// Shared secret used to verify HS256 bearer tokens.
    pub jwt_secret: String,
    /// Persistence backend selection.
    pub store_backend: StoreBackend,
    /// Connection string, required when `store_backend` is Postgres.
    pub database_url: Option<String>,
    /// Browser origins allowed to call the API.
    pub cors_origins: CorsOrigins,
}

impl AppConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable               | Default                  | Description                          |
    /// |------------------------|--------------------------|--------------------------------------|
    /// | `LEADNAV_PORT`         | `3001`                   | HTTP listen port                     |
    /// | `JWT_SECRET`           | `leadnav-dev-secret`     | HS256 token verification secret      |
    /// | `STORE_BACKEND`        | `memory`                 | `memory` or `postgres`               |
    /// | `DATABASE_URL`         | —                        | Postgres connection string           |
    /// | `CORS_ALLOWED_ORIGINS` | `http://localhost:5173`  | comma-separated list, or `*` for any |
    pub fn from_env() -> Self {
        let listen_port: u16 = std::env::var("LEADNAV_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3001);

        let jwt_secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "leadnav-dev-secret".to_string());

        let store_backend = std::env::var("STORE_BACKEND")
            .map(|v| parse_backend(&v))
            .unwrap_or(StoreBackend::Memory);

        let database_url = std::env::var("DATABASE_URL").ok();

        let cors_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or_else(|_| parse_origins("http://localhost:5173"));

        Self {
            listen_port,
            jwt_secret,
            store_backend,
            database_url,
            cors_origins,
        }
    }
}

fn parse_backend(value: &str) -> StoreBackend {
    match value.trim().to_ascii_lowercase().as_str() {
        "postgres" | "postgresql" => StoreBackend::Postgres,
        _ => StoreBackend::Memory,
    }
}

fn parse_origins(value: &str) -> CorsOrigins {
    if value.trim() == "*" {
        return CorsOrigins::Any;
    }
    CorsOrigins::List(
        value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_defaults_to_memory_on_unknown_value() {
        assert_eq!(parse_backend("memory"), StoreBackend::Memory);
        assert_eq!(parse_backend("riak"), StoreBackend::Memory);
    }

    #[test]
    fn backend_accepts_postgres_spellings() {
        assert_eq!(parse_backend("postgres"), StoreBackend::Postgres);
        assert_eq!(parse_backend("PostgreSQL"), StoreBackend::Postgres);
    }

    #[test]
    fn star_means_any_origin() {
        assert_eq!(parse_origins("*"), CorsOrigins::Any);
    }

    #[test]
    fn origin_list_is_split_and_trimmed() {
        let parsed = parse_origins("http://localhost:5173, https://app.leadnav.io");
        assert_eq!(
            parsed,
            CorsOrigins::List(vec![
                "http://localhost:5173".to_string(),
                "https://app.leadnav.io".to_string(),
            ])
        );
    }

    #[test]
    fn empty_segments_are_dropped() {
        let parsed = parse_origins("http://localhost:5173,,");
        assert_eq!(
            parsed,
            CorsOrigins::List(vec!["http://localhost:5173".to_string()])
        );
    }
}
