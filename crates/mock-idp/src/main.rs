//! Mock identity provider for local development.
//!
//! Mints HS256 bearer tokens that `leadnav-server` accepts, using the
//! same `JWT_SECRET` the server verifies with. This is a dev stand-in
//! for the real identity system — never deploy it.

use axum::{routing::post, Json, Router};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::OnceLock;

/// Token lifetime handed out to dev callers.
const TOKEN_TTL_SECS: i64 = 3600;

static ENCODING_KEY: OnceLock<EncodingKey> = OnceLock::new();

#[tokio::main]
async fn main() {
    let secret =
        std::env::var("JWT_SECRET").unwrap_or_else(|_| "leadnav-dev-secret".to_string());
    ENCODING_KEY
        .set(EncodingKey::from_secret(secret.as_bytes()))
        .ok()
        .unwrap();

    let port: u16 = std::env::var("MOCK_IDP_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(4000);

    let app = Router::new().route("/token", post(token));

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    println!("MOCK-IDP: Listening on http://localhost:{port}");
    println!("MOCK-IDP: POST /token {{\"userId\": \"...\"}} to mint a dev bearer token");
    axum::serve(listener, app).await.unwrap();
}

#[derive(Deserialize)]
struct TokenRequest {
    #[serde(rename = "userId")]
    user_id: String,
}

#[derive(Serialize)]
struct TokenClaims {
    sub: String,
    jti: String,
    iat: i64,
    exp: i64,
}

async fn token(Json(req): Json<TokenRequest>) -> Json<Value> {
    println!("MOCK-IDP: Token request for userId='{}'", req.user_id);

    let now = Utc::now();
    let claims = TokenClaims {
        sub: req.user_id,
        jti: uuid::Uuid::new_v4().to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
    };

    let key = ENCODING_KEY.get().unwrap();
    let access_token = encode(&Header::default(), &claims, key).unwrap();

    Json(json!({
        "access_token": access_token,
        "token_type": "Bearer",
        "expires_in": TOKEN_TTL_SECS
    }))
}
