//! Bearer-token verification and the [`AuthUser`] extractor.
//!
//! Tokens are HS256 JWTs signed with the shared `JWT_SECRET`; the token
//! issuer lives outside this service (see the `mock-idp` crate for a dev
//! stand-in). Historically tokens carried the user identifier in
//! different claims depending on the issuer version, so resolution falls
//! back through `userId`, `id`, `_id`, and finally the standard `sub`.
//!
//! The resolved [`UserId`] is the only user identity the handlers ever
//! see — a user id arriving in a request body or query string is never
//! accepted.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use leadnav_models::UserId;
use serde::Deserialize;

use crate::AppState;
use crate::error::ApiError;

// ---------------------------------------------------------------------------
// Verifier
// ---------------------------------------------------------------------------

/// Verifies bearer tokens and resolves the caller's [`UserId`].
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    /// Create a verifier for the given HS256 secret.
    ///
    /// Expiry (`exp`) is required and checked; everything else about the
    /// token is opaque to this service.
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Verify a token and extract the user identifier claim.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] if the signature is invalid, the token
    /// is expired, or no non-empty user identifier claim is present.
    pub fn verify(&self, token: &str) -> Result<UserId, ApiError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".into()))?;

        data.claims
            .resolve_user()
            .ok_or_else(|| ApiError::Unauthorized("Invalid token structure".into()))
    }
}

/// The claims LeadNav cares about. All identifier claims are optional;
/// at least one must be present and non-empty.
#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default, rename = "userId")]
    user_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    legacy_id: Option<String>,
    #[serde(default)]
    sub: Option<String>,
}

impl Claims {
    /// First non-empty identifier in precedence order.
    fn resolve_user(&self) -> Option<UserId> {
        [&self.user_id, &self.id, &self.legacy_id, &self.sub]
            .into_iter()
            .flatten()
            .find(|value| !value.is_empty())
            .map(|value| UserId::new(value))
    }
}

// ---------------------------------------------------------------------------
// Extractor
// ---------------------------------------------------------------------------

/// The authenticated caller, extracted from the `Authorization` header.
///
/// Handlers that take an `AuthUser` argument are auth-gated: requests
/// without a valid bearer token are rejected with 401 before the handler
/// body runs.
pub struct AuthUser(pub UserId);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".into()))?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".into()))?;

        let user = state.verifier.verify(token)?;
        Ok(AuthUser(user))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::Serialize;

    const SECRET: &str = "test-secret";

    #[derive(Serialize)]
    struct TestClaims<'a> {
        #[serde(skip_serializing_if = "Option::is_none", rename = "userId")]
        user_id: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        sub: Option<&'a str>,
        exp: i64,
    }

    fn sign(claims: &TestClaims<'_>, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[test]
    fn verifies_sub_claim() {
        let verifier = JwtVerifier::new(SECRET);
        let token = sign(
            &TestClaims {
                user_id: None,
                id: None,
                sub: Some("u1"),
                exp: future_exp(),
            },
            SECRET,
        );
        assert_eq!(verifier.verify(&token).unwrap(), UserId::new("u1"));
    }

    #[test]
    fn user_id_claim_takes_precedence_over_sub() {
        let verifier = JwtVerifier::new(SECRET);
        let token = sign(
            &TestClaims {
                user_id: Some("primary"),
                id: Some("secondary"),
                sub: Some("fallback"),
                exp: future_exp(),
            },
            SECRET,
        );
        assert_eq!(verifier.verify(&token).unwrap(), UserId::new("primary"));
    }

    #[test]
    fn empty_identifier_falls_through_to_next_claim() {
        let verifier = JwtVerifier::new(SECRET);
        let token = sign(
            &TestClaims {
                user_id: Some(""),
                id: Some("real-id"),
                sub: None,
                exp: future_exp(),
            },
            SECRET,
        );
        assert_eq!(verifier.verify(&token).unwrap(), UserId::new("real-id"));
    }

    #[test]
    fn token_without_identifier_is_rejected() {
        let verifier = JwtVerifier::new(SECRET);
        let token = sign(
            &TestClaims {
                user_id: None,
                id: None,
                sub: None,
                exp: future_exp(),
            },
            SECRET,
        );
        let err = verifier.verify(&token).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let verifier = JwtVerifier::new(SECRET);
        let token = sign(
            &TestClaims {
                user_id: None,
                id: None,
                sub: Some("u1"),
                exp: future_exp(),
            },
            "some-other-secret",
        );
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let verifier = JwtVerifier::new(SECRET);
        let token = sign(
            &TestClaims {
                user_id: None,
                id: None,
                sub: Some("u1"),
                // Well past the default validation leeway.
                exp: chrono::Utc::now().timestamp() - 3600,
            },
            SECRET,
        );
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let verifier = JwtVerifier::new(SECRET);
        assert!(verifier.verify("not-a-jwt").is_err());
    }
}
