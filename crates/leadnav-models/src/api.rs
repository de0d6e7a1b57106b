//! The REST response envelope and its payloads.
//!
//! Every LeadNav endpoint answers with the same envelope:
//!
//! ```json
//! { "success": true, "message": "Cookie saved successfully", "data": { … } }
//! ```
//!
//! `message` and `data` are omitted when absent. Payload structs use
//! camelCase on the wire (`userId`, `createdAt`, `updatedAt`) — the
//! dashboard frontend depends on those exact names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::UserId;

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// The `{success, message, data}` envelope wrapping every response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Human-readable outcome description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Endpoint-specific payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// A success envelope with a message and a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    /// A success envelope carrying only a payload.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// A success envelope carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    /// A failure envelope with a message and no payload.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// `data` of a successful cookie save.
///
/// Exactly one of `created_at` / `updated_at` is present, matching the
/// outcome; the cookie value itself is never echoed back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CookieSaved {
    /// Owner of the record.
    pub user_id: UserId,
    /// Present when the save created a new record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Present when the save replaced an existing record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// `data` of a successful cookie fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CookieData {
    /// The stored cookie value, byte-for-byte as last written.
    pub cookie: String,
    /// When the value was last written.
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_omits_absent_fields() {
        let resp: ApiResponse<CookieData> = ApiResponse::message("Cookie deleted successfully");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            json!({ "success": true, "message": "Cookie deleted successfully" })
        );
    }

    #[test]
    fn saved_payload_uses_camel_case() {
        let now = Utc::now();
        let resp = ApiResponse::ok(
            "Cookie saved successfully",
            CookieSaved {
                user_id: UserId::new("u1"),
                created_at: Some(now),
                updated_at: None,
            },
        );
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["data"]["userId"], "u1");
        assert!(value["data"].get("createdAt").is_some());
        assert!(value["data"].get("updatedAt").is_none());
    }

    #[test]
    fn cookie_data_roundtrip() {
        let data = CookieData {
            cookie: "li_at=abc".into(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&ApiResponse::data(data.clone())).unwrap();
        let back: ApiResponse<CookieData> = serde_json::from_str(&json).unwrap();
        assert!(back.success);
        assert_eq!(back.data.unwrap(), data);
    }

    #[test]
    fn error_envelope_shape() {
        let resp: ApiResponse<CookieData> = ApiResponse::error("No cookie found for this user");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "No cookie found for this user");
    }
}
