//! Cookie records and input validation.
//!
//! A user's LinkedIn session cookie is stored as a single opaque string,
//! at most one per [`UserId`]. Saving replaces the previous value in
//! place; there is no history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::user::UserId;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A full cookie record as held by the store.
///
/// `created_at` is set once at first insert and never changes; every
/// subsequent save for the same user replaces `cookie` and refreshes
/// `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CookieRecord {
    /// Owner of the record and unique lookup key.
    pub user_id: UserId,
    /// The stored cookie value, trimmed, never empty.
    pub cookie: String,
    /// Timestamp of the first save.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the most recent save.
    pub updated_at: DateTime<Utc>,
}

/// The subset of a record returned on lookup: the value and when it was
/// last written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCookie {
    /// The stored cookie value.
    pub cookie: String,
    /// Timestamp of the most recent save.
    pub updated_at: DateTime<Utc>,
}

/// Result of a save: whether the record was created or replaced, with
/// the timestamp relevant to that outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No record existed; one was created at this instant.
    Created {
        /// `created_at` of the new record.
        created_at: DateTime<Utc>,
    },
    /// A record existed; its value was replaced at this instant.
    Replaced {
        /// The refreshed `updated_at`.
        updated_at: DateTime<Utc>,
    },
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a cookie value from a request body and return the trimmed
/// string that should be stored.
///
/// Rejects a missing field and a value that is empty after trimming.
/// Validation happens before any storage call, so a rejected save never
/// creates or mutates a record.
///
/// # Examples
///
/// ```
/// use leadnav_models::validate_cookie;
///
/// assert_eq!(validate_cookie(Some("  li_at=abc  ")).unwrap(), "li_at=abc");
/// assert!(validate_cookie(Some("   ")).is_err());
/// assert!(validate_cookie(None).is_err());
/// ```
///
/// # Errors
///
/// [`ModelError::MissingCookie`] if the field was absent,
/// [`ModelError::EmptyCookie`] if it was blank after trimming.
pub fn validate_cookie(raw: Option<&str>) -> Result<String, ModelError> {
    let raw = raw.ok_or(ModelError::MissingCookie)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ModelError::EmptyCookie);
    }
    Ok(trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
