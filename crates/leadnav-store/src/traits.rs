//! Cookie store trait definition.

use async_trait::async_trait;
use leadnav_models::{SaveOutcome, StoredCookie, UserId};

use crate::error::StoreError;

/// Storage backend abstraction for per-user cookie records.
///
/// Implementations must guarantee at most one record per user: `save`
/// is an atomic upsert keyed by `user_id`, so concurrent saves for the
/// same user resolve to a single record with the last write winning.
/// No cross-user coordination is required — records for different users
/// are fully independent.
///
/// Absence of a record is a normal outcome, not an error: `get` returns
/// `None` and `delete` returns `false`. [`StoreError`] is reserved for
/// backend failures.
#[async_trait]
pub trait CookieStore: Send + Sync {
    /// Insert or replace the cookie for `user_id`.
    ///
    /// Creating a record sets both timestamps; replacing keeps
    /// `created_at` and refreshes `updated_at`. The caller has already
    /// validated and trimmed `cookie` — it is never empty here.
    async fn save(&self, user_id: &UserId, cookie: &str) -> Result<SaveOutcome, StoreError>;

    /// Look up the cookie for `user_id`.
    async fn get(&self, user_id: &UserId) -> Result<Option<StoredCookie>, StoreError>;

    /// Remove the cookie for `user_id`, returning whether a record
    /// existed. Deleting an absent record is well-defined and returns
    /// `false`.
    async fn delete(&self, user_id: &UserId) -> Result<bool, StoreError>;

    /// Backend name for startup logging.
    fn backend_name(&self) -> &'static str;
}
