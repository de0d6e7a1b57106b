//! Store error type.
//!
//! Only backend failures live here. "No record for this user" is part of
//! the normal result shape (`Option` / `bool`), never an error.

/// A failure of the underlying storage backend.
///
/// The server logs the detail and reports an opaque message to the
/// caller; the variants keep enough context for the log line.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached or the query failed.
    #[error("storage backend error: {0}")]
    Backend(String),
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}
