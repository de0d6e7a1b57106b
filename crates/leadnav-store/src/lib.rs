//! # LeadNav Store
//!
//! The per-user cookie credential store.
//!
//! One record per [`UserId`](leadnav_models::UserId), upsert on save,
//! idempotent delete. Two backends:
//!
//! - in-memory (default) — local development and tests
//! - PostgreSQL (feature `postgres`) — production
//!
//! The server owns a [`CookieStore`] trait object and passes it into the
//! handlers; there is no process-global connection state.

mod error;
mod memory;
mod traits;

#[cfg(feature = "postgres")]
mod postgres;

pub use error::StoreError;
pub use memory::MemoryCookieStore;
pub use traits::CookieStore;

#[cfg(feature = "postgres")]
pub use postgres::{CREATE_TABLE_SQL, PostgresCookieStore};
