//! In-memory cookie store.
//!
//! The default backend for local development and the backend used by the
//! HTTP integration tests. Contents are lost on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use leadnav_models::{CookieRecord, SaveOutcome, StoredCookie, UserId};
use parking_lot::RwLock;

use crate::error::StoreError;
use crate::traits::CookieStore;

/// A `HashMap`-backed [`CookieStore`].
///
/// The map is guarded by a single `RwLock`; entries for the same user
/// are therefore replaced atomically, which is all the upsert contract
/// requires.
#[derive(Default)]
pub struct MemoryCookieStore {
    records: RwLock<HashMap<UserId, CookieRecord>>,
}

impl MemoryCookieStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held. Used by tests.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl CookieStore for MemoryCookieStore {
    async fn save(&self, user_id: &UserId, cookie: &str) -> Result<SaveOutcome, StoreError> {
        let now = Utc::now();
        let mut records = self.records.write();

        match records.get_mut(user_id) {
            Some(existing) => {
                existing.cookie = cookie.to_string();
                existing.updated_at = now;
                Ok(SaveOutcome::Replaced { updated_at: now })
            }
            None => {
                records.insert(
                    user_id.clone(),
                    CookieRecord {
                        user_id: user_id.clone(),
                        cookie: cookie.to_string(),
                        created_at: now,
                        updated_at: now,
                    },
                );
                Ok(SaveOutcome::Created { created_at: now })
            }
        }
    }

    async fn get(&self, user_id: &UserId) -> Result<Option<StoredCookie>, StoreError> {
        let records = self.records.read();
        Ok(records.get(user_id).map(|record| StoredCookie {
            cookie: record.cookie.clone(),
            updated_at: record.updated_at,
        }))
    }

    async fn delete(&self, user_id: &UserId) -> Result<bool, StoreError> {
        Ok(self.records.write().remove(user_id).is_some())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
