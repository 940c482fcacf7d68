//! # Session Store
//!
//! The bearer token and its expiry on top of [`KeyValueStorage`]. Reads go to
//! storage every time so the request interceptor always sees the latest
//! token; there is no in-memory copy to drift.
//!
//! Expiry is checked passively: nothing refreshes a token, the bridge simply
//! re-runs the init-data exchange when the stored one has lapsed.

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use crate::core::error::Result;
use crate::services::storage::{KeyValueStorage, AUTH_TOKEN_EXPIRY_KEY, AUTH_TOKEN_KEY};

/// Sessions without a server-provided expiry are assumed valid this long.
const DEFAULT_SESSION_DAYS: i64 = 30;

/// Persisted session token access.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// The stored bearer token, if any. Presence alone says nothing about
    /// validity; see [`SessionStore::has_valid_token`].
    pub fn token(&self) -> Option<String> {
        self.storage.get(AUTH_TOKEN_KEY)
    }

    /// The stored expiry, if present and parseable.
    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        self.storage
            .get(AUTH_TOKEN_EXPIRY_KEY)
            .and_then(|raw| raw.parse().ok())
    }

    /// Persist a new session. A missing expiry defaults to 30 days out.
    pub fn store(&self, token: &str, expires_at: Option<DateTime<Utc>>) -> Result<()> {
        let expiry = expires_at.unwrap_or_else(|| Utc::now() + Duration::days(DEFAULT_SESSION_DAYS));
        self.storage.set(AUTH_TOKEN_KEY, token)?;
        self.storage
            .set(AUTH_TOKEN_EXPIRY_KEY, &expiry.to_rfc3339())?;
        Ok(())
    }

    /// Drop the session. Both keys are removed.
    pub fn clear(&self) -> Result<()> {
        self.storage.remove(AUTH_TOKEN_KEY)?;
        self.storage.remove(AUTH_TOKEN_EXPIRY_KEY)?;
        Ok(())
    }

    /// Whether a token exists and has not expired as of `now`.
    ///
    /// A token without a readable expiry counts as invalid so a corrupt
    /// expiry forces a fresh exchange rather than an unauthorized request.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        match (self.token(), self.expiry()) {
            (Some(_), Some(expiry)) => expiry > now,
            _ => false,
        }
    }

    /// [`SessionStore::is_valid_at`] against the current time.
    pub fn has_valid_token(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryStorage;

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_store_persists_token_and_expiry() {
        let session = store();
        let expiry = "2025-06-01T00:00:00Z".parse().unwrap();

        session.store("jwt-token", Some(expiry)).unwrap();

        assert_eq!(session.token().as_deref(), Some("jwt-token"));
        assert_eq!(session.expiry(), Some(expiry));
    }

    #[test]
    fn test_missing_expiry_defaults_forward() {
        let session = store();
        session.store("jwt-token", None).unwrap();

        let expiry = session.expiry().unwrap();
        assert!(expiry > Utc::now() + Duration::days(29));
        assert!(session.has_valid_token());
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let session = store();
        session.store("jwt-token", None).unwrap();
        session.clear().unwrap();

        assert_eq!(session.token(), None);
        assert_eq!(session.expiry(), None);
        assert!(!session.has_valid_token());
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let session = store();
        let past = "2020-01-01T00:00:00Z".parse().unwrap();
        session.store("old-jwt", Some(past)).unwrap();

        assert!(!session.has_valid_token());
        // The token itself is still readable; only validity is gone
        assert_eq!(session.token().as_deref(), Some("old-jwt"));
    }

    #[test]
    fn test_token_without_expiry_key_is_invalid() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(AUTH_TOKEN_KEY, "orphan-jwt").unwrap();
        let session = SessionStore::new(storage);

        assert!(!session.has_valid_token());
    }
}
