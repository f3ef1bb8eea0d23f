//! In-memory revocation set.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use tukku_core::error::{TukkuError, TukkuResult};
use tukku_core::repository::RevocationStore;

/// Process-local revocation set.
///
/// Insert-only and unbounded; entries last until process restart. Clones
/// share one underlying set, so a store handed to several request handlers
/// observes the same revocations.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRevocationStore {
    inner: Arc<RwLock<HashSet<String>>>,
}

impl InMemoryRevocationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RevocationStore for InMemoryRevocationStore {
    async fn revoke(&self, token: &str) -> TukkuResult<()> {
        let mut set = self
            .inner
            .write()
            .map_err(|_| TukkuError::Internal("revocation set lock poisoned".into()))?;
        set.insert(token.to_string());
        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> TukkuResult<bool> {
        let set = self
            .inner
            .read()
            .map_err(|_| TukkuError::Internal("revocation set lock poisoned".into()))?;
        Ok(set.contains(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn revoked_token_is_reported() {
        let store = InMemoryRevocationStore::new();
        assert!(!store.is_revoked("t1").await.unwrap());
        store.revoke("t1").await.unwrap();
        assert!(store.is_revoked("t1").await.unwrap());
        assert!(!store.is_revoked("t2").await.unwrap());
    }

    #[tokio::test]
    async fn revoke_is_idempotent() {
        let store = InMemoryRevocationStore::new();
        store.revoke("t1").await.unwrap();
        store.revoke("t1").await.unwrap();
        assert!(store.is_revoked("t1").await.unwrap());
    }

    #[tokio::test]
    async fn clones_share_the_set() {
        let store = InMemoryRevocationStore::new();
        let other = store.clone();
        store.revoke("t1").await.unwrap();
        assert!(other.is_revoked("t1").await.unwrap());
    }
}
