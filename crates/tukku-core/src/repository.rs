//! Repository trait definitions for data access abstraction.
//!
//! All operations are async. Implementations re-read their backing store on
//! every call — profiles and catalogs have no caching layer, so there is
//! nothing to invalidate.

use crate::error::TukkuResult;
use crate::models::catalog::CatalogRow;
use crate::models::client::ClientProfile;

/// Lookup of clients and their login codes.
pub trait ClientDirectory: Send + Sync {
    /// Exact-match lookup of a login code. An unknown code resolves to
    /// `Ok(None)`, never an error.
    fn resolve_login_code(
        &self,
        code: &str,
    ) -> impl Future<Output = TukkuResult<Option<String>>> + Send;

    /// Load the configuration record for `client_id`.
    fn get_profile(
        &self,
        client_id: &str,
    ) -> impl Future<Output = TukkuResult<ClientProfile>> + Send;

    /// All configured client profiles, sorted by id.
    fn list_profiles(&self) -> impl Future<Output = TukkuResult<Vec<ClientProfile>>> + Send;
}

/// Access to the raw per-client catalog rows.
pub trait CatalogSource: Send + Sync {
    /// Load the row set for `client_id`, or the shared default set when the
    /// client has no catalog of its own.
    fn load_catalog(
        &self,
        client_id: &str,
    ) -> impl Future<Output = TukkuResult<Vec<CatalogRow>>> + Send;
}

/// Record of tokens invalidated before their natural expiry.
pub trait RevocationStore: Send + Sync {
    /// Insert `token` into the revocation set. Idempotent.
    fn revoke(&self, token: &str) -> impl Future<Output = TukkuResult<()>> + Send;

    fn is_revoked(&self, token: &str) -> impl Future<Output = TukkuResult<bool>> + Send;
}
