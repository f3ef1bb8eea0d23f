//! Shared state for route handlers.

use std::sync::Arc;
use std::time::Instant;

use tukku_auth::config::AuthConfig;
use tukku_auth::service::AuthService;
use tukku_core::repository::{CatalogSource, ClientDirectory, RevocationStore};

/// Shared state for the portal's route handlers.
pub struct AppState<D, R>
where
    D: ClientDirectory + CatalogSource + Clone,
    R: RevocationStore,
{
    pub registry: D,
    pub auth: Arc<AuthService<D, R>>,
    pub cors_allow_origin: Arc<str>,
    pub started_at: Instant,
}

impl<D, R> AppState<D, R>
where
    D: ClientDirectory + CatalogSource + Clone,
    R: RevocationStore,
{
    pub fn new(registry: D, revocations: R, auth_config: AuthConfig, cors_allow_origin: &str) -> Self {
        let auth = Arc::new(AuthService::new(registry.clone(), revocations, auth_config));
        Self {
            registry,
            auth,
            cors_allow_origin: Arc::from(cors_allow_origin),
            started_at: Instant::now(),
        }
    }
}

// Manual Clone: avoid derive adding an `R: Clone` bound.
impl<D, R> Clone for AppState<D, R>
where
    D: ClientDirectory + CatalogSource + Clone,
    R: RevocationStore,
{
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            auth: self.auth.clone(),
            cors_allow_origin: self.cors_allow_origin.clone(),
            started_at: self.started_at,
        }
    }
}
