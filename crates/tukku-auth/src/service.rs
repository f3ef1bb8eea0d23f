//! Authentication service — login, request authentication, and logout.

use tracing::info;
use tukku_core::error::{TukkuError, TukkuResult};
use tukku_core::repository::{ClientDirectory, RevocationStore};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::token::{self, AccessTokenClaims};

/// Successful login result.
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed access token.
    pub token: String,
    pub client_id: String,
    /// Presentation name from the client's profile.
    pub client_name: String,
    /// Token lifetime in seconds.
    pub expires_in: u64,
}

/// Authentication service.
///
/// Generic over the client directory and revocation store so the auth layer
/// has no dependency on the storage crate.
pub struct AuthService<D: ClientDirectory, R: RevocationStore> {
    directory: D,
    revocations: R,
    config: AuthConfig,
}

impl<D: ClientDirectory, R: RevocationStore> AuthService<D, R> {
    pub fn new(directory: D, revocations: R, config: AuthConfig) -> Self {
        Self {
            directory,
            revocations,
            config,
        }
    }

    /// Exchange a login code for a signed access token.
    pub async fn login(&self, code: &str) -> TukkuResult<LoginOutput> {
        let client_id = self
            .directory
            .resolve_login_code(code)
            .await?
            .ok_or(AuthError::InvalidCode)?;

        // A resolvable code must point at an existing record; a miss here is
        // a configuration defect, not a caller error.
        let profile = match self.directory.get_profile(&client_id).await {
            Ok(profile) => profile,
            Err(TukkuError::NotFound { .. }) => {
                return Err(TukkuError::Misconfigured {
                    reason: format!("login code maps to unknown client {client_id}"),
                });
            }
            Err(e) => return Err(e),
        };

        let token = token::issue_access_token(&client_id, &self.config)?;
        info!(client_id = %client_id, "login code accepted");

        Ok(LoginOutput {
            token,
            client_id,
            client_name: profile.display_name,
            expires_in: self.config.token_lifetime_secs,
        })
    }

    /// Verify a bearer token: signature, expiry, issuer, and revocation.
    pub async fn authenticate(&self, token: &str) -> TukkuResult<AccessTokenClaims> {
        let claims = token::decode_access_token(token, &self.config)?;
        if self.revocations.is_revoked(token).await? {
            return Err(AuthError::TokenRevoked.into());
        }
        Ok(claims)
    }

    /// Revoke a valid token. Revoking the same token again succeeds.
    pub async fn logout(&self, token: &str) -> TukkuResult<String> {
        let claims = token::decode_access_token(token, &self.config)?;
        self.revocations.revoke(token).await?;
        info!(client_id = %claims.client_id, "token revoked");
        Ok(claims.client_id)
    }
}
