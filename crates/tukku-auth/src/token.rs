//! HS256 access token issuance and verification.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;

/// JWT claims embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Authenticated client id.
    #[serde(rename = "clientId")]
    pub client_id: String,
    /// Issuer.
    pub iss: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
    /// Unique token ID (UUID string).
    pub jti: String,
}

/// Issue a signed HS256 access token bound to `client_id`.
///
/// Fails with [`AuthError::MissingSecret`] when no signing secret is
/// configured — a server misconfiguration, distinct from any caller error.
pub fn issue_access_token(client_id: &str, config: &AuthConfig) -> Result<String, AuthError> {
    let secret = config.signing_secret.as_deref().ok_or(AuthError::MissingSecret)?;

    let now = Utc::now().timestamp();
    let claims = AccessTokenClaims {
        client_id: client_id.to_string(),
        iss: config.issuer.clone(),
        iat: now,
        exp: now + config.token_lifetime_secs as i64,
        jti: Uuid::new_v4().to_string(),
    };

    let key = EncodingKey::from_secret(secret.as_bytes());
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &key)
        .map_err(|e| AuthError::Crypto(format!("JWT encode: {e}")))
}

/// Decode and verify an HS256 access token.
///
/// Expiry is checked with zero leeway: a token is rejected the moment its
/// `exp` claim passes. Malformed, tampered, and mis-issued tokens all come
/// back as [`AuthError::TokenInvalid`]; only an expired signature is
/// distinguished, and that distinction stays internal to this crate.
pub fn decode_access_token(
    token: &str,
    config: &AuthConfig,
) -> Result<AccessTokenClaims, AuthError> {
    let secret = config.signing_secret.as_deref().ok_or(AuthError::MissingSecret)?;
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_issuer(&[&config.issuer]);
    validation.set_required_spec_claims(&["exp", "iat", "iss"]);

    jsonwebtoken::decode::<AccessTokenClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::TokenInvalid(e.to_string()),
        })
}
