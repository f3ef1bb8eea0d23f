//! Authentication error types.

use thiserror::Error;
use tukku_core::error::TukkuError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid access code")]
    InvalidCode,

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("token has been revoked")]
    TokenRevoked,

    #[error("no signing secret configured")]
    MissingSecret,

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for TukkuError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCode
            | AuthError::TokenExpired
            | AuthError::TokenInvalid(_)
            | AuthError::TokenRevoked => TukkuError::AuthenticationFailed {
                reason: err.to_string(),
            },
            AuthError::MissingSecret => TukkuError::Misconfigured {
                reason: err.to_string(),
            },
            AuthError::Crypto(msg) => TukkuError::Crypto(msg),
        }
    }
}
