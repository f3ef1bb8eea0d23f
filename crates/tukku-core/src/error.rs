//! Error types for the tukku portal.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TukkuError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Server misconfiguration: {reason}")]
    Misconfigured { reason: String },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Cryptography error: {0}")]
    Crypto(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type TukkuResult<T> = Result<T, TukkuError>;
