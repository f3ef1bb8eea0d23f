//! Store-specific error types and conversions.

use tukku_core::error::TukkuError;

/// Store-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("No catalog source for client {client_id}")]
    MissingCatalog { client_id: String },

    #[error("Invalid login code map: {0}")]
    CodeMap(String),
}

impl From<StoreError> for TukkuError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => TukkuError::NotFound { entity, id },
            StoreError::MissingCatalog { client_id } => TukkuError::Misconfigured {
                reason: format!("no catalog source for client {client_id}"),
            },
            StoreError::CodeMap(message) => TukkuError::Misconfigured { reason: message },
            other => TukkuError::Store(other.to_string()),
        }
    }
}
