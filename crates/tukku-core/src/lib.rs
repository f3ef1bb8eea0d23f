//! Tukku Core — domain models, error taxonomy, repository traits, and the
//! catalog pricing/stock transform.
//!
//! These are the types shared across all crates. Nothing in here performs
//! I/O; the storage and HTTP crates plug into the traits defined in
//! [`repository`].

pub mod error;
pub mod models;
pub mod pricing;
pub mod repository;

pub use error::{TukkuError, TukkuResult};
pub use models::catalog::CatalogRow;
pub use models::client::ClientProfile;
pub use models::product::Product;
pub use pricing::compute_catalog;
