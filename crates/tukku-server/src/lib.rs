//! Tukku Server — HTTP surface for the wholesale portal.
//!
//! Handlers are orchestration only: parse input, authenticate when
//! required, call into the directory / catalog / pricing layers, format
//! the response. Every failure is converted to the `{"error": …}`
//! envelope at this boundary.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use routes::build_router;
pub use state::AppState;
