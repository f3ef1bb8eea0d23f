//! Tukku Server — application entry point.

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tukku_auth::config::AuthConfig;
use tukku_auth::revocation::InMemoryRevocationStore;
use tukku_registry::{FileRegistry, LoginCodeMap};
use tukku_server::{AppState, ServerConfig, build_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("tukku_server=info".parse().unwrap())
                .add_directive("tukku_auth=info".parse().unwrap()),
        )
        .json()
        .init();

    if let Err(e) = run().await {
        error!("server failed: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();

    let codes = LoginCodeMap::parse(&config.login_codes)?;
    if codes.is_empty() {
        warn!("no login codes configured; every login will be rejected");
    }
    if config.signing_secret.is_none() {
        warn!("TUKKU_JWT_SECRET is not set; token issuance will fail");
    }

    let registry = FileRegistry::new(&config.config_dir, codes);
    let auth_config = AuthConfig {
        signing_secret: config.signing_secret.clone(),
        token_lifetime_secs: config.token_lifetime_secs,
        ..AuthConfig::default()
    };
    let state = AppState::new(
        registry,
        InMemoryRevocationStore::new(),
        auth_config,
        &config.cors_allow_origin,
    );
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, config_dir = %config.config_dir.display(), "tukku server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
