//! Server configuration from the process environment.

use std::env;
use std::path::PathBuf;

/// Runtime configuration for the portal server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Root of the configuration directory (`clients/`, `catalogs/`).
    pub config_dir: PathBuf,
    /// Raw `clientId:code` pairs for the login code map.
    pub login_codes: String,
    /// HS256 signing secret. Left unset, token issuance reports a
    /// misconfiguration instead of falling back to a built-in value.
    pub signing_secret: Option<String>,
    pub token_lifetime_secs: u64,
    /// Allowed CORS origin.
    pub cors_allow_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".into(),
            config_dir: PathBuf::from("./config"),
            login_codes: String::new(),
            signing_secret: None,
            token_lifetime_secs: 7_200,
            cors_allow_origin: "*".into(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from `TUKKU_*` environment variables; unset or
    /// empty variables keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: env_string("TUKKU_BIND_ADDR").unwrap_or(defaults.bind_addr),
            config_dir: env_string("TUKKU_CONFIG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.config_dir),
            login_codes: env_string("TUKKU_LOGIN_CODES").unwrap_or(defaults.login_codes),
            signing_secret: env_string("TUKKU_JWT_SECRET"),
            token_lifetime_secs: env_u64("TUKKU_TOKEN_LIFETIME_SECS", defaults.token_lifetime_secs),
            cors_allow_origin: env_string("TUKKU_CORS_ALLOW_ORIGIN")
                .unwrap_or(defaults.cors_allow_origin),
        }
    }
}

fn env_string(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
