//! Authentication configuration.

/// Configuration for token issuance and verification.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared secret for HS256 signing. `None` means the server is
    /// misconfigured; token operations report it as such rather than
    /// falling back to a built-in value.
    pub signing_secret: Option<String>,
    /// Access token lifetime in seconds (default: 7200 = 2 hours).
    pub token_lifetime_secs: u64,
    /// JWT issuer (`iss` claim).
    pub issuer: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            signing_secret: None,
            token_lifetime_secs: 7_200,
            issuer: "tukku".into(),
        }
    }
}
