//! Client configuration from the environment.
//!
//! Mirrors the variables the provider tooling around this library has always
//! used: `FABRIC_ENDPOINT`, `FABRIC_TOKEN`, `FABRIC_SSH_KEY`.

/// Orchestrator endpoint used when `FABRIC_ENDPOINT` is unset.
pub const DEFAULT_ENDPOINT: &str = "https://orchestrator.fabric-testbed.net";

/// Connection settings for the orchestrator.
///
/// The token is attached per request and never stored in any document sent
/// to the orchestrator.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub token: String,
    /// Default SSH public key applied when a creation request carries none.
    pub default_ssh_key: Option<String>,
}

impl Config {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            default_ssh_key: None,
        }
    }

    pub fn with_default_ssh_key(mut self, key: impl Into<String>) -> Self {
        self.default_ssh_key = Some(key.into());
        self
    }

    /// Read configuration from the environment. Empty values count as unset.
    pub fn from_env() -> Self {
        Self {
            endpoint: env_or("FABRIC_ENDPOINT", DEFAULT_ENDPOINT),
            token: std::env::var("FABRIC_TOKEN").unwrap_or_default(),
            default_ssh_key: std::env::var("FABRIC_SSH_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
