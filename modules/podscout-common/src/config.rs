use std::env;

/// Runtime configuration loaded from environment variables. Credentials are
/// injected here, never hardcoded in adapter code.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the Spotify Web API. The Spotify adapter is only
    /// registered when this is present.
    pub spotify_access_token: Option<String>,
    /// Market parameter sent with Spotify queries.
    pub spotify_market: String,
    /// Maximum items requested per provider call.
    pub result_limit: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            spotify_access_token: env::var("SPOTIFY_ACCESS_TOKEN")
                .ok()
                .filter(|token| !token.is_empty()),
            spotify_market: env::var("SPOTIFY_MARKET").unwrap_or_else(|_| "US".to_string()),
            result_limit: env::var("PODSCOUT_RESULT_LIMIT")
                .unwrap_or_else(|_| "50".to_string())
                .parse()
                .expect("PODSCOUT_RESULT_LIMIT must be a number"),
        }
    }

    /// Log the loaded configuration with secrets redacted.
    pub fn log_redacted(&self) {
        tracing::info!(
            spotify = self.spotify_access_token.is_some(),
            market = self.spotify_market.as_str(),
            limit = self.result_limit,
            "Configuration loaded"
        );
    }
}
