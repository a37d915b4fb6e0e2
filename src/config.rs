//! Client configuration.
//!
//! Values come from code, or from the environment via [`ClientConfig::from_env`]:
//!
//! - `SPOTIFY_API_URL`: base URL of the Web API
//! - `SPOTIFY_MARKET`: market used for artist top tracks

use std::env;

/// Base URL of the Spotify Web API.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Market used for an artist's top tracks.
pub const DEFAULT_MARKET: &str = "US";

/// Settings for a [`SpotifyClient`](crate::SpotifyClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,

    /// ISO 3166-1 alpha-2 country code for market-bound lookups.
    pub market: String,

    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            market: DEFAULT_MARKET.to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by `SPOTIFY_API_URL` and `SPOTIFY_MARKET` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = non_empty_var("SPOTIFY_API_URL") {
            config.base_url = url;
        }
        if let Some(market) = non_empty_var("SPOTIFY_MARKET") {
            config.market = market;
        }
        config
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_market<S: Into<String>>(mut self, market: S) -> Self {
        self.market = market.into();
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
