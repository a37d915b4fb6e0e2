//! Access token providers.
//!
//! The client never stores a token. It asks its [`TokenProvider`] right
//! before every request, so whatever refreshes the credential only has to
//! keep the provider up to date.

use std::sync::{Arc, RwLock};

use crate::error::{Result, SpotifyError};

/// Source of the bearer token attached to each request.
pub trait TokenProvider: Send + Sync {
    /// Current access token.
    fn access_token(&self) -> Result<String>;
}

impl<F> TokenProvider for F
where
    F: Fn() -> String + Send + Sync,
{
    fn access_token(&self) -> Result<String> {
        Ok(self())
    }
}

/// A token that never changes. Handy for scripts and tests.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn access_token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// A token slot updated by an external refresher.
///
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct SharedToken {
    inner: Arc<RwLock<Option<String>>>,
}

impl SharedToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token<S: Into<String>>(token: S) -> Self {
        let shared = Self::new();
        shared.set(token);
        shared
    }

    /// Replace the stored token.
    pub fn set<S: Into<String>>(&self, token: S) {
        let mut slot = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = Some(token.into());
    }

    /// Forget the stored token, e.g. after sign-out.
    pub fn clear(&self) {
        let mut slot = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = None;
    }
}

impl TokenProvider for SharedToken {
    fn access_token(&self) -> Result<String> {
        let slot = match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        slot.clone()
            .ok_or_else(|| SpotifyError::Token("no token has been set".to_string()))
    }
}

/// Reads the token from an environment variable on every request.
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    /// Variable read by [`EnvToken::default`].
    pub const DEFAULT_VAR: &'static str = "SPOTIFY_TOKEN";

    pub fn new<S: Into<String>>(var: S) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvToken {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VAR)
    }
}

impl TokenProvider for EnvToken {
    fn access_token(&self) -> Result<String> {
        match std::env::var(&self.var) {
            Ok(token) if !token.is_empty() => Ok(token),
            _ => Err(SpotifyError::Token(format!("{} is not set", self.var))),
        }
    }
}
