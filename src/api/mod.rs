//! Spotify Web API access.
//!
//! - [`SpotifyClient`]: one method per remote resource
//! - [`Endpoint`]: path and payload field of every resource

pub mod client;
pub mod endpoint;

pub use client::SpotifyClient;
pub use endpoint::Endpoint;
