//! # spotlens
//!
//! A Rust client for the parts of the Spotify Web API a listening-stats
//! front end needs: profile, top items, library lookups, search and
//! recommendations.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spotlens::{
//!     AudioFeature, MinMaxTarget, RecommendationRequest, RecommendationSeed, SpotifyClient,
//!     StaticToken, TrackFeatures,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let spotify = SpotifyClient::new(StaticToken::new("BQD..."))?;
//!
//!     let me = spotify.get_profile().await?;
//!     println!("Signed in as {}", me.name());
//!
//!     let (playlist, items) = spotify.get_playlist("37i9dQZF1DXcBWIGoYBM5M").await?;
//!     println!("{}: {} entries", playlist.name, items.len());
//!
//!     let request = RecommendationRequest::new(RecommendationSeed::new().genre("house"))
//!         .with_features(
//!             TrackFeatures::new().with(AudioFeature::Energy, MinMaxTarget::default().min(0.7)),
//!         );
//!     for track in spotify.generate_playlist(&request).await? {
//!         println!("{} - {}", track.artists_string(", "), track.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Tokens
//!
//! The client does not sign in or refresh anything. It asks a
//! [`TokenProvider`] for the current token before every request; see
//! [`SharedToken`] for a slot an external refresher can update.

pub mod api;
pub mod auth;
pub mod config;
pub mod converters;
pub mod error;
pub mod models;
pub mod query;
pub mod recommendations;

pub use api::{Endpoint, SpotifyClient};
pub use auth::{EnvToken, SharedToken, StaticToken, TokenProvider};
pub use config::ClientConfig;
pub use error::{Result, SpotifyError};
pub use models::{
    Artist, Paging, PlayHistory, Playlist, PlaylistItem, PrivateUser, RecentlyPlayed,
    Recommendations, SearchResult, Track,
};
pub use query::{PlaylistQuery, SearchQuery, TimeRange, TopItemsQuery};
pub use recommendations::{
    AudioFeature, MinMaxTarget, RecommendationRequest, RecommendationSeed, TrackFeatures,
};
