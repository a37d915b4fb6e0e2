//! Data models for Spotify Web API responses.
//!
//! These mirror the JSON objects Spotify returns, declaring only the
//! fields this crate reads. Unknown fields are ignored and most known
//! ones tolerate being absent.

pub mod artist;
pub mod common;
pub mod playlist;
pub mod search;
pub mod track;
pub mod user;

// Re-exports for convenience
pub use artist::Artist;
pub use common::{ExternalUrls, Followers, Image, Paging, PublicUser};
pub use playlist::{Playlist, PlaylistItem, PlaylistTracksRef};
pub use search::{PlayHistory, RecentlyPlayed, RecommendationSeedInfo, Recommendations, SearchResult};
pub use track::{SimplifiedAlbum, SimplifiedArtist, Track};
pub use user::PrivateUser;
