//! Response wrappers for search, listening history and recommendations.

use serde::{Deserialize, Serialize};

use super::artist::Artist;
use super::common::{null_default, Paging};
use super::playlist::Playlist;
use super::track::Track;

/// Result of a search over artists, tracks and playlists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "null_default")]
    pub tracks: Paging<Track>,

    #[serde(default, deserialize_with = "null_default")]
    pub artists: Paging<Artist>,

    /// Spotify may return `null` entries for playlists it cannot show.
    #[serde(default)]
    pub playlists: Paging<Option<Playlist>>,
}

impl SearchResult {
    /// Playlists that were actually returned.
    pub fn playlists(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.items.iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.items.is_empty()
            && self.artists.items.is_empty()
            && self.playlists().next().is_none()
    }
}

/// One entry of the listening history.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlayHistory {
    pub track: Track,

    /// When the track was played (ISO 8601).
    #[serde(default)]
    pub played_at: Option<String>,
}

/// Body of `/me/player/recently-played`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecentlyPlayed {
    #[serde(default, deserialize_with = "null_default")]
    pub items: Vec<PlayHistory>,

    #[serde(default)]
    pub next: Option<String>,

    #[serde(default, deserialize_with = "null_default")]
    pub limit: u32,
}

impl RecentlyPlayed {
    /// The played tracks, most recent first as returned.
    pub fn into_tracks(self) -> Vec<Track> {
        self.items.into_iter().map(|item| item.track).collect()
    }
}

/// A seed as echoed back by the recommendations endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSeedInfo {
    pub id: String,

    /// "ARTIST", "TRACK" or "GENRE".
    #[serde(rename = "type", default)]
    pub type_: String,

    #[serde(default, deserialize_with = "null_default")]
    pub initial_pool_size: u32,

    #[serde(default, deserialize_with = "null_default")]
    pub after_filtering_size: u32,
}

/// Body of `/recommendations`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Recommendations {
    #[serde(default, deserialize_with = "null_default")]
    pub seeds: Vec<RecommendationSeedInfo>,

    #[serde(default, deserialize_with = "null_default")]
    pub tracks: Vec<Track>,
}
