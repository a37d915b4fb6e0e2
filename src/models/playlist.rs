//! Playlist-related models.
//!
//! The playlist detail object only carries a reference to its tracks;
//! the entries themselves come from the `/tracks` sub-resource as
//! [`PlaylistItem`]s.

use serde::{Deserialize, Serialize};

use super::common::{largest, null_default, ExternalUrls, Image, PublicUser};
use super::track::Track;

/// Link to the tracks of a playlist plus their count.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistTracksRef {
    /// API link to the playlist's tracks.
    #[serde(default, deserialize_with = "null_default")]
    pub href: String,

    /// Number of tracks in the playlist.
    #[serde(default, deserialize_with = "null_default")]
    pub total: u32,
}

/// A user-curated playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Playlist {
    /// Spotify playlist ID.
    pub id: String,

    /// Playlist title.
    pub name: String,

    /// Playlist description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the playlist is public. `None` when Spotify does not say.
    #[serde(default)]
    pub public: Option<bool>,

    #[serde(default, deserialize_with = "null_default")]
    pub collaborative: bool,

    /// Playlist owner.
    #[serde(default, deserialize_with = "null_default")]
    pub owner: PublicUser,

    /// Track reference.
    #[serde(default, deserialize_with = "null_default")]
    pub tracks: PlaylistTracksRef,

    /// Playlist cover images.
    #[serde(default, deserialize_with = "null_default")]
    pub images: Vec<Image>,

    /// Version identifier of the playlist.
    #[serde(default, deserialize_with = "null_default")]
    pub snapshot_id: String,

    /// Spotify URI of the playlist.
    #[serde(default, deserialize_with = "null_default")]
    pub uri: String,

    #[serde(default, deserialize_with = "null_default")]
    pub external_urls: ExternalUrls,
}

impl Playlist {
    /// Get the number of tracks in the playlist.
    pub fn track_count(&self) -> u32 {
        self.tracks.total
    }

    /// Get the largest cover image available.
    pub fn largest_image(&self) -> Option<&Image> {
        largest(&self.images)
    }

    /// Owner's display name, falling back to the user ID.
    pub fn owner_name(&self) -> &str {
        self.owner
            .display_name
            .as_deref()
            .unwrap_or(self.owner.id.as_str())
    }
}

/// One entry of a playlist's track list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistItem {
    /// When the entry was added (ISO 8601).
    #[serde(default)]
    pub added_at: Option<String>,

    /// Who added the entry.
    #[serde(default)]
    pub added_by: Option<PublicUser>,

    /// Whether this is a local file.
    #[serde(default, deserialize_with = "null_default")]
    pub is_local: bool,

    /// The track. `None` for removed or unavailable content.
    #[serde(default)]
    pub track: Option<Track>,
}

/// Total duration of the playable entries, in milliseconds.
pub fn total_duration_ms(items: &[PlaylistItem]) -> u64 {
    items
        .iter()
        .filter_map(|i| i.track.as_ref())
        .map(|t| t.duration_ms)
        .sum()
}
