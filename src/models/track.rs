//! Track-related models.
//!
//! This module contains models for representing tracks and their
//! nested artist/album information.

use serde::{Deserialize, Serialize};

use super::common::{largest, null_default, ExternalUrls, Image};

/// Artist when nested inside a track or album.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SimplifiedArtist {
    /// Spotify artist ID.
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,

    /// Artist name.
    pub name: String,

    /// Spotify URI of the artist.
    #[serde(default, deserialize_with = "null_default")]
    pub uri: String,

    #[serde(default, deserialize_with = "null_default")]
    pub external_urls: ExternalUrls,
}

impl SimplifiedArtist {
    /// Create a new artist with name and Spotify ID.
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, id: S2) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

/// Album when nested inside a track.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SimplifiedAlbum {
    /// Spotify album ID.
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,

    /// Album title.
    pub name: String,

    /// Album type: "album", "single", or "compilation".
    #[serde(default, deserialize_with = "null_default")]
    pub album_type: String,

    /// Release date, precision varies ("2020", "2020-05", "2020-05-15").
    #[serde(default, deserialize_with = "null_default")]
    pub release_date: String,

    /// Total number of tracks in the album.
    #[serde(default, deserialize_with = "null_default")]
    pub total_tracks: u32,

    /// Cover images in various sizes.
    #[serde(default, deserialize_with = "null_default")]
    pub images: Vec<Image>,

    /// Album artists.
    #[serde(default, deserialize_with = "null_default")]
    pub artists: Vec<SimplifiedArtist>,

    /// Spotify URI of the album.
    #[serde(default, deserialize_with = "null_default")]
    pub uri: String,
}

impl SimplifiedAlbum {
    /// Get the largest cover available.
    pub fn largest_image(&self) -> Option<&Image> {
        largest(&self.images)
    }

    /// Year part of the release date.
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.split('-').next()?.parse().ok()
    }
}

/// A full track record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// Spotify track ID. Absent for local files.
    #[serde(default)]
    pub id: Option<String>,

    /// Track title.
    pub name: String,

    /// Duration in milliseconds.
    #[serde(default, deserialize_with = "null_default")]
    pub duration_ms: u64,

    /// Whether the track has explicit content.
    #[serde(default, deserialize_with = "null_default")]
    pub explicit: bool,

    /// Popularity from 0 to 100.
    #[serde(default, deserialize_with = "null_default")]
    pub popularity: u32,

    /// Disc number (1-indexed).
    #[serde(default, deserialize_with = "null_default")]
    pub disc_number: u32,

    /// Track number on the disc (1-indexed).
    #[serde(default, deserialize_with = "null_default")]
    pub track_number: u32,

    /// 30 second preview, when available.
    #[serde(default)]
    pub preview_url: Option<String>,

    /// Album containing this track.
    #[serde(default)]
    pub album: Option<SimplifiedAlbum>,

    /// Artists who performed this track.
    #[serde(default, deserialize_with = "null_default")]
    pub artists: Vec<SimplifiedArtist>,

    /// Spotify URI of the track.
    #[serde(default, deserialize_with = "null_default")]
    pub uri: String,

    #[serde(default, deserialize_with = "null_default")]
    pub external_urls: ExternalUrls,
}

impl Track {
    /// Get the primary artist name.
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(|a| a.name.as_str())
    }

    /// Get all artist names joined by a separator.
    pub fn artists_string(&self, separator: &str) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Get duration formatted as MM:SS.
    pub fn duration_formatted(&self) -> String {
        let total_seconds = self.duration_ms / 1000;
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }

    /// Get the album cover, preferring the largest size.
    pub fn cover(&self) -> Option<&Image> {
        self.album.as_ref().and_then(|a| a.largest_image())
    }
}
