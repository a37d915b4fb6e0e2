//! Artist-related models.

use serde::{Deserialize, Serialize};

use super::common::{largest, null_default, ExternalUrls, Followers, Image};

/// A full artist record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// Spotify artist ID.
    pub id: String,

    /// Artist name.
    pub name: String,

    /// Genres associated with the artist.
    #[serde(default, deserialize_with = "null_default")]
    pub genres: Vec<String>,

    /// Popularity from 0 to 100.
    #[serde(default, deserialize_with = "null_default")]
    pub popularity: u32,

    #[serde(default, deserialize_with = "null_default")]
    pub followers: Followers,

    /// Artist images in various sizes.
    #[serde(default, deserialize_with = "null_default")]
    pub images: Vec<Image>,

    /// Spotify URI of the artist.
    #[serde(default, deserialize_with = "null_default")]
    pub uri: String,

    #[serde(default, deserialize_with = "null_default")]
    pub external_urls: ExternalUrls,
}

impl Artist {
    /// Create a new artist with name and Spotify ID.
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, id: S2) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            ..Default::default()
        }
    }

    /// Get the largest image available.
    pub fn largest_image(&self) -> Option<&Image> {
        largest(&self.images)
    }

    /// Get all genres joined by a separator.
    pub fn genres_string(&self, separator: &str) -> String {
        self.genres.join(separator)
    }
}
