//! Common types shared across all models.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a field that Spotify may send as `null`, falling back to
/// the type's default. Pair with `#[serde(default)]` to cover a missing key.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Image with URL and dimensions.
///
/// Spotify omits the dimensions for some user-uploaded images.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// URL to the image.
    pub url: String,

    /// Height in pixels.
    #[serde(default)]
    pub height: Option<u32>,

    /// Width in pixels.
    #[serde(default)]
    pub width: Option<u32>,
}

impl Image {
    /// Create a new image.
    pub fn new<S: Into<String>>(url: S, height: u32, width: u32) -> Self {
        Self {
            url: url.into(),
            height: Some(height),
            width: Some(width),
        }
    }

    /// Pixel area, zero when the dimensions are unknown.
    pub fn area(&self) -> u64 {
        u64::from(self.width.unwrap_or(0)) * u64::from(self.height.unwrap_or(0))
    }
}

/// Pick the largest image of a list.
pub(crate) fn largest(images: &[Image]) -> Option<&Image> {
    images.iter().max_by_key(|img| img.area())
}

/// Known external URLs for an object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExternalUrls {
    /// Link to the object in the Spotify web player.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify: Option<String>,
}

/// Follower count of a user or artist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Followers {
    /// Total number of followers.
    #[serde(default, deserialize_with = "null_default")]
    pub total: u64,
}

/// One page of a larger result set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paging<T> {
    /// API link to the full result of this request.
    #[serde(default, deserialize_with = "null_default")]
    pub href: String,

    /// Items on this page.
    #[serde(default, deserialize_with = "null_default")]
    pub items: Vec<T>,

    /// Maximum number of items requested.
    #[serde(default, deserialize_with = "null_default")]
    pub limit: u32,

    /// Offset of the first item.
    #[serde(default, deserialize_with = "null_default")]
    pub offset: u32,

    /// Total number of items available.
    #[serde(default, deserialize_with = "null_default")]
    pub total: u32,

    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,

    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
}

impl<T> Default for Paging<T> {
    fn default() -> Self {
        Self {
            href: String::new(),
            items: Vec::new(),
            limit: 0,
            offset: 0,
            total: 0,
            next: None,
            previous: None,
        }
    }
}

impl<T> Paging<T> {
    /// Whether another page follows this one.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Public profile of a Spotify user (playlist owners, etc.).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PublicUser {
    /// Spotify user ID.
    pub id: String,

    /// Name displayed on the profile.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Spotify URI of the user.
    #[serde(default, deserialize_with = "null_default")]
    pub uri: String,

    #[serde(default, deserialize_with = "null_default")]
    pub external_urls: ExternalUrls,
}
