//! Profile of the signed-in user.

use serde::{Deserialize, Serialize};

use super::common::{largest, null_default, ExternalUrls, Followers, Image};

/// The current user's profile as returned by `/me`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PrivateUser {
    /// Spotify user ID.
    pub id: String,

    #[serde(default)]
    pub display_name: Option<String>,

    /// Only present with the `user-read-email` scope.
    #[serde(default)]
    pub email: Option<String>,

    /// ISO 3166-1 alpha-2 country code.
    #[serde(default)]
    pub country: Option<String>,

    /// Subscription level: "premium", "free", ...
    #[serde(default)]
    pub product: Option<String>,

    #[serde(default, deserialize_with = "null_default")]
    pub followers: Followers,

    #[serde(default, deserialize_with = "null_default")]
    pub images: Vec<Image>,

    #[serde(default, deserialize_with = "null_default")]
    pub uri: String,

    #[serde(default, deserialize_with = "null_default")]
    pub external_urls: ExternalUrls,
}

impl PrivateUser {
    /// Display name, falling back to the user ID.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(self.id.as_str())
    }

    /// Get the largest avatar available.
    pub fn avatar(&self) -> Option<&Image> {
        largest(&self.images)
    }

    pub fn is_premium(&self) -> bool {
        self.product.as_deref() == Some("premium")
    }
}
