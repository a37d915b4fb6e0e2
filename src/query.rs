//! Query inputs for the listing and search endpoints.
//!
//! Each input knows how to turn itself into the flat `(key, value)` list
//! that is appended to the request URL.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpotifyError};

/// Query parameters as sent on the wire, in order.
pub type QueryParams = Vec<(String, String)>;

/// Largest page size accepted for playlist listings.
pub const MAX_PLAYLIST_LIMIT: i64 = 50;

/// Largest offset accepted for playlist listings.
pub const MAX_PLAYLIST_OFFSET: i64 = 100_000;

/// Fixed set of object types every search covers.
pub const SEARCH_TYPES: [&str; 3] = ["artist", "track", "playlist"];

/// Period over which top items are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    /// Roughly the last 4 weeks.
    ShortTerm,
    /// Roughly the last 6 months.
    #[default]
    MediumTerm,
    /// Several years of data.
    LongTerm,
}

impl TimeRange {
    /// Wire name of the range.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input to the top tracks / top artists listings.
///
/// `limit` and `offset` are forwarded as given; Spotify does the bound
/// checking for these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopItemsQuery {
    pub time_range: TimeRange,
    pub limit: u32,
    pub offset: u32,
}

impl Default for TopItemsQuery {
    fn default() -> Self {
        Self {
            time_range: TimeRange::default(),
            limit: 20,
            offset: 0,
        }
    }
}

impl TopItemsQuery {
    pub fn new(time_range: TimeRange, limit: u32, offset: u32) -> Self {
        Self {
            time_range,
            limit,
            offset,
        }
    }

    pub(crate) fn to_params(self) -> QueryParams {
        vec![
            ("time_range".to_string(), self.time_range.to_string()),
            ("limit".to_string(), self.limit.to_string()),
            ("offset".to_string(), self.offset.to_string()),
        ]
    }
}

/// Input to the current user's playlist listing.
///
/// Signed so that negative values coming from a UI can be reported
/// instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistQuery {
    pub limit: i64,
    pub offset: i64,
}

impl Default for PlaylistQuery {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}

impl PlaylistQuery {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }

    /// Check `0 <= limit <= 50` and `0 <= offset <= 100000`.
    pub fn validate(&self) -> Result<()> {
        if !(0..=MAX_PLAYLIST_LIMIT).contains(&self.limit) {
            return Err(SpotifyError::InvalidParameter {
                name: "limit",
                value: self.limit,
            });
        }
        if !(0..=MAX_PLAYLIST_OFFSET).contains(&self.offset) {
            return Err(SpotifyError::InvalidParameter {
                name: "offset",
                value: self.offset,
            });
        }
        Ok(())
    }

    /// Validate, then build the query parameters.
    pub(crate) fn to_params(self) -> Result<QueryParams> {
        self.validate()?;
        Ok(vec![
            ("limit".to_string(), self.limit.to_string()),
            ("offset".to_string(), self.offset.to_string()),
        ])
    }
}

/// Input to a search across artists, tracks and playlists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query. Encoded by the HTTP layer, not here.
    pub query: String,
    pub market: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl SearchQuery {
    pub fn new<S: Into<String>>(query: S) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_market<S: Into<String>>(mut self, market: S) -> Self {
        self.market = Some(market.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub(crate) fn to_params(&self) -> QueryParams {
        let mut params = vec![
            ("q".to_string(), self.query.clone()),
            ("type".to_string(), SEARCH_TYPES.join(",")),
        ];
        if let Some(market) = &self.market {
            params.push(("market".to_string(), market.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        params
    }
}

impl From<&str> for SearchQuery {
    fn from(query: &str) -> Self {
        Self::new(query)
    }
}

impl From<String> for SearchQuery {
    fn from(query: String) -> Self {
        Self::new(query)
    }
}

/// Build the `ids` parameter for the batch lookups. No size check.
pub(crate) fn ids_param<S: AsRef<str>>(ids: &[S]) -> QueryParams {
    let joined = ids.iter().map(|id| id.as_ref()).collect::<Vec<_>>().join(",");
    vec![("ids".to_string(), joined)]
}
