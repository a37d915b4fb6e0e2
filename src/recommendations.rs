//! Recommendation request building.
//!
//! Turns seeds and audio feature constraints into the flat parameter list
//! the `/recommendations` endpoint expects:
//!
//! ```text
//! limit=20&seed_artists=a,b&seed_genres=&seed_tracks=t&min_energy=0.4&target_tempo=120
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpotifyError};
use crate::query::QueryParams;

/// Seeds accepted per request, counted across all three kinds.
pub const SEED_RANGE: std::ops::RangeInclusive<usize> = 1..=5;

/// Page size used when the request does not set one.
pub const DEFAULT_LIMIT: u32 = 20;

/// Artists, genres and tracks that steer the recommendations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSeed {
    #[serde(default)]
    pub seed_artists: Vec<String>,
    #[serde(default)]
    pub seed_genres: Vec<String>,
    #[serde(default)]
    pub seed_tracks: Vec<String>,
}

impl RecommendationSeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn artist<S: Into<String>>(mut self, id: S) -> Self {
        self.seed_artists.push(id.into());
        self
    }

    pub fn genre<S: Into<String>>(mut self, genre: S) -> Self {
        self.seed_genres.push(genre.into());
        self
    }

    pub fn track<S: Into<String>>(mut self, id: S) -> Self {
        self.seed_tracks.push(id.into());
        self
    }

    /// Number of seeds across all three kinds.
    pub fn count(&self) -> usize {
        self.seed_artists.len() + self.seed_genres.len() + self.seed_tracks.len()
    }

    /// Check the seed count and build the three comma-joined parameters.
    ///
    /// Empty lists still produce a parameter with an empty value.
    pub fn to_params(&self) -> Result<QueryParams> {
        let provided = self.count();
        if !SEED_RANGE.contains(&provided) {
            return Err(SpotifyError::InvalidSeedCount { provided });
        }

        Ok(vec![
            ("seed_artists".to_string(), self.seed_artists.join(",")),
            ("seed_genres".to_string(), self.seed_genres.join(",")),
            ("seed_tracks".to_string(), self.seed_tracks.join(",")),
        ])
    }
}

/// Bounds and goal for one audio feature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MinMaxTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
}

impl MinMaxTarget {
    pub fn min(mut self, value: f64) -> Self {
        self.min = Some(value);
        self
    }

    pub fn max(mut self, value: f64) -> Self {
        self.max = Some(value);
        self
    }

    pub fn target(mut self, value: f64) -> Self {
        self.target = Some(value);
        self
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self::default().min(min).max(max)
    }

    fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.target.is_none()
    }
}

/// The tunable audio features, in the order their parameters are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFeature {
    Acousticness,
    Danceability,
    DurationMs,
    Energy,
    Instrumentalness,
    Key,
    Liveness,
    Loudness,
    Mode,
    Popularity,
    Speechiness,
    Tempo,
    TimeSignature,
    Valence,
}

impl AudioFeature {
    pub const ALL: [AudioFeature; 14] = [
        AudioFeature::Acousticness,
        AudioFeature::Danceability,
        AudioFeature::DurationMs,
        AudioFeature::Energy,
        AudioFeature::Instrumentalness,
        AudioFeature::Key,
        AudioFeature::Liveness,
        AudioFeature::Loudness,
        AudioFeature::Mode,
        AudioFeature::Popularity,
        AudioFeature::Speechiness,
        AudioFeature::Tempo,
        AudioFeature::TimeSignature,
        AudioFeature::Valence,
    ];

    /// Name used in the `min_`/`max_`/`target_` parameter keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFeature::Acousticness => "acousticness",
            AudioFeature::Danceability => "danceability",
            AudioFeature::DurationMs => "duration_ms",
            AudioFeature::Energy => "energy",
            AudioFeature::Instrumentalness => "instrumentalness",
            AudioFeature::Key => "key",
            AudioFeature::Liveness => "liveness",
            AudioFeature::Loudness => "loudness",
            AudioFeature::Mode => "mode",
            AudioFeature::Popularity => "popularity",
            AudioFeature::Speechiness => "speechiness",
            AudioFeature::Tempo => "tempo",
            AudioFeature::TimeSignature => "time_signature",
            AudioFeature::Valence => "valence",
        }
    }
}

impl std::str::FromStr for AudioFeature {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        AudioFeature::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown audio feature `{}`", s))
    }
}

/// Optional constraints on each audio feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackFeatures {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acousticness: Option<MinMaxTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub danceability: Option<MinMaxTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<MinMaxTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<MinMaxTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrumentalness: Option<MinMaxTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<MinMaxTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liveness: Option<MinMaxTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loudness: Option<MinMaxTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<MinMaxTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<MinMaxTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speechiness: Option<MinMaxTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<MinMaxTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_signature: Option<MinMaxTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valence: Option<MinMaxTarget>,
}

impl TrackFeatures {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, feature: AudioFeature) -> &mut Option<MinMaxTarget> {
        match feature {
            AudioFeature::Acousticness => &mut self.acousticness,
            AudioFeature::Danceability => &mut self.danceability,
            AudioFeature::DurationMs => &mut self.duration_ms,
            AudioFeature::Energy => &mut self.energy,
            AudioFeature::Instrumentalness => &mut self.instrumentalness,
            AudioFeature::Key => &mut self.key,
            AudioFeature::Liveness => &mut self.liveness,
            AudioFeature::Loudness => &mut self.loudness,
            AudioFeature::Mode => &mut self.mode,
            AudioFeature::Popularity => &mut self.popularity,
            AudioFeature::Speechiness => &mut self.speechiness,
            AudioFeature::Tempo => &mut self.tempo,
            AudioFeature::TimeSignature => &mut self.time_signature,
            AudioFeature::Valence => &mut self.valence,
        }
    }

    /// Constraint set for a feature, if any.
    pub fn get(&self, feature: AudioFeature) -> Option<&MinMaxTarget> {
        match feature {
            AudioFeature::Acousticness => self.acousticness.as_ref(),
            AudioFeature::Danceability => self.danceability.as_ref(),
            AudioFeature::DurationMs => self.duration_ms.as_ref(),
            AudioFeature::Energy => self.energy.as_ref(),
            AudioFeature::Instrumentalness => self.instrumentalness.as_ref(),
            AudioFeature::Key => self.key.as_ref(),
            AudioFeature::Liveness => self.liveness.as_ref(),
            AudioFeature::Loudness => self.loudness.as_ref(),
            AudioFeature::Mode => self.mode.as_ref(),
            AudioFeature::Popularity => self.popularity.as_ref(),
            AudioFeature::Speechiness => self.speechiness.as_ref(),
            AudioFeature::Tempo => self.tempo.as_ref(),
            AudioFeature::TimeSignature => self.time_signature.as_ref(),
            AudioFeature::Valence => self.valence.as_ref(),
        }
    }

    /// Set the constraints for a feature, replacing earlier ones.
    pub fn with(mut self, feature: AudioFeature, bounds: MinMaxTarget) -> Self {
        *self.slot(feature) = Some(bounds);
        self
    }

    pub fn is_empty(&self) -> bool {
        AudioFeature::ALL
            .iter()
            .all(|f| self.get(*f).map_or(true, MinMaxTarget::is_empty))
    }

    /// Emit `min_<name>`, `max_<name>` and `target_<name>` for every value
    /// that is set. Zero is a value like any other.
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        for feature in AudioFeature::ALL {
            let Some(bounds) = self.get(feature) else {
                continue;
            };
            let name = feature.as_str();
            let parts = [("min", bounds.min), ("max", bounds.max), ("target", bounds.target)];
            for (prefix, value) in parts {
                if let Some(value) = value {
                    params.push((format!("{}_{}", prefix, name), value.to_string()));
                }
            }
        }
        params
    }
}

/// Everything needed for one call to the recommendations endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(flatten)]
    pub seeds: RecommendationSeed,

    /// Number of tracks wanted, 20 when unset or zero.
    #[serde(default)]
    pub limit: Option<u32>,

    #[serde(default)]
    pub market: Option<String>,

    #[serde(default, rename = "track_features")]
    pub features: Option<TrackFeatures>,
}

impl RecommendationRequest {
    pub fn new(seeds: RecommendationSeed) -> Self {
        Self {
            seeds,
            ..Default::default()
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_market<S: Into<String>>(mut self, market: S) -> Self {
        self.market = Some(market.into());
        self
    }

    pub fn with_features(mut self, features: TrackFeatures) -> Self {
        self.features = Some(features);
        self
    }

    /// Build the full parameter list: limit, market, seeds, then features.
    ///
    /// Fails on a bad seed count before anything else is built.
    pub fn to_params(&self) -> Result<QueryParams> {
        let seeds = self.seeds.to_params()?;

        let mut params = vec![(
            "limit".to_string(),
            self.limit
                .filter(|&limit| limit > 0)
                .unwrap_or(DEFAULT_LIMIT)
                .to_string(),
        )];
        if let Some(market) = &self.market {
            params.push(("market".to_string(), market.clone()));
        }
        params.extend(seeds);
        if let Some(features) = &self.features {
            params.extend(features.to_params());
        }
        Ok(params)
    }
}
