//! JSON to model converters.
//!
//! The request helper hands back raw JSON. These functions pull out the
//! part an endpoint cares about and turn it into typed models.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::api::Endpoint;
use crate::error::{Result, SpotifyError};
use crate::models::{RecentlyPlayed, Track};

/// Take a top-level field out of a JSON object.
pub fn take_field(mut body: Value, field: &'static str) -> Result<Value> {
    match body.get_mut(field).map(Value::take) {
        Some(value) => Ok(value),
        None => {
            warn!("Response is missing field `{}`", field);
            Err(SpotifyError::MissingField(field))
        }
    }
}

/// Extract the payload of `endpoint` from its response body and parse it.
pub fn extract<T: DeserializeOwned>(endpoint: &Endpoint<'_>, body: Value) -> Result<T> {
    let payload = match endpoint.field() {
        Some(field) => take_field(body, field)?,
        None => body,
    };
    Ok(serde_json::from_value(payload)?)
}

/// Flatten a recently-played body into its tracks, keeping the order.
pub fn recent_tracks(body: Value) -> Result<Vec<Track>> {
    let history: RecentlyPlayed = serde_json::from_value(body)?;
    Ok(history.into_tracks())
}
