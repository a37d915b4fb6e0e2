//! Spotify Web API client.
//!
//! Every accessor follows the same steps: build the query, ask the token
//! provider for a fresh token, send one GET, then pull the interesting part
//! out of the JSON body. The detail views send two requests at once.

use std::sync::Arc;

use futures_util::future::try_join;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};

use super::endpoint::Endpoint;
use crate::auth::TokenProvider;
use crate::config::ClientConfig;
use crate::converters;
use crate::error::{Result, SpotifyError};
use crate::models::{Artist, Playlist, PlaylistItem, PrivateUser, SearchResult, Track};
use crate::query::{ids_param, PlaylistQuery, QueryParams, SearchQuery, TopItemsQuery};
use crate::recommendations::RecommendationRequest;

/// Spotify Web API client.
///
/// Holds no per-call state, so it is cheap to clone and safe to share
/// between tasks.
///
/// # Example
///
/// ```rust,no_run
/// use spotlens::{SpotifyClient, StaticToken, TimeRange, TopItemsQuery};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let spotify = SpotifyClient::new(StaticToken::new("BQD..."))?;
///     let query = TopItemsQuery::new(TimeRange::ShortTerm, 10, 0);
///     for track in spotify.get_top_tracks(query).await? {
///         println!("{} - {}", track.artists_string(", "), track.name);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SpotifyClient {
    client: Client,
    base_url: Url,
    market: String,
    tokens: Arc<dyn TokenProvider>,
}

impl std::fmt::Debug for SpotifyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyClient")
            .field("base_url", &self.base_url.as_str())
            .field("market", &self.market)
            .finish_non_exhaustive()
    }
}

impl SpotifyClient {
    /// Create a client for the public Spotify API.
    pub fn new<P: TokenProvider + 'static>(tokens: P) -> Result<Self> {
        Self::with_config(tokens, ClientConfig::default())
    }

    /// Create a client with explicit settings.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the base URL cannot be parsed or cannot
    /// take path segments.
    pub fn with_config<P: TokenProvider + 'static>(tokens: P, config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| SpotifyError::InvalidConfig(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(SpotifyError::InvalidConfig(format!(
                "{} cannot be used as a base URL",
                config.base_url
            )));
        }

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| SpotifyError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            market: config.market,
            tokens: Arc::new(tokens),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn endpoint_url(&self, endpoint: &Endpoint<'_>) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                SpotifyError::InvalidConfig(format!("{} cannot be used as a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }

    /// Make an authenticated GET request and decode the JSON body.
    ///
    /// The token is requested right before sending. Nothing is retried.
    async fn get_json(&self, endpoint: &Endpoint<'_>, params: &[(String, String)]) -> Result<Value> {
        let url = self.endpoint_url(endpoint)?;
        let token = self.tokens.access_token()?;
        debug!("GET {} with {} params", endpoint, params.len());

        let mut request = self.client.get(url).bearer_auth(token);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await.map_err(|e| {
            error!("Request to {} failed: {}", endpoint, e);
            SpotifyError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Spotify API returned {} for {}", status, endpoint);
            return Err(status_error(status.as_u16(), response.text().await));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET an endpoint and extract its payload.
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
        params: &[(String, String)],
    ) -> Result<T> {
        let body = self.get_json(&endpoint, params).await?;
        converters::extract(&endpoint, body)
    }

    /// Get the current user's profile.
    pub async fn get_profile(&self) -> Result<PrivateUser> {
        self.fetch(Endpoint::Profile, &[]).await
    }

    /// Get the current user's most played tracks.
    pub async fn get_top_tracks(&self, query: TopItemsQuery) -> Result<Vec<Track>> {
        self.fetch(Endpoint::TopTracks, &query.to_params()).await
    }

    /// Get the current user's most played artists.
    pub async fn get_top_artists(&self, query: TopItemsQuery) -> Result<Vec<Artist>> {
        self.fetch(Endpoint::TopArtists, &query.to_params()).await
    }

    /// Get several tracks by ID.
    ///
    /// The batch size is not checked here; Spotify rejects oversized
    /// batches with a `RequestFailed`. The result lines up with `ids`:
    /// an ID Spotify does not know yields `None` at its position.
    pub async fn get_tracks<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Option<Track>>> {
        self.fetch(Endpoint::Tracks, &ids_param(ids)).await
    }

    /// Get several artists by ID. Same batch rules as [`get_tracks`](Self::get_tracks).
    pub async fn get_artists<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Option<Artist>>> {
        self.fetch(Endpoint::Artists, &ids_param(ids)).await
    }

    /// Get a page of the current user's playlists.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` without touching the network if `limit`
    /// is outside `0..=50` or `offset` outside `0..=100000`.
    pub async fn get_playlists(&self, query: PlaylistQuery) -> Result<Vec<Playlist>> {
        let params = query.to_params()?;
        self.fetch(Endpoint::MyPlaylists, &params).await
    }

    /// Get a playlist together with its track entries.
    ///
    /// Both requests run concurrently. If either fails, the whole call fails.
    pub async fn get_playlist(&self, playlist_id: &str) -> Result<(Playlist, Vec<PlaylistItem>)> {
        let (playlist, items) = try_join(
            self.fetch::<Playlist>(Endpoint::Playlist(playlist_id), &[]),
            self.fetch::<Vec<PlaylistItem>>(Endpoint::PlaylistTracks(playlist_id), &[]),
        )
        .await?;

        debug!("Fetched {} entries for playlist {}", items.len(), playlist_id);
        Ok((playlist, items))
    }

    /// Get an artist together with their top tracks in the configured market.
    ///
    /// Both requests run concurrently. If either fails, the whole call fails.
    pub async fn get_artist(&self, artist_id: &str) -> Result<(Artist, Vec<Track>)> {
        let market = vec![("market".to_string(), self.market.clone())];
        try_join(
            self.fetch::<Artist>(Endpoint::Artist(artist_id), &[]),
            self.fetch::<Vec<Track>>(Endpoint::ArtistTopTracks(artist_id), &market),
        )
        .await
    }

    /// Get a track by ID.
    pub async fn get_track(&self, track_id: &str) -> Result<Track> {
        self.fetch(Endpoint::Track(track_id), &[]).await
    }

    /// Get the tracks the current user played most recently, newest first.
    pub async fn get_recent_tracks(&self) -> Result<Vec<Track>> {
        let body = self.get_json(&Endpoint::RecentlyPlayed, &[]).await?;
        converters::recent_tracks(body)
    }

    /// Search artists, tracks and playlists at once.
    pub async fn search<Q: Into<SearchQuery>>(&self, query: Q) -> Result<SearchResult> {
        let query = query.into();
        self.fetch(Endpoint::Search, &query.to_params()).await
    }

    /// Get the genres usable as recommendation seeds.
    pub async fn get_genres(&self) -> Result<Vec<String>> {
        self.fetch(Endpoint::GenreSeeds, &[]).await
    }

    /// Get recommended tracks for a set of seeds and feature constraints.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeedCount` without touching the network unless
    /// between 1 and 5 seeds are given in total.
    pub async fn generate_playlist(&self, request: &RecommendationRequest) -> Result<Vec<Track>> {
        let params: QueryParams = request.to_params()?;
        debug!("Requesting recommendations from {} seeds", request.seeds.count());
        self.fetch(Endpoint::Recommendations, &params).await
    }
}

/// Error for a non-2xx response. The status is kept even when the body
/// could not be read.
fn status_error<E: std::fmt::Display>(
    status: u16,
    body: std::result::Result<String, E>,
) -> SpotifyError {
    let body = body.unwrap_or_else(|e| {
        warn!("Could not read error body: {}", e);
        String::new()
    });
    SpotifyError::RequestFailed {
        status: Some(status),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticToken;

    fn client(base_url: &str) -> SpotifyClient {
        let config = ClientConfig::default().with_base_url(base_url);
        SpotifyClient::with_config(StaticToken::new("t"), config).unwrap()
    }

    #[test]
    fn test_status_error_keeps_status_when_body_unreadable() {
        let err = status_error(502, Err("connection reset"));
        match err {
            SpotifyError::RequestFailed { status, body } => {
                assert_eq!(status, Some(502));
                assert!(body.is_empty());
            }
            other => panic!("Expected RequestFailed, got {:?}", other),
        }
        assert_eq!(status_error::<&str>(404, Ok("not found".into())).status(), Some(404));
    }

    #[test]
    fn test_endpoint_url_with_version_prefix() {
        let spotify = client("https://api.spotify.com/v1");
        let url = spotify.endpoint_url(&Endpoint::TopTracks).unwrap();
        assert_eq!(url.as_str(), "https://api.spotify.com/v1/me/top/tracks");
    }

    #[test]
    fn test_endpoint_url_trailing_slash() {
        let spotify = client("http://localhost:8080/");
        let url = spotify.endpoint_url(&Endpoint::Track("abc")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/tracks/abc");
    }

    #[test]
    fn test_endpoint_url_encodes_ids() {
        let spotify = client("https://api.spotify.com/v1");
        let url = spotify.endpoint_url(&Endpoint::Playlist("a/b c")).unwrap();
        assert_eq!(url.as_str(), "https://api.spotify.com/v1/playlists/a%2Fb%20c");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig::default().with_base_url("not a url");
        let result = SpotifyClient::with_config(StaticToken::new("t"), config);
        assert!(matches!(result, Err(SpotifyError::InvalidConfig(_))));

        let config = ClientConfig::default().with_base_url("mailto:someone@example.com");
        let result = SpotifyClient::with_config(StaticToken::new("t"), config);
        assert!(matches!(result, Err(SpotifyError::InvalidConfig(_))));
    }

    #[test]
    fn test_debug_hides_token() {
        let spotify = SpotifyClient::new(StaticToken::new("secret-token")).unwrap();
        let debug = format!("{:?}", spotify);
        assert!(debug.contains("api.spotify.com"));
        assert!(!debug.contains("secret-token"));
    }
}
