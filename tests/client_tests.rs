//! Tests for the Spotify client against a mock Web API.
//!
//! A `wiremock` server stands in for api.spotify.com so request shapes and
//! response handling can be checked without network access.

use serde_json::{json, Value};
use spotlens::{
    AudioFeature, ClientConfig, MinMaxTarget, PlaylistQuery, RecommendationRequest,
    RecommendationSeed, SearchQuery, SharedToken, SpotifyClient, SpotifyError, StaticToken,
    TimeRange, TokenProvider, TopItemsQuery, TrackFeatures,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for<P: TokenProvider + 'static>(server: &MockServer, tokens: P) -> SpotifyClient {
    let config = ClientConfig::default().with_base_url(server.uri());
    SpotifyClient::with_config(tokens, config).unwrap()
}

async fn setup() -> (MockServer, SpotifyClient) {
    let server = MockServer::start().await;
    let client = client_for(&server, StaticToken::new("test-token"));
    (server, client)
}

fn track(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "duration_ms": 180000,
        "artists": [{ "id": "ar1", "name": "Some Artist" }],
        "uri": format!("spotify:track:{}", id)
    })
}

fn artist(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "genres": ["indie"],
        "followers": { "total": 1200 }
    })
}

async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.unwrap_or_default().len()
}

/// Query pairs of the only request the server received.
async fn single_query(server: &MockServer) -> Vec<(String, String)> {
    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn value_of<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

// =============================================================================
// Request Helper Tests
// =============================================================================

mod request_helper {
    use super::*;

    #[tokio::test]
    async fn test_profile_sends_bearer_token() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/me"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "wizzler",
                "display_name": "JM Wizzler",
                "country": "SE",
                "product": "premium",
                "followers": { "total": 3829 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let me = client.get_profile().await.unwrap();
        assert_eq!(me.id, "wizzler");
        assert_eq!(me.name(), "JM Wizzler");
        assert!(me.is_premium());
        assert_eq!(me.followers.total, 3829);
    }

    #[tokio::test]
    async fn test_token_is_fetched_before_each_request() {
        let server = MockServer::start().await;
        let tokens = SharedToken::with_token("first");
        let client = client_for(&server, tokens.clone());

        for token in ["first", "second"] {
            Mock::given(method("GET"))
                .and(path("/me"))
                .and(header("Authorization", format!("Bearer {}", token).as_str()))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": token })))
                .expect(1)
                .mount(&server)
                .await;
        }

        assert_eq!(client.get_profile().await.unwrap().id, "first");
        tokens.set("second");
        assert_eq!(client.get_profile().await.unwrap().id, "second");
    }

    #[tokio::test]
    async fn test_missing_token_sends_nothing() {
        let server = MockServer::start().await;
        let client = client_for(&server, SharedToken::new());

        let result = client.get_profile().await;
        assert!(matches!(result, Err(SpotifyError::Token(_))));
        assert_eq!(request_count(&server).await, 0);
    }

    #[tokio::test]
    async fn test_error_status_is_request_failed() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": { "status": 401, "message": "The access token expired" }
            })))
            .mount(&server)
            .await;

        match client.get_profile().await {
            Err(SpotifyError::RequestFailed { status, body }) => {
                assert_eq!(status, Some(401));
                assert!(body.contains("The access token expired"));
            }
            other => panic!("Expected RequestFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_request_failed() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:1");
        let client = SpotifyClient::with_config(StaticToken::new("t"), config).unwrap();

        match client.get_genres().await {
            Err(SpotifyError::RequestFailed { status, .. }) => assert_eq!(status, None),
            other => panic!("Expected RequestFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/tracks/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = client.get_track("abc").await;
        assert!(matches!(result, Err(SpotifyError::Parse(_))));
    }

    #[tokio::test]
    async fn test_missing_payload_field() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/recommendations/available-genre-seeds"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let result = client.get_genres().await;
        assert!(matches!(result, Err(SpotifyError::MissingField("genres"))));
    }

    #[tokio::test]
    async fn test_no_query_string_without_params() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/tracks/xyz"))
            .respond_with(ResponseTemplate::new(200).set_body_json(track("xyz", "Song")))
            .mount(&server)
            .await;

        client.get_track("xyz").await.unwrap();
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }
}

// =============================================================================
// Top Items Tests
// =============================================================================

mod top_items {
    use super::*;

    #[tokio::test]
    async fn test_top_tracks_params_and_items() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/me/top/tracks"))
            .and(query_param("time_range", "short_term"))
            .and(query_param("limit", "10"))
            .and(query_param("offset", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [track("t1", "One"), track("t2", "Two")],
                "total": 50,
                "limit": 10,
                "offset": 5
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tracks = client
            .get_top_tracks(TopItemsQuery::new(TimeRange::ShortTerm, 10, 5))
            .await
            .unwrap();
        let names: Vec<_> = tracks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["One", "Two"]);
    }

    #[tokio::test]
    async fn test_top_artists_forwards_unbounded_limit() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/me/top/artists"))
            .and(query_param("time_range", "long_term"))
            .and(query_param("limit", "99"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [artist("a1", "Band")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let artists = client
            .get_top_artists(TopItemsQuery::new(TimeRange::LongTerm, 99, 0))
            .await
            .unwrap();
        assert_eq!(artists[0].name, "Band");
        assert_eq!(artists[0].genres, vec!["indie"]);
    }
}

// =============================================================================
// Batch Lookup Tests
// =============================================================================

mod batch {
    use super::*;

    #[tokio::test]
    async fn test_get_tracks_joins_ids() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/tracks"))
            .and(query_param("ids", "a,b,c"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tracks": [track("a", "A"), null, track("c", "C")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tracks = client.get_tracks(&["a", "b", "c"]).await.unwrap();
        let ids: Vec<_> = tracks
            .iter()
            .map(|t| t.as_ref().and_then(|t| t.id.as_deref()))
            .collect();
        assert_eq!(ids, vec![Some("a"), None, Some("c")]);
    }

    #[tokio::test]
    async fn test_get_artists_extracts_artists_field() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/artists"))
            .and(query_param("ids", "x,y"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "artists": [artist("x", "X"), artist("y", "Y")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let ids = vec!["x".to_string(), "y".to_string()];
        let artists = client.get_artists(&ids).await.unwrap();
        assert_eq!(artists.len(), 2);
        assert_eq!(artists[1].as_ref().map(|a| a.id.as_str()), Some("y"));
    }

    #[tokio::test]
    async fn test_oversized_batch_rejected_remotely() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/tracks"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Too many ids requested"))
            .expect(1)
            .mount(&server)
            .await;

        let ids: Vec<String> = (0..100).map(|i| format!("id{}", i)).collect();
        let err = client.get_tracks(&ids).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
    }
}

// =============================================================================
// Playlist Tests
// =============================================================================

mod playlists {
    use super::*;

    #[tokio::test]
    async fn test_valid_bounds_issue_request() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/me/playlists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{ "id": "p1", "name": "Road Trip", "tracks": { "total": 42 } }]
            })))
            .mount(&server)
            .await;

        for (limit, offset) in [(0, 0), (50, 100_000), (20, 0)] {
            let playlists = client
                .get_playlists(PlaylistQuery::new(limit, offset))
                .await
                .unwrap();
            assert_eq!(playlists[0].track_count(), 42);
        }

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 3);
        let last: Vec<_> = requests[1].url.query_pairs().collect();
        assert!(last.iter().any(|(k, v)| k == "limit" && v == "50"));
        assert!(last.iter().any(|(k, v)| k == "offset" && v == "100000"));
    }

    #[tokio::test]
    async fn test_out_of_bounds_sends_nothing() {
        let (server, client) = setup().await;

        for (limit, offset) in [(-1, 0), (51, 0), (20, -1), (20, 100_001)] {
            let err = client
                .get_playlists(PlaylistQuery::new(limit, offset))
                .await
                .unwrap_err();
            assert!(err.is_invalid_parameter(), "{:?}", err);
        }

        assert_eq!(request_count(&server).await, 0);
    }

    #[tokio::test]
    async fn test_get_playlist_returns_detail_and_items() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/playlists/abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "abc123",
                "name": "Focus",
                "owner": { "id": "spotify", "display_name": "Spotify" },
                "tracks": { "href": "https://api.spotify.com/v1/playlists/abc123/tracks", "total": 2 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/playlists/abc123/tracks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    { "added_at": "2024-03-01T00:00:00Z", "track": track("t1", "First") },
                    { "added_at": "2024-03-02T00:00:00Z", "track": track("t2", "Second") }
                ],
                "total": 2
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (playlist, items) = client.get_playlist("abc123").await.unwrap();
        assert_eq!(playlist.id, "abc123");
        assert_eq!(playlist.owner_name(), "Spotify");

        let ids: Vec<_> = items
            .iter()
            .filter_map(|i| i.track.as_ref())
            .filter_map(|t| t.id.as_deref())
            .collect();
        assert_eq!(ids, vec!["t1", "t2"]);
    }

    #[tokio::test]
    async fn test_get_playlist_with_local_file_entry() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/playlists/abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "abc123",
                "name": "Mixed",
                "images": null
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/playlists/abc123/tracks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {
                        "added_at": "2024-03-01T00:00:00Z",
                        "is_local": true,
                        "track": {
                            "id": null,
                            "name": "demo take 3",
                            "duration_ms": 95000,
                            "popularity": 0,
                            "uri": "spotify:local:Band:Demos:demo+take+3:95",
                            "album": {
                                "id": null,
                                "name": "Demos",
                                "album_type": null,
                                "release_date": null,
                                "images": [],
                                "uri": null
                            },
                            "artists": [{ "id": null, "name": "Band", "uri": null }]
                        }
                    },
                    { "added_at": "2024-03-02T00:00:00Z", "track": track("t2", "Second") }
                ]
            })))
            .mount(&server)
            .await;

        let (playlist, items) = client.get_playlist("abc123").await.unwrap();
        assert!(playlist.images.is_empty());
        assert_eq!(items.len(), 2);

        assert!(items[0].is_local);
        let local = items[0].track.as_ref().unwrap();
        assert_eq!(local.id, None);
        assert_eq!(local.primary_artist(), Some("Band"));
        let album = local.album.as_ref().unwrap();
        assert!(album.id.is_empty());
        assert_eq!(album.release_year(), None);
    }

    #[tokio::test]
    async fn test_playlists_page_with_null_images() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/me/playlists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    { "id": "p1", "name": "No Cover", "images": null, "snapshot_id": null },
                    { "id": "p2", "name": "Cover", "images": [{ "url": "https://i.scdn.co/p2" }] }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let playlists = client.get_playlists(PlaylistQuery::default()).await.unwrap();
        assert_eq!(playlists.len(), 2);
        assert!(playlists[0].largest_image().is_none());
        assert_eq!(
            playlists[1].largest_image().map(|i| i.url.as_str()),
            Some("https://i.scdn.co/p2")
        );
    }

    #[tokio::test]
    async fn test_get_playlist_fails_when_tracks_fail() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/playlists/abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "abc123",
                "name": "Focus"
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/playlists/abc123/tracks"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        match client.get_playlist("abc123").await {
            Err(SpotifyError::RequestFailed { status, body }) => {
                assert_eq!(status, Some(500));
                assert_eq!(body, "boom");
            }
            other => panic!("Expected RequestFailed, got {:?}", other),
        }
    }
}

// =============================================================================
// Artist and Track Detail Tests
// =============================================================================

mod details {
    use super::*;

    #[tokio::test]
    async fn test_get_artist_with_top_tracks_in_us() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/artists/ar1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(artist("ar1", "Band")))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/artists/ar1/top-tracks"))
            .and(query_param("market", "US"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tracks": [track("h1", "Hit"), track("h2", "Other Hit")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (artist, top) = client.get_artist("ar1").await.unwrap();
        assert_eq!(artist.name, "Band");
        assert_eq!(artist.followers.total, 1200);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Hit");
    }

    #[tokio::test]
    async fn test_get_artist_uses_configured_market() {
        let server = MockServer::start().await;
        let config = ClientConfig::default()
            .with_base_url(server.uri())
            .with_market("SE");
        let client = SpotifyClient::with_config(StaticToken::new("t"), config).unwrap();

        Mock::given(method("GET"))
            .and(path("/artists/ar1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(artist("ar1", "Band")))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/artists/ar1/top-tracks"))
            .and(query_param("market", "SE"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tracks": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let (_, top) = client.get_artist("ar1").await.unwrap();
        assert!(top.is_empty());
    }

    #[tokio::test]
    async fn test_get_artist_fails_when_detail_fails() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/artists/gone"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/artists/gone/top-tracks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tracks": [] })))
            .mount(&server)
            .await;

        let err = client.get_artist("gone").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_get_track_whole_body() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/tracks/t9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(track("t9", "Nine")))
            .expect(1)
            .mount(&server)
            .await;

        let track = client.get_track("t9").await.unwrap();
        assert_eq!(track.name, "Nine");
        assert_eq!(track.duration_formatted(), "03:00");
        assert_eq!(track.primary_artist(), Some("Some Artist"));
    }
}

// =============================================================================
// Recently Played, Search and Genre Tests
// =============================================================================

mod listing {
    use super::*;

    #[tokio::test]
    async fn test_recent_tracks_flatten_in_order() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/me/player/recently-played"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    { "track": track("A", "Track A"), "played_at": "2024-05-01T12:00:00Z" },
                    { "track": track("B", "Track B"), "played_at": "2024-05-01T11:00:00Z" }
                ],
                "limit": 20
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tracks = client.get_recent_tracks().await.unwrap();
        let ids: Vec<_> = tracks.iter().filter_map(|t| t.id.as_deref()).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_search_fixed_types() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "daft punk"))
            .and(query_param("type", "artist,track,playlist"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tracks": { "items": [track("t1", "Around the World")], "total": 1 },
                "artists": { "items": [artist("a1", "Daft Punk")], "total": 1 },
                "playlists": { "items": [null, { "id": "p1", "name": "This Is Daft Punk" }], "total": 2 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client.search("daft punk").await.unwrap();
        assert_eq!(result.tracks.items[0].name, "Around the World");
        assert_eq!(result.artists.items[0].name, "Daft Punk");
        assert_eq!(result.playlists().count(), 1);
        assert_eq!(result.playlists.total, 2);
    }

    #[tokio::test]
    async fn test_search_optional_params() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let result = client
            .search(SearchQuery::new("lofi").with_market("DE").with_limit(5).with_offset(10))
            .await
            .unwrap();
        assert!(result.is_empty());

        let pairs = single_query(&server).await;
        assert_eq!(value_of(&pairs, "market"), Some("DE"));
        assert_eq!(value_of(&pairs, "limit"), Some("5"));
        assert_eq!(value_of(&pairs, "offset"), Some("10"));
    }

    #[tokio::test]
    async fn test_genres() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/recommendations/available-genre-seeds"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "genres": ["acoustic", "afrobeat", "alt-rock"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let genres = client.get_genres().await.unwrap();
        assert_eq!(genres, vec!["acoustic", "afrobeat", "alt-rock"]);
    }

    #[tokio::test]
    async fn test_accessors_are_idempotent() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/me/top/tracks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [track("t1", "One"), track("t2", "Two")]
            })))
            .expect(2)
            .mount(&server)
            .await;

        let query = TopItemsQuery::default();
        let first = client.get_top_tracks(query).await.unwrap();
        let second = client.get_top_tracks(query).await.unwrap();
        assert_eq!(first, second);
    }
}

// =============================================================================
// Recommendation Tests
// =============================================================================

mod recommendations {
    use super::*;

    #[tokio::test]
    async fn test_generate_playlist_params() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/recommendations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "seeds": [{ "id": "pop", "type": "GENRE" }],
                "tracks": [track("r1", "Rec One"), track("r2", "Rec Two")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = RecommendationRequest::new(
            RecommendationSeed::new().artist("a1").artist("a2").genre("pop"),
        )
        .with_features(TrackFeatures::new().with(
            AudioFeature::Danceability,
            MinMaxTarget::default().min(0.2).target(0.5),
        ));

        let tracks = client.generate_playlist(&request).await.unwrap();
        assert_eq!(tracks.len(), 2);

        let pairs = single_query(&server).await;
        assert_eq!(value_of(&pairs, "limit"), Some("20"));
        assert_eq!(value_of(&pairs, "seed_artists"), Some("a1,a2"));
        assert_eq!(value_of(&pairs, "seed_genres"), Some("pop"));
        assert_eq!(value_of(&pairs, "seed_tracks"), Some(""));
        assert_eq!(value_of(&pairs, "min_danceability"), Some("0.2"));
        assert_eq!(value_of(&pairs, "target_danceability"), Some("0.5"));
        assert_eq!(value_of(&pairs, "max_danceability"), None);
    }

    #[tokio::test]
    async fn test_invalid_seed_count_sends_nothing() {
        let (server, client) = setup().await;

        let empty = RecommendationRequest::new(RecommendationSeed::new());
        match client.generate_playlist(&empty).await {
            Err(SpotifyError::InvalidSeedCount { provided }) => assert_eq!(provided, 0),
            other => panic!("Expected InvalidSeedCount, got {:?}", other),
        }

        let mut seeds = RecommendationSeed::new();
        for i in 0..6 {
            seeds = seeds.track(format!("t{}", i));
        }
        let too_many = RecommendationRequest::new(seeds);
        match client.generate_playlist(&too_many).await {
            Err(SpotifyError::InvalidSeedCount { provided }) => assert_eq!(provided, 6),
            other => panic!("Expected InvalidSeedCount, got {:?}", other),
        }

        assert_eq!(request_count(&server).await, 0);
    }

    #[tokio::test]
    async fn test_zero_limit_falls_back_to_default() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/recommendations"))
            .and(query_param("limit", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tracks": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let request = RecommendationRequest::new(RecommendationSeed::new().genre("jazz")).with_limit(0);
        client.generate_playlist(&request).await.unwrap();
    }

    #[tokio::test]
    async fn test_custom_limit() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/recommendations"))
            .and(query_param("limit", "5"))
            .and(query_param("seed_tracks", "t1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tracks": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let request = RecommendationRequest::new(RecommendationSeed::new().track("t1")).with_limit(5);
        let tracks = client.generate_playlist(&request).await.unwrap();
        assert!(tracks.is_empty());
    }
}
