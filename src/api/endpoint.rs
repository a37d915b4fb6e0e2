//! Endpoint declarations.
//!
//! Each remote resource is one variant. A variant knows its path below the
//! API base URL and which field of the response body holds the payload.

/// A Spotify Web API resource reachable with a GET request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Profile,
    TopTracks,
    TopArtists,
    Tracks,
    Artists,
    MyPlaylists,
    Playlist(&'a str),
    PlaylistTracks(&'a str),
    Artist(&'a str),
    ArtistTopTracks(&'a str),
    Track(&'a str),
    RecentlyPlayed,
    Search,
    GenreSeeds,
    Recommendations,
}

impl<'a> Endpoint<'a> {
    /// Path segments below the base URL. IDs are inserted as single
    /// segments and get percent-encoded by the URL builder.
    pub fn segments(&self) -> Vec<&'a str> {
        match *self {
            Endpoint::Profile => vec!["me"],
            Endpoint::TopTracks => vec!["me", "top", "tracks"],
            Endpoint::TopArtists => vec!["me", "top", "artists"],
            Endpoint::Tracks => vec!["tracks"],
            Endpoint::Artists => vec!["artists"],
            Endpoint::MyPlaylists => vec!["me", "playlists"],
            Endpoint::Playlist(id) => vec!["playlists", id],
            Endpoint::PlaylistTracks(id) => vec!["playlists", id, "tracks"],
            Endpoint::Artist(id) => vec!["artists", id],
            Endpoint::ArtistTopTracks(id) => vec!["artists", id, "top-tracks"],
            Endpoint::Track(id) => vec!["tracks", id],
            Endpoint::RecentlyPlayed => vec!["me", "player", "recently-played"],
            Endpoint::Search => vec!["search"],
            Endpoint::GenreSeeds => vec!["recommendations", "available-genre-seeds"],
            Endpoint::Recommendations => vec!["recommendations"],
        }
    }

    /// Field holding the payload, `None` when the whole body is the payload.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Endpoint::TopTracks
            | Endpoint::TopArtists
            | Endpoint::MyPlaylists
            | Endpoint::PlaylistTracks(_) => Some("items"),
            Endpoint::Tracks | Endpoint::ArtistTopTracks(_) | Endpoint::Recommendations => {
                Some("tracks")
            }
            Endpoint::Artists => Some("artists"),
            Endpoint::GenreSeeds => Some("genres"),
            // Flattened from `items[].track` by the caller.
            Endpoint::RecentlyPlayed => None,
            Endpoint::Profile
            | Endpoint::Playlist(_)
            | Endpoint::Artist(_)
            | Endpoint::Track(_)
            | Endpoint::Search => None,
        }
    }

    /// Path for logging, e.g. `/playlists/abc/tracks`.
    pub fn path(&self) -> String {
        format!("/{}", self.segments().join("/"))
    }
}

impl std::fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}
