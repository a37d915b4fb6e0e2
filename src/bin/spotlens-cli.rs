use clap::{Parser, Subcommand, ValueEnum};
use spotlens::{
    AudioFeature, ClientConfig, MinMaxTarget, PlaylistQuery, RecommendationRequest,
    RecommendationSeed, SearchQuery, SpotifyClient, StaticToken, TimeRange, TopItemsQuery, Track,
    TrackFeatures,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spotlens-cli")]
#[command(about = "CLI for spotlens - Spotify listening stats and recommendations", long_about = None)]
struct Cli {
    /// Spotify access token (can also be set via SPOTIFY_TOKEN env var)
    #[arg(long, env = "SPOTIFY_TOKEN", hide_env_values = true)]
    token: String,

    /// Base URL of the Web API
    #[arg(long, env = "SPOTIFY_API_URL", default_value = spotlens::config::DEFAULT_API_URL)]
    api_url: String,

    /// Market for artist top tracks
    #[arg(long, env = "SPOTIFY_MARKET", default_value = spotlens::config::DEFAULT_MARKET)]
    market: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Range {
    Short,
    Medium,
    Long,
}

impl From<Range> for TimeRange {
    fn from(r: Range) -> Self {
        match r {
            Range::Short => TimeRange::ShortTerm,
            Range::Medium => TimeRange::MediumTerm,
            Range::Long => TimeRange::LongTerm,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the signed-in user
    Profile,
    /// List your most played tracks
    TopTracks {
        #[arg(short, long, value_enum, default_value_t = Range::Medium)]
        range: Range,
        #[arg(short, long, default_value_t = 20)]
        limit: u32,
        #[arg(short, long, default_value_t = 0)]
        offset: u32,
    },
    /// List your most played artists
    TopArtists {
        #[arg(short, long, value_enum, default_value_t = Range::Medium)]
        range: Range,
        #[arg(short, long, default_value_t = 20)]
        limit: u32,
        #[arg(short, long, default_value_t = 0)]
        offset: u32,
    },
    /// Look up tracks by ID
    Tracks { ids: Vec<String> },
    /// Look up artists by ID
    Artists { ids: Vec<String> },
    /// List your playlists
    Playlists {
        #[arg(short, long, default_value_t = 20, allow_negative_numbers = true)]
        limit: i64,
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,
    },
    /// Show a playlist and its tracks
    Playlist { id: String },
    /// Show an artist and their top tracks
    Artist { id: String },
    /// Show a single track
    Track { id: String },
    /// List recently played tracks
    Recent,
    /// Search artists, tracks and playlists
    Search {
        query: String,
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// List genres usable as recommendation seeds
    Genres,
    /// Get recommendations (1 to 5 seeds in total)
    Recommend {
        /// Seed artist ID (repeatable)
        #[arg(long = "artist")]
        artists: Vec<String>,
        /// Seed genre (repeatable)
        #[arg(long = "genre")]
        genres: Vec<String>,
        /// Seed track ID (repeatable)
        #[arg(long = "track")]
        tracks: Vec<String>,
        #[arg(short, long)]
        limit: Option<u32>,
        /// Minimum for a feature, e.g. `energy=0.5` (repeatable)
        #[arg(long = "min", value_parser = parse_feature)]
        min: Vec<(AudioFeature, f64)>,
        /// Maximum for a feature, e.g. `tempo=130` (repeatable)
        #[arg(long = "max", value_parser = parse_feature)]
        max: Vec<(AudioFeature, f64)>,
        /// Target for a feature, e.g. `valence=0.8` (repeatable)
        #[arg(long = "target", value_parser = parse_feature)]
        target: Vec<(AudioFeature, f64)>,
    },
}

fn parse_feature(s: &str) -> Result<(AudioFeature, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FEATURE=VALUE, got `{}`", s))?;
    let feature = name.trim().parse::<AudioFeature>()?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad value for {}: {}", name, e))?;
    Ok((feature, value))
}

fn build_features(
    min: &[(AudioFeature, f64)],
    max: &[(AudioFeature, f64)],
    target: &[(AudioFeature, f64)],
) -> Option<TrackFeatures> {
    let mut features = TrackFeatures::new();
    for feature in AudioFeature::ALL {
        let mut bounds = MinMaxTarget::default();
        if let Some((_, v)) = min.iter().find(|(f, _)| *f == feature) {
            bounds = bounds.min(*v);
        }
        if let Some((_, v)) = max.iter().find(|(f, _)| *f == feature) {
            bounds = bounds.max(*v);
        }
        if let Some((_, v)) = target.iter().find(|(f, _)| *f == feature) {
            bounds = bounds.target(*v);
        }
        if bounds != MinMaxTarget::default() {
            features = features.with(feature, bounds);
        }
    }
    (!features.is_empty()).then_some(features)
}

fn print_tracks(tracks: &[Track]) {
    for (i, track) in tracks.iter().enumerate() {
        println!(
            "{}. {} - {} [{}] (ID: {})",
            i + 1,
            track.artists_string(", "),
            track.name,
            track.duration_formatted(),
            track.id.as_deref().unwrap_or("?")
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::default()
        .with_base_url(cli.api_url)
        .with_market(cli.market);
    let spotify = SpotifyClient::with_config(StaticToken::new(cli.token), config)?;

    match cli.command {
        Commands::Profile => {
            let me = spotify.get_profile().await?;
            println!("{} (ID: {})", me.name(), me.id);
            if let Some(country) = &me.country {
                println!("   Country: {}", country);
            }
            println!("   Followers: {}", me.followers.total);
            println!("   Premium: {}", if me.is_premium() { "yes" } else { "no" });
        }
        Commands::TopTracks {
            range,
            limit,
            offset,
        } => {
            let query = TopItemsQuery::new(range.into(), limit, offset);
            print_tracks(&spotify.get_top_tracks(query).await?);
        }
        Commands::TopArtists {
            range,
            limit,
            offset,
        } => {
            let query = TopItemsQuery::new(range.into(), limit, offset);
            for (i, artist) in spotify.get_top_artists(query).await?.iter().enumerate() {
                println!("{}. {} ({})", i + 1, artist.name, artist.genres_string(", "));
            }
        }
        Commands::Tracks { ids } => {
            let tracks: Vec<Track> = spotify.get_tracks(&ids).await?.into_iter().flatten().collect();
            print_tracks(&tracks);
        }
        Commands::Artists { ids } => {
            for artist in spotify.get_artists(&ids).await?.into_iter().flatten() {
                println!("{} - {} followers (ID: {})", artist.name, artist.followers.total, artist.id);
            }
        }
        Commands::Playlists { limit, offset } => {
            let playlists = spotify.get_playlists(PlaylistQuery::new(limit, offset)).await?;
            for (i, playlist) in playlists.iter().enumerate() {
                println!(
                    "{}. {} by {} - {} tracks (ID: {})",
                    i + 1,
                    playlist.name,
                    playlist.owner_name(),
                    playlist.track_count(),
                    playlist.id
                );
            }
        }
        Commands::Playlist { id } => {
            let (playlist, items) = spotify.get_playlist(&id).await?;
            println!("{} by {}", playlist.name, playlist.owner_name());
            if let Some(description) = playlist.description.as_deref().filter(|d| !d.is_empty()) {
                println!("   {}", description);
            }
            let minutes = spotlens::models::playlist::total_duration_ms(&items) / 60_000;
            println!("   {} tracks, {} min", playlist.track_count(), minutes);
            let tracks: Vec<Track> = items.into_iter().filter_map(|item| item.track).collect();
            print_tracks(&tracks);
        }
        Commands::Artist { id } => {
            let (artist, top_tracks) = spotify.get_artist(&id).await?;
            println!("{} - {} followers", artist.name, artist.followers.total);
            println!("   Genres: {}", artist.genres_string(", "));
            print_tracks(&top_tracks);
        }
        Commands::Track { id } => {
            let track = spotify.get_track(&id).await?;
            print_tracks(std::slice::from_ref(&track));
            if let Some(album) = &track.album {
                println!("   Album: {} ({})", album.name, album.release_date);
            }
        }
        Commands::Recent => {
            print_tracks(&spotify.get_recent_tracks().await?);
        }
        Commands::Search { query, limit } => {
            println!("Searching for '{}'...", query);
            let mut search = SearchQuery::new(query);
            if let Some(limit) = limit {
                search = search.with_limit(limit);
            }
            let results = spotify.search(search).await?;
            println!("Tracks:");
            print_tracks(&results.tracks.items);
            println!("Artists:");
            for artist in &results.artists.items {
                println!("   {} (ID: {})", artist.name, artist.id);
            }
            println!("Playlists:");
            for playlist in results.playlists() {
                println!("   {} by {} (ID: {})", playlist.name, playlist.owner_name(), playlist.id);
            }
        }
        Commands::Genres => {
            for genre in spotify.get_genres().await? {
                println!("{}", genre);
            }
        }
        Commands::Recommend {
            artists,
            genres,
            tracks,
            limit,
            min,
            max,
            target,
        } => {
            let seeds = RecommendationSeed {
                seed_artists: artists,
                seed_genres: genres,
                seed_tracks: tracks,
            };
            let mut request = RecommendationRequest::new(seeds);
            request.limit = limit;
            request.features = build_features(&min, &max, &target);

            print_tracks(&spotify.generate_playlist(&request).await?);
        }
    }

    Ok(())
}
