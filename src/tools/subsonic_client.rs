use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;
use std::error::Error;

use subsonic_plugin::config::PluginSettings;
use subsonic_plugin::subsonic::{AlbumListQuery, AlbumListType, Connection, CoverArtId, RandomSongsQuery};

/// Command line client for querying a Subsonic server directly
#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Server URL, e.g. https://music.example.com
    #[clap(short = 'H', long, env = "SUBSONIC_URL")]
    url: Option<String>,

    #[clap(short, long, env = "SUBSONIC_USERNAME")]
    username: Option<String>,

    #[clap(short, long, env = "SUBSONIC_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Read server and credentials from a plugin settings file
    #[clap(short, long)]
    config: Option<String>,

    /// Timeout in seconds for HTTP requests
    #[clap(short = 't', long, default_value_t = 15)]
    timeout: u64,

    /// Enable debug logging for troubleshooting
    #[clap(long)]
    debug: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the server accepts the credentials
    Ping,

    /// List all artists
    Artists,

    /// List all playlists
    Playlists,

    /// Show the entries of a playlist
    Playlist { id: i64 },

    /// Show the albums of an artist
    Artist { id: i64 },

    /// Show the songs of an album
    Album { id: i64 },

    /// Show a music directory
    Directory { id: i64 },

    /// List all genres
    Genres,

    /// List albums ordered by a criterion (newest, random, alphabeticalByName, ...)
    Albums {
        #[clap(default_value = "newest")]
        list_type: String,

        #[clap(short, long, default_value_t = 20)]
        size: u32,

        #[clap(short, long, default_value_t = 0)]
        offset: u32,
    },

    /// List all albums of a genre
    AlbumsByGenre { genre: String },

    /// Random songs, optionally filtered
    Random {
        #[clap(short, long, default_value_t = 10)]
        size: u32,

        #[clap(short, long)]
        genre: Option<String>,

        #[clap(long)]
        from_year: Option<u32>,

        #[clap(long)]
        to_year: Option<u32>,
    },

    /// Print the URL of a cover art image
    CoverArtUrl {
        id: String,

        #[clap(short, long)]
        size: Option<u32>,
    },

    /// Print the URL to stream a song
    StreamUrl {
        id: i64,

        /// Maximum bitrate in kbit/s, 0 for no limit
        #[clap(short, long, default_value_t = 0)]
        bitrate: u32,

        /// Transcoding format
        #[clap(short, long)]
        format: Option<String>,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .init();
        info!("Debug logging enabled");
    } else {
        env_logger::init_from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"));
    }

    let mut settings = match &cli.config {
        Some(path) => PluginSettings::from_file(path)?,
        None => PluginSettings::default(),
    };
    if let Some(url) = cli.url {
        settings.subsonic_url = url;
    }
    if let Some(username) = cli.username {
        settings.username = username;
    }
    if let Some(password) = cli.password {
        settings.password = password;
    }
    if settings.subsonic_url.is_empty() {
        return Err("No server given. Use --url, SUBSONIC_URL or --config.".into());
    }

    let connection = Connection::new(&settings.subsonic_url, &settings.username, &settings.password)?
        .with_timeout(cli.timeout);
    info!("Using Subsonic server {}:{}", connection.host(), connection.port());

    match cli.command {
        Commands::Ping => {
            connection.ping()?;
            println!("OK: {}:{} as {}", connection.host(), connection.port(), connection.username());
        }
        Commands::Artists => print_json(&connection.walk_artists()?)?,
        Commands::Playlists => print_json(&connection.walk_playlists()?)?,
        Commands::Playlist { id } => print_json(&connection.get_playlist(id)?)?,
        Commands::Artist { id } => print_json(&connection.get_artist(id)?)?,
        Commands::Album { id } => print_json(&connection.get_album(id)?)?,
        Commands::Directory { id } => print_json(&connection.get_music_directory(id)?)?,
        Commands::Genres => print_json(&connection.walk_genres()?)?,
        Commands::Albums { list_type, size, offset } => {
            let list_type: AlbumListType = list_type
                .parse()
                .map_err(|_| format!("Unknown album list type: {}", list_type))?;
            let query = AlbumListQuery::new(list_type).with_page(size, offset);
            print_json(&connection.get_album_list2(&query)?.album)?
        }
        Commands::AlbumsByGenre { genre } => print_json(&connection.walk_album_list_genre(&genre)?)?,
        Commands::Random {
            size,
            genre,
            from_year,
            to_year,
        } => {
            let query = RandomSongsQuery {
                genre,
                from_year,
                to_year,
                ..RandomSongsQuery::with_size(size)
            };
            print_json(&connection.walk_random_songs(&query)?)?
        }
        Commands::CoverArtUrl { id, size } => {
            println!("{}", connection.cover_art_url(&CoverArtId::from(id.as_str()), size));
        }
        Commands::StreamUrl { id, bitrate, format } => {
            println!("{}", connection.stream_url(id, bitrate, format.as_deref()));
        }
    }

    Ok(())
}
