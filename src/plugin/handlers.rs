use log::{debug, warn};

use crate::data::{ContentType, ListItem, Mode};
use crate::subsonic::RandomSongsQuery;

use super::host::DirectoryHost;
use super::plugin::{label_or_unknown, Plugin};
use super::PluginError;

/// Renders the complete listing of one mode
pub trait ModeHandler: Sync {
    fn render(&self, plugin: &Plugin, host: &mut dyn DirectoryHost) -> Result<(), PluginError>;
}

/// The handler responsible for `mode`
pub fn handler_for(mode: Mode) -> &'static dyn ModeHandler {
    match mode {
        Mode::MainPage => &MainPage,
        Mode::PlaylistsList => &PlaylistsList,
        Mode::PlaylistList => &PlaylistList,
        Mode::GenreList => &GenreList,
        Mode::AlbumsByGenreList => &AlbumsByGenreList,
        Mode::ArtistList => &ArtistList,
        Mode::AlbumList => &AlbumList,
        Mode::TrackList => &TrackList,
        Mode::RandomList => &RandomList,
        Mode::RandomByGenreList => &RandomByGenreList,
        Mode::RandomByGenreTrackList => &RandomByGenreTrackList,
        Mode::RandomByYearList => &RandomByYearList,
    }
}

/// Fixed menu; each entry links to another mode and carries its label as
/// `foldername`
fn render_menu(plugin: &Plugin, host: &mut dyn DirectoryHost, entries: &[(Mode, &str)]) -> Result<(), PluginError> {
    for (mode, label) in entries {
        let url = plugin.build_url(*mode, &[("foldername", label.to_string())]);
        host.add_directory_item(&url, &ListItem::new(*label), true)?;
    }
    host.end_of_directory()
}

/// One folder per genre, each leading to `target` with the genre name
fn render_genres(plugin: &Plugin, host: &mut dyn DirectoryHost, target: Mode) -> Result<(), PluginError> {
    for genre in plugin.connection().walk_genres()? {
        plugin.add_folder(host, &genre.value, target, &[("foldername", genre.value.clone())], None)?;
    }
    host.end_of_directory()
}

fn render_random_tracks(plugin: &Plugin, host: &mut dyn DirectoryHost, query: RandomSongsQuery) -> Result<(), PluginError> {
    for track in plugin.connection().walk_random_songs(&query)? {
        plugin.add_track(host, &track, true)?;
    }
    host.set_content(ContentType::Songs)?;
    host.end_of_directory()
}

pub struct MainPage;

impl ModeHandler for MainPage {
    fn render(&self, plugin: &Plugin, host: &mut dyn DirectoryHost) -> Result<(), PluginError> {
        render_menu(
            plugin,
            host,
            &[
                (Mode::PlaylistsList, "Playlists"),
                (Mode::ArtistList, "Artists"),
                (Mode::GenreList, "Genres"),
                (Mode::RandomList, "Random songs"),
            ],
        )
    }
}

pub struct PlaylistsList;

impl ModeHandler for PlaylistsList {
    fn render(&self, plugin: &Plugin, host: &mut dyn DirectoryHost) -> Result<(), PluginError> {
        for playlist in plugin.connection().walk_playlists()? {
            let url = plugin.build_url(Mode::PlaylistList, &[("playlist_id", playlist.id.to_string())]);

            let mut item = ListItem::new(label_or_unknown(&playlist.name));
            if let Some(cover_art) = &playlist.cover_art {
                item = item.with_icon(&plugin.connection().cover_art_url(cover_art, None));
            }
            host.add_directory_item(&url, &item, true)?;
        }
        host.end_of_directory()
    }
}

pub struct PlaylistList;

impl ModeHandler for PlaylistList {
    fn render(&self, plugin: &Plugin, host: &mut dyn DirectoryHost) -> Result<(), PluginError> {
        let playlist_id = plugin.request().require_id("playlist_id")?;

        for track in plugin.connection().walk_playlist(playlist_id)? {
            plugin.add_track(host, &track, true)?;
        }
        host.set_content(ContentType::Songs)?;
        host.end_of_directory()
    }
}

pub struct GenreList;

impl ModeHandler for GenreList {
    fn render(&self, plugin: &Plugin, host: &mut dyn DirectoryHost) -> Result<(), PluginError> {
        render_genres(plugin, host, Mode::AlbumsByGenreList)
    }
}

pub struct AlbumsByGenreList;

impl ModeHandler for AlbumsByGenreList {
    fn render(&self, plugin: &Plugin, host: &mut dyn DirectoryHost) -> Result<(), PluginError> {
        let genre = plugin.request().require_arg("foldername")?;

        for album in plugin.connection().walk_album_list_genre(genre)? {
            plugin.add_album(host, &album, true)?;
        }
        host.set_content(ContentType::Albums)?;
        host.end_of_directory()
    }
}

pub struct ArtistList;

impl ModeHandler for ArtistList {
    fn render(&self, plugin: &Plugin, host: &mut dyn DirectoryHost) -> Result<(), PluginError> {
        for artist in plugin.connection().walk_artists()? {
            plugin.add_folder(
                host,
                &artist.name,
                Mode::AlbumList,
                &[("artist_id", artist.id.to_string())],
                artist.cover_art.as_ref(),
            )?;
        }
        host.set_content(ContentType::Artists)?;
        host.end_of_directory()
    }
}

pub struct AlbumList;

impl ModeHandler for AlbumList {
    fn render(&self, plugin: &Plugin, host: &mut dyn DirectoryHost) -> Result<(), PluginError> {
        let artist_id = plugin.request().require_id("artist_id")?;

        for album in plugin.connection().walk_artist(artist_id)? {
            plugin.add_album(host, &album, false)?;
        }
        host.set_content(ContentType::Albums)?;
        host.end_of_directory()
    }
}

pub struct TrackList;

impl ModeHandler for TrackList {
    fn render(&self, plugin: &Plugin, host: &mut dyn DirectoryHost) -> Result<(), PluginError> {
        let album_id = plugin.request().require_id("album_id")?;

        for track in plugin.connection().walk_album(album_id)? {
            plugin.add_track(host, &track, false)?;
        }
        host.set_content(ContentType::Songs)?;
        host.end_of_directory()
    }
}

pub struct RandomList;

impl ModeHandler for RandomList {
    fn render(&self, plugin: &Plugin, host: &mut dyn DirectoryHost) -> Result<(), PluginError> {
        render_menu(
            plugin,
            host,
            &[
                (Mode::RandomByGenreList, "By genre"),
                (Mode::RandomByYearList, "By year"),
            ],
        )
    }
}

pub struct RandomByGenreList;

impl ModeHandler for RandomByGenreList {
    fn render(&self, plugin: &Plugin, host: &mut dyn DirectoryHost) -> Result<(), PluginError> {
        render_genres(plugin, host, Mode::RandomByGenreTrackList)
    }
}

pub struct RandomByGenreTrackList;

impl ModeHandler for RandomByGenreTrackList {
    fn render(&self, plugin: &Plugin, host: &mut dyn DirectoryHost) -> Result<(), PluginError> {
        let genre = plugin.request().require_arg("foldername")?;

        let query = RandomSongsQuery {
            genre: Some(genre.to_string()),
            ..RandomSongsQuery::with_size(plugin.settings().random_count)
        };
        render_random_tracks(plugin, host, query)
    }
}

pub struct RandomByYearList;

impl ModeHandler for RandomByYearList {
    fn render(&self, plugin: &Plugin, host: &mut dyn DirectoryHost) -> Result<(), PluginError> {
        let from_year = parse_year("from_year", host.input_numeric("From year")?)?;
        let to_year = parse_year("to_year", host.input_numeric("To year")?)?;
        debug!("Random songs from {:?} to {:?}", from_year, to_year);

        let query = RandomSongsQuery {
            from_year,
            to_year,
            ..RandomSongsQuery::with_size(plugin.settings().random_count)
        };
        render_random_tracks(plugin, host, query)
    }
}

/// A cancelled or empty prompt means "no bound"
fn parse_year(name: &'static str, input: Option<String>) -> Result<Option<u32>, PluginError> {
    match input.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<u32>().map(Some).map_err(|_| {
            warn!("Invalid {}: {}", name, value);
            PluginError::InvalidArgument {
                name,
                value: value.to_string(),
            }
        }),
    }
}
