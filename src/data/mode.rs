use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Listing modes, named exactly as they appear in the `mode` URL argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[derive(Default)]
pub enum Mode {
    /// Top level menu
    #[default]
    MainPage,
    /// All playlists
    PlaylistsList,
    /// Tracks of one playlist (`playlist_id`)
    PlaylistList,
    /// All genres, leading to their albums
    GenreList,
    /// Albums of one genre (`foldername`)
    AlbumsByGenreList,
    /// All artists
    ArtistList,
    /// Albums of one artist (`artist_id`)
    AlbumList,
    /// Tracks of one album (`album_id`)
    TrackList,
    /// Random selection menu
    RandomList,
    /// All genres, leading to random tracks
    RandomByGenreList,
    /// Random tracks of one genre (`foldername`)
    RandomByGenreTrackList,
    /// Random tracks of a year range entered by the user
    RandomByYearList,
}
