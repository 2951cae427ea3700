use std::fmt;

use serde::{Deserialize, Serialize};

use super::deserialize::{int_id, lenient_bool, one_or_many, opt_cover_art, opt_int_id, opt_u32, opt_u64};

/// Opaque cover art token as handed out by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoverArtId(pub String);

impl CoverArtId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CoverArtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CoverArtId {
    fn from(value: &str) -> Self {
        CoverArtId(value.to_string())
    }
}

impl From<i64> for CoverArtId {
    fn from(value: i64) -> Self {
        CoverArtId(value.to_string())
    }
}

/// Error element of a failed response
#[derive(Debug, Clone, Deserialize)]
pub struct SubsonicError {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

/// Result of `getArtists`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artists {
    #[serde(default)]
    pub ignored_articles: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub index: Vec<ArtistIndex>,
}

/// One letter group of the artist index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistIndex {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub artist: Vec<Artist>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    #[serde(deserialize_with = "int_id")]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "opt_cover_art")]
    pub cover_art: Option<CoverArtId>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub album_count: Option<u32>,
}

/// Result of `getArtist`: the artist and its albums
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistWithAlbums {
    #[serde(flatten)]
    pub artist: Artist,
    #[serde(default, deserialize_with = "one_or_many")]
    pub album: Vec<Album>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    #[serde(deserialize_with = "int_id")]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default, deserialize_with = "opt_int_id")]
    pub artist_id: Option<i64>,
    #[serde(default, deserialize_with = "opt_cover_art")]
    pub cover_art: Option<CoverArtId>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub song_count: Option<u32>,
    #[serde(default, deserialize_with = "opt_u64")]
    pub duration: Option<u64>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub year: Option<u32>,
    #[serde(default)]
    pub genre: Option<String>,
}

/// Result of `getAlbum`: the album and its songs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumWithSongs {
    #[serde(flatten)]
    pub album: Album,
    #[serde(default, deserialize_with = "one_or_many")]
    pub song: Vec<Child>,
}

/// Result of `getAlbumList2`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbumList2 {
    #[serde(default, deserialize_with = "one_or_many")]
    pub album: Vec<Album>,
}

/// Result of `getPlaylists`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Playlists {
    #[serde(default, deserialize_with = "one_or_many")]
    pub playlist: Vec<Playlist>,
}

/// A playlist; `entry` is only filled by `getPlaylist`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    #[serde(deserialize_with = "int_id")]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub song_count: Option<u32>,
    #[serde(default, deserialize_with = "opt_u64")]
    pub duration: Option<u64>,
    #[serde(default, deserialize_with = "opt_cover_art")]
    pub cover_art: Option<CoverArtId>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub entry: Vec<Child>,
}

/// Result of `getMusicDirectory`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directory {
    #[serde(deserialize_with = "int_id")]
    pub id: i64,
    #[serde(default, deserialize_with = "opt_int_id")]
    pub parent: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub child: Vec<Child>,
}

/// A song or a sub-directory. Tracks in albums, playlists and random
/// selections all use this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    #[serde(deserialize_with = "int_id")]
    pub id: i64,
    #[serde(default, deserialize_with = "opt_int_id")]
    pub parent: Option<i64>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_dir: bool,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub track: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub year: Option<u32>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "opt_cover_art")]
    pub cover_art: Option<CoverArtId>,
    #[serde(default, deserialize_with = "opt_u64")]
    pub duration: Option<u64>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub bit_rate: Option<u32>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default, deserialize_with = "opt_int_id")]
    pub album_id: Option<i64>,
    #[serde(default, deserialize_with = "opt_int_id")]
    pub artist_id: Option<i64>,
}

/// Result of `getGenres`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genres {
    #[serde(default, deserialize_with = "one_or_many")]
    pub genre: Vec<Genre>,
}

/// A genre is identified by its name, carried in `value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    #[serde(default)]
    pub value: String,
    #[serde(default, deserialize_with = "opt_u32")]
    pub song_count: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub album_count: Option<u32>,
}

/// Result of `getRandomSongs`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomSongs {
    #[serde(default, deserialize_with = "one_or_many")]
    pub song: Vec<Child>,
}
