use strum_macros::{Display, EnumString};

/// Ordering criteria accepted by `getAlbumList2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum AlbumListType {
    Random,
    Newest,
    Highest,
    Frequent,
    Recent,
    AlphabeticalByName,
    AlphabeticalByArtist,
    Starred,
    ByYear,
    ByGenre,
}

/// Parameters of a `getAlbumList2` call
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumListQuery {
    pub list_type: AlbumListType,
    pub size: u32,
    pub offset: u32,
    pub from_year: Option<u32>,
    pub to_year: Option<u32>,
    pub genre: Option<String>,
    pub music_folder_id: Option<i64>,
}

impl AlbumListQuery {
    pub fn new(list_type: AlbumListType) -> Self {
        AlbumListQuery {
            list_type,
            size: 10,
            offset: 0,
            from_year: None,
            to_year: None,
            genre: None,
            music_folder_id: None,
        }
    }

    /// Albums tagged with `genre`
    pub fn by_genre(genre: &str) -> Self {
        AlbumListQuery {
            genre: Some(genre.to_string()),
            ..Self::new(AlbumListType::ByGenre)
        }
    }

    pub fn with_page(mut self, size: u32, offset: u32) -> Self {
        self.size = size;
        self.offset = offset;
        self
    }

    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("type", self.list_type.to_string()),
            ("size", self.size.to_string()),
            ("offset", self.offset.to_string()),
        ];
        if let Some(from_year) = self.from_year {
            params.push(("fromYear", from_year.to_string()));
        }
        if let Some(to_year) = self.to_year {
            params.push(("toYear", to_year.to_string()));
        }
        if let Some(genre) = &self.genre {
            params.push(("genre", genre.clone()));
        }
        if let Some(folder) = self.music_folder_id {
            params.push(("musicFolderId", folder.to_string()));
        }
        params
    }
}

/// Parameters of a `getRandomSongs` call
#[derive(Debug, Clone, PartialEq)]
pub struct RandomSongsQuery {
    pub size: u32,
    pub genre: Option<String>,
    pub from_year: Option<u32>,
    pub to_year: Option<u32>,
    pub music_folder_id: Option<i64>,
}

impl Default for RandomSongsQuery {
    fn default() -> Self {
        RandomSongsQuery {
            size: 10,
            genre: None,
            from_year: None,
            to_year: None,
            music_folder_id: None,
        }
    }
}

impl RandomSongsQuery {
    pub fn with_size(size: u32) -> Self {
        RandomSongsQuery {
            size,
            ..Default::default()
        }
    }

    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("size", self.size.to_string())];
        if let Some(genre) = &self.genre {
            params.push(("genre", genre.clone()));
        }
        if let Some(from_year) = self.from_year {
            params.push(("fromYear", from_year.to_string()));
        }
        if let Some(to_year) = self.to_year {
            params.push(("toYear", to_year.to_string()));
        }
        if let Some(folder) = self.music_folder_id {
            params.push(("musicFolderId", folder.to_string()));
        }
        params
    }
}
