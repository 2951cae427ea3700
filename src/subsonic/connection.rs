use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::constants::{ALBUM_LIST_MAX_PAGES, ALBUM_LIST_PAGE_SIZE, API_VERSION, CLIENT_NAME, DEFAULT_TIMEOUT_SECS, REST_PATH};
use crate::helpers::http_client::{new_http_client, HttpClient, HttpClientError};
use crate::helpers::sanitize::redact_credentials;

use super::models::{
    Album, AlbumList2, AlbumWithSongs, Artist, ArtistWithAlbums, Artists, Child, CoverArtId,
    Directory, Genre, Genres, Playlist, Playlists, RandomSongs, SubsonicError,
};
use super::queries::{AlbumListQuery, RandomSongsQuery};

/// Errors that can occur when talking to a Subsonic server
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("Invalid server URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unexpected scheme '{scheme}' for URL: {url}")]
    UnsupportedScheme { scheme: String, url: String },

    #[error("Expected hostname for URL: {0}")]
    MissingHostname(String),

    #[error("HTTP request error: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Subsonic server error {code}: {message}")]
    Server { code: i32, message: String },

    #[error("Empty response from server")]
    EmptyResponse,
}

impl From<HttpClientError> for ConnectionError {
    fn from(error: HttpClientError) -> Self {
        match error {
            HttpClientError::RequestError(msg) => ConnectionError::Request(msg),
            HttpClientError::ParseError(msg) => ConnectionError::Parse(msg),
            HttpClientError::ServerError(msg) => ConnectionError::Http(msg),
            HttpClientError::EmptyResponse => ConnectionError::EmptyResponse,
        }
    }
}

/// Connection to a Subsonic server
///
/// Every fetch returns typed records whose list fields are always lists and
/// whose identifiers are integers. The `*_url` methods only compute the
/// authenticated URL of a binary resource and never perform a request.
#[derive(Clone)]
pub struct Connection {
    /// "<scheme>://<hostname>"
    host: String,
    port: u16,
    username: String,
    password: String,
    app_name: String,
    api_version: String,
    client: Arc<dyn HttpClient>,
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("app_name", &self.app_name)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl Connection {
    /// Create a connection from the full server URL
    ///
    /// Only `http` and `https` are accepted; a URL without scheme is treated
    /// as `http`. The port defaults to 80 or 443. Any path in the URL is
    /// ignored, requests always go to `/rest/<method>.view`.
    pub fn new(url: &str, username: &str, password: &str) -> Result<Self, ConnectionError> {
        let (host, port) = parse_server_url(url)?;
        debug!("Subsonic server at {}:{} (user {})", host, port, username);

        Ok(Connection {
            host,
            port,
            username: username.to_string(),
            password: password.to_string(),
            app_name: CLIENT_NAME.to_string(),
            api_version: API_VERSION.to_string(),
            client: Arc::from(new_http_client(DEFAULT_TIMEOUT_SECS)),
        })
    }

    /// Set a custom timeout for the client
    pub fn with_timeout(self, timeout_secs: u64) -> Self {
        Self {
            client: Arc::from(new_http_client(timeout_secs)),
            ..self
        }
    }

    /// Set a specific HTTP client implementation
    pub fn with_client(self, client: Box<dyn HttpClient>) -> Self {
        Self {
            client: Arc::from(client),
            ..self
        }
    }

    /// Client name sent as the `c` parameter
    pub fn with_app_name(self, app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            ..self
        }
    }

    pub fn with_api_version(self, api_version: &str) -> Self {
        Self {
            api_version: api_version.to_string(),
            ..self
        }
    }

    /// Scheme and hostname of the server, e.g. "https://music.example.com"
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Full URL of a REST method including credentials and `params`
    fn method_url(&self, method: &str, params: &[(&str, String)]) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("u", &self.username)
            .append_pair("p", &self.password)
            .append_pair("v", &self.api_version)
            .append_pair("c", &self.app_name)
            .append_pair("f", "json");
        for (key, value) in params {
            query.append_pair(key, value);
        }

        format!(
            "{}:{}/{}/{}.view?{}",
            self.host,
            self.port,
            REST_PATH,
            method,
            query.finish()
        )
    }

    /// Perform a call and return the checked `subsonic-response` element
    fn request(&self, method: &str, params: &[(&str, String)]) -> Result<Value, ConnectionError> {
        let url = self.method_url(method, params);
        debug!("Subsonic request: {}", redact_credentials(&url));

        let mut document = self.client.get_json(&url)?;
        let mut response = match document.get_mut("subsonic-response") {
            Some(response) => response.take(),
            None => {
                return Err(ConnectionError::Parse(format!(
                    "missing 'subsonic-response' element in {} response",
                    method
                )))
            }
        };

        let status = response
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        if status != "ok" {
            let failure = response
                .get_mut("error")
                .map(Value::take)
                .and_then(|e| serde_json::from_value::<SubsonicError>(e).ok())
                .unwrap_or_else(|| SubsonicError {
                    code: 0,
                    message: format!("unexpected status '{}'", status),
                });
            error!("Subsonic call {} failed: {} (code {})", method, failure.message, failure.code);
            return Err(ConnectionError::Server {
                code: failure.code,
                message: failure.message,
            });
        }

        Ok(response)
    }

    /// Call `method` and deserialize the `key` element of the response
    fn fetch<T: DeserializeOwned>(&self, method: &str, params: &[(&str, String)], key: &str) -> Result<T, ConnectionError> {
        let mut response = self.request(method, params)?;
        match response.get_mut(key).map(Value::take) {
            Some(payload) => serde_json::from_value(payload)
                .map_err(|e| ConnectionError::Parse(format!("{} response: {}", method, e))),
            None => Err(ConnectionError::Parse(format!("missing '{}' in {} response", key, method))),
        }
    }

    /// Like [`Connection::fetch`], but an absent element is an empty result
    fn fetch_or_default<T: DeserializeOwned + Default>(
        &self,
        method: &str,
        params: &[(&str, String)],
        key: &str,
    ) -> Result<T, ConnectionError> {
        let mut response = self.request(method, params)?;
        match response.get_mut(key).map(Value::take) {
            Some(Value::Null) | None => Ok(T::default()),
            Some(payload) => serde_json::from_value(payload)
                .map_err(|e| ConnectionError::Parse(format!("{} response: {}", method, e))),
        }
    }

    /// Check that the server is reachable and accepts the credentials
    pub fn ping(&self) -> Result<(), ConnectionError> {
        self.request("ping", &[]).map(|_| ())
    }

    pub fn get_artists(&self, music_folder_id: Option<i64>) -> Result<Artists, ConnectionError> {
        let mut params = Vec::new();
        if let Some(folder) = music_folder_id {
            params.push(("musicFolderId", folder.to_string()));
        }
        self.fetch_or_default("getArtists", &params, "artists")
    }

    pub fn get_playlists(&self, username: Option<&str>) -> Result<Playlists, ConnectionError> {
        let mut params = Vec::new();
        if let Some(username) = username {
            params.push(("username", username.to_string()));
        }
        self.fetch_or_default("getPlaylists", &params, "playlists")
    }

    pub fn get_playlist(&self, id: i64) -> Result<Playlist, ConnectionError> {
        self.fetch("getPlaylist", &[("id", id.to_string())], "playlist")
    }

    pub fn get_artist(&self, id: i64) -> Result<ArtistWithAlbums, ConnectionError> {
        self.fetch("getArtist", &[("id", id.to_string())], "artist")
    }

    pub fn get_album(&self, id: i64) -> Result<AlbumWithSongs, ConnectionError> {
        self.fetch("getAlbum", &[("id", id.to_string())], "album")
    }

    pub fn get_music_directory(&self, id: i64) -> Result<Directory, ConnectionError> {
        self.fetch("getMusicDirectory", &[("id", id.to_string())], "directory")
    }

    pub fn get_album_list2(&self, query: &AlbumListQuery) -> Result<AlbumList2, ConnectionError> {
        self.fetch_or_default("getAlbumList2", &query.params(), "albumList2")
    }

    pub fn get_genres(&self) -> Result<Genres, ConnectionError> {
        self.fetch_or_default("getGenres", &[], "genres")
    }

    pub fn get_random_songs(&self, query: &RandomSongsQuery) -> Result<RandomSongs, ConnectionError> {
        self.fetch_or_default("getRandomSongs", &query.params(), "randomSongs")
    }

    /// All artists of the index, in index order
    pub fn walk_artists(&self) -> Result<Vec<Artist>, ConnectionError> {
        let artists = self.get_artists(None)?;
        Ok(artists.index.into_iter().flat_map(|index| index.artist).collect())
    }

    pub fn walk_playlists(&self) -> Result<Vec<Playlist>, ConnectionError> {
        Ok(self.get_playlists(None)?.playlist)
    }

    /// Entries of one playlist
    pub fn walk_playlist(&self, id: i64) -> Result<Vec<Child>, ConnectionError> {
        Ok(self.get_playlist(id)?.entry)
    }

    /// Albums of one artist
    pub fn walk_artist(&self, id: i64) -> Result<Vec<Album>, ConnectionError> {
        Ok(self.get_artist(id)?.album)
    }

    /// Songs of one album
    pub fn walk_album(&self, id: i64) -> Result<Vec<Child>, ConnectionError> {
        Ok(self.get_album(id)?.song)
    }

    pub fn walk_directory(&self, id: i64) -> Result<Vec<Child>, ConnectionError> {
        Ok(self.get_music_directory(id)?.child)
    }

    pub fn walk_genres(&self) -> Result<Vec<Genre>, ConnectionError> {
        Ok(self.get_genres()?.genre)
    }

    pub fn walk_random_songs(&self, query: &RandomSongsQuery) -> Result<Vec<Child>, ConnectionError> {
        Ok(self.get_random_songs(query)?.song)
    }

    /// All albums of a genre, fetched page by page until a short page arrives
    ///
    /// Paging also stops at a page that adds no new album and after
    /// `ALBUM_LIST_MAX_PAGES` pages, for servers that ignore `offset`.
    pub fn walk_album_list_genre(&self, genre: &str) -> Result<Vec<Album>, ConnectionError> {
        let mut albums = Vec::new();
        let mut seen = HashSet::new();
        let mut offset = 0;

        for _ in 0..ALBUM_LIST_MAX_PAGES {
            let query = AlbumListQuery::by_genre(genre).with_page(ALBUM_LIST_PAGE_SIZE, offset);
            let page = self.get_album_list2(&query)?.album;
            let count = page.len() as u32;

            let before = albums.len();
            albums.extend(page.into_iter().filter(|album| seen.insert(album.id)));
            if count < ALBUM_LIST_PAGE_SIZE {
                break;
            }
            if albums.len() == before {
                warn!("Server repeated a page of genre '{}' at offset {}, stopping", genre, offset);
                break;
            }
            offset += count;
        }

        debug!("Genre '{}' has {} albums", genre, albums.len());
        Ok(albums)
    }

    /// URL of a cover art image, computed without contacting the server
    pub fn cover_art_url(&self, id: &CoverArtId, size: Option<u32>) -> String {
        let mut params = vec![("id", id.to_string())];
        if let Some(size) = size {
            params.push(("size", size.to_string()));
        }
        self.method_url("getCoverArt", &params)
    }

    /// URL to stream a song, computed without contacting the server
    ///
    /// A `max_bit_rate` of 0 means no limit. `format` requests transcoding.
    pub fn stream_url(&self, id: i64, max_bit_rate: u32, format: Option<&str>) -> String {
        let mut params = vec![("id", id.to_string()), ("maxBitRate", max_bit_rate.to_string())];
        if let Some(format) = format.filter(|f| !f.is_empty()) {
            params.push(("format", format.to_string()));
        }
        self.method_url("stream", &params)
    }
}

/// Split a server URL into "<scheme>://<hostname>" and the effective port
fn parse_server_url(url: &str) -> Result<(String, u16), ConnectionError> {
    // "host:4040" would otherwise parse with "host" as the scheme
    let parsed = if url.contains("://") {
        Url::parse(url)
    } else {
        Url::parse(&format!("http://{}", url))
    }
    .map_err(|e| invalid_url(url, e))?;

    let hostname = match parsed.host_str() {
        Some(hostname) if !hostname.is_empty() => hostname.to_string(),
        _ => return Err(ConnectionError::MissingHostname(url.to_string())),
    };

    let default_port = match parsed.scheme() {
        "http" => 80,
        "https" => 443,
        scheme => {
            return Err(ConnectionError::UnsupportedScheme {
                scheme: scheme.to_string(),
                url: url.to_string(),
            })
        }
    };

    let port = parsed.port().unwrap_or(default_port);
    Ok((format!("{}://{}", parsed.scheme(), hostname), port))
}

fn invalid_url(url: &str, error: url::ParseError) -> ConnectionError {
    match error {
        url::ParseError::EmptyHost => ConnectionError::MissingHostname(url.to_string()),
        other => ConnectionError::InvalidUrl {
            url: url.to_string(),
            reason: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::mock_http::ScriptedHttpClient;
    use serde_json::json;

    fn connection(client: &ScriptedHttpClient) -> Connection {
        Connection::new("https://music.example.com", "alice", "s3cret")
            .unwrap()
            .with_client(Box::new(client.clone()))
    }

    fn query_pairs(url: &str) -> Vec<(String, String)> {
        Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn has_pair(url: &str, key: &str, value: &str) -> bool {
        query_pairs(url).iter().any(|(k, v)| k == key && v == value)
    }

    #[test]
    fn test_https_default_port() {
        let conn = Connection::new("https://music.example.com/app", "u", "p").unwrap();
        assert_eq!(conn.host(), "https://music.example.com");
        assert_eq!(conn.port(), 443);
    }

    #[test]
    fn test_explicit_port() {
        let conn = Connection::new("http://music.example.com:8080", "u", "p").unwrap();
        assert_eq!(conn.host(), "http://music.example.com");
        assert_eq!(conn.port(), 8080);
    }

    #[test]
    fn test_http_default_port() {
        let conn = Connection::new("http://music.example.com", "u", "p").unwrap();
        assert_eq!(conn.port(), 80);
    }

    #[test]
    fn test_missing_scheme_defaults_to_http() {
        let conn = Connection::new("music.example.com", "u", "p").unwrap();
        assert_eq!(conn.host(), "http://music.example.com");
        assert_eq!(conn.port(), 80);
    }

    #[test]
    fn test_missing_scheme_with_port() {
        for (url, host) in [
            ("localhost:4040", "http://localhost"),
            ("music.example.com:4040", "http://music.example.com"),
            ("192.168.1.5:4040", "http://192.168.1.5"),
        ] {
            let conn = Connection::new(url, "u", "p").unwrap();
            assert_eq!(conn.host(), host);
            assert_eq!(conn.port(), 4040);
        }

        let conn = Connection::new("localhost:4040/airsonic", "u", "p").unwrap();
        let url = conn.stream_url(1, 0, None);
        assert!(url.starts_with("http://localhost:4040/rest/stream.view?"));
    }

    #[test]
    fn test_unsupported_scheme() {
        let result = Connection::new("ftp://music.example.com", "u", "p");
        assert!(matches!(result, Err(ConnectionError::UnsupportedScheme { ref scheme, .. }) if scheme == "ftp"));
    }

    #[test]
    fn test_missing_hostname() {
        let result = Connection::new("https://", "u", "p");
        assert!(matches!(result, Err(ConnectionError::MissingHostname(_))));
    }

    #[test]
    fn test_debug_hides_password() {
        let conn = Connection::new("https://music.example.com", "alice", "s3cret").unwrap();
        let printed = format!("{:?}", conn);
        assert!(printed.contains("alice"));
        assert!(!printed.contains("s3cret"));
    }

    #[test]
    fn test_cover_art_url_without_request() {
        let client = ScriptedHttpClient::new();
        let conn = connection(&client);

        let url = conn.cover_art_url(&CoverArtId::from(42), None);

        assert!(client.requests().is_empty());
        assert!(url.starts_with("https://music.example.com:443/rest/getCoverArt.view?"));
        assert!(has_pair(&url, "id", "42"));
        assert!(has_pair(&url, "u", "alice"));
        assert!(has_pair(&url, "p", "s3cret"));
        assert!(!query_pairs(&url).iter().any(|(k, _)| k == "size"));
    }

    #[test]
    fn test_stream_url_without_request() {
        let client = ScriptedHttpClient::new();
        let conn = connection(&client);

        let url = conn.stream_url(1234, 320, Some("mp3"));

        assert!(client.requests().is_empty());
        assert!(url.contains("/rest/stream.view?"));
        assert!(has_pair(&url, "id", "1234"));
        assert!(has_pair(&url, "maxBitRate", "320"));
        assert!(has_pair(&url, "format", "mp3"));
        assert!(has_pair(&url, "u", "alice"));
        assert!(has_pair(&url, "p", "s3cret"));
    }

    #[test]
    fn test_client_name_and_version() {
        let conn = Connection::new("https://music.example.com", "u", "p")
            .unwrap()
            .with_app_name("kodi")
            .with_api_version("1.16.1");
        let url = conn.stream_url(1, 0, None);
        assert!(has_pair(&url, "c", "kodi"));
        assert!(has_pair(&url, "v", "1.16.1"));
        assert!(has_pair(&url, "f", "json"));
    }

    #[test]
    fn test_stream_url_omits_empty_format() {
        let conn = connection(&ScriptedHttpClient::new());
        let url = conn.stream_url(5, 0, Some(""));
        assert!(!query_pairs(&url).iter().any(|(k, _)| k == "format"));
        assert!(has_pair(&url, "maxBitRate", "0"));
    }

    #[test]
    fn test_password_is_url_encoded() {
        let conn = Connection::new("https://music.example.com", "alice", "a&b=c").unwrap();
        let url = conn.cover_art_url(&CoverArtId::from("1"), Some(300));
        assert!(has_pair(&url, "p", "a&b=c"));
        assert!(has_pair(&url, "size", "300"));
    }

    #[test]
    fn test_walk_artists_flattens_index() {
        let client = ScriptedHttpClient::new();
        client.respond("getArtists", json!({
            "artists": {
                "index": [
                    {"name": "A", "artist": [{"id": "1", "name": "ABBA"}, {"id": "2", "name": "AC/DC"}]},
                    {"name": "B", "artist": {"id": "3", "name": "Beck", "coverArt": "ar-3"}}
                ]
            }
        }));

        let artists = connection(&client).walk_artists().unwrap();

        assert_eq!(artists.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(artists[2].cover_art, Some(CoverArtId::from("ar-3")));
        assert_eq!(client.requests_for("getArtists").len(), 1);
    }

    #[test]
    fn test_missing_artists_element_is_empty() {
        let client = ScriptedHttpClient::new();
        client.respond("getArtists", json!({}));
        assert!(connection(&client).walk_artists().unwrap().is_empty());
    }

    #[test]
    fn test_empty_playlists() {
        let client = ScriptedHttpClient::new();
        client.respond("getPlaylists", json!({"playlists": {}}));
        assert!(connection(&client).walk_playlists().unwrap().is_empty());
    }

    #[test]
    fn test_single_playlist_entry() {
        let client = ScriptedHttpClient::new();
        client.respond("getPlaylist", json!({
            "playlist": {"id": "8", "name": "Mix", "entry": {"id": "80", "title": "Only"}}
        }));

        let conn = connection(&client);
        let entries = conn.walk_playlist(8).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 80);
        assert!(has_pair(&client.requests()[0], "id", "8"));
    }

    #[test]
    fn test_album_song_ids_are_integers() {
        let client = ScriptedHttpClient::new();
        client.respond("getAlbum", json!({
            "album": {"id": "5", "name": "Album", "song": [{"id": "50", "title": "a"}, {"id": "51", "title": "b"}]}
        }));

        let songs = connection(&client).walk_album(5).unwrap();
        assert_eq!(songs.iter().map(|s| s.id).collect::<Vec<_>>(), vec![50, 51]);
    }

    #[test]
    fn test_non_numeric_id_is_parse_error() {
        let client = ScriptedHttpClient::new();
        client.respond("getArtist", json!({
            "artist": {"id": "7", "name": "X", "album": {"id": "not-a-number", "name": "Y"}}
        }));

        let result = connection(&client).walk_artist(7);
        assert!(matches!(result, Err(ConnectionError::Parse(_))));
    }

    #[test]
    fn test_missing_entity_is_parse_error() {
        let client = ScriptedHttpClient::new();
        client.respond("getMusicDirectory", json!({}));
        assert!(matches!(connection(&client).walk_directory(1), Err(ConnectionError::Parse(_))));
    }

    #[test]
    fn test_failed_status() {
        let client = ScriptedHttpClient::new();
        client.respond_raw("getGenres", json!({
            "subsonic-response": {
                "status": "failed",
                "version": "1.13.0",
                "error": {"code": 40, "message": "Wrong username or password"}
            }
        }));

        match connection(&client).walk_genres() {
            Err(ConnectionError::Server { code, message }) => {
                assert_eq!(code, 40);
                assert_eq!(message, "Wrong username or password");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_transport_error_propagates() {
        let client = ScriptedHttpClient::new();
        assert!(matches!(connection(&client).ping(), Err(ConnectionError::Http(_))));
    }

    #[test]
    fn test_album_list_genre_pages() {
        let client = ScriptedHttpClient::new();
        let full_page: Vec<_> = (0..ALBUM_LIST_PAGE_SIZE)
            .map(|i| json!({"id": i.to_string(), "name": format!("Album {}", i)}))
            .collect();
        client
            .respond("getAlbumList2", json!({"albumList2": {"album": full_page}}))
            .respond("getAlbumList2", json!({"albumList2": {"album": {"id": "9999", "name": "Last"}}}));

        let albums = connection(&client).walk_album_list_genre("Rock").unwrap();

        assert_eq!(albums.len(), ALBUM_LIST_PAGE_SIZE as usize + 1);
        let requests = client.requests_for("getAlbumList2");
        assert_eq!(requests.len(), 2);
        assert!(has_pair(&requests[0], "type", "byGenre"));
        assert!(has_pair(&requests[0], "genre", "Rock"));
        assert!(has_pair(&requests[0], "offset", "0"));
        assert!(has_pair(&requests[1], "offset", &ALBUM_LIST_PAGE_SIZE.to_string()));
    }

    #[test]
    fn test_album_list_genre_stops_on_repeated_page() {
        let client = ScriptedHttpClient::new();
        let full_page: Vec<_> = (0..ALBUM_LIST_PAGE_SIZE)
            .map(|i| json!({"id": i.to_string(), "name": format!("Album {}", i)}))
            .collect();
        client.respond("getAlbumList2", json!({"albumList2": {"album": full_page}}));

        let albums = connection(&client).walk_album_list_genre("Rock").unwrap();

        assert_eq!(albums.len(), ALBUM_LIST_PAGE_SIZE as usize);
        assert_eq!(client.requests_for("getAlbumList2").len(), 2);
    }

    #[test]
    fn test_album_list_genre_page_limit() {
        let client = ScriptedHttpClient::new();
        for page in 0..ALBUM_LIST_MAX_PAGES + 5 {
            let albums: Vec<_> = (0..ALBUM_LIST_PAGE_SIZE)
                .map(|i| json!({"id": (page * ALBUM_LIST_PAGE_SIZE + i).to_string()}))
                .collect();
            client.respond("getAlbumList2", json!({"albumList2": {"album": albums}}));
        }

        let albums = connection(&client).walk_album_list_genre("Rock").unwrap();

        assert_eq!(client.requests_for("getAlbumList2").len(), ALBUM_LIST_MAX_PAGES as usize);
        assert_eq!(albums.len(), (ALBUM_LIST_MAX_PAGES * ALBUM_LIST_PAGE_SIZE) as usize);
    }

    #[test]
    fn test_random_songs_params() {
        let client = ScriptedHttpClient::new();
        client.respond("getRandomSongs", json!({"randomSongs": {"song": {"id": "1", "title": "t"}}}));

        let query = RandomSongsQuery {
            genre: Some("Jazz".to_string()),
            ..RandomSongsQuery::with_size(20)
        };
        let songs = connection(&client).walk_random_songs(&query).unwrap();

        assert_eq!(songs.len(), 1);
        let url = &client.requests()[0];
        assert!(has_pair(url, "size", "20"));
        assert!(has_pair(url, "genre", "Jazz"));
        assert!(has_pair(url, "f", "json"));
        assert!(has_pair(url, "v", API_VERSION));
        assert!(has_pair(url, "c", CLIENT_NAME));
    }
}
