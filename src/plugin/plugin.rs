use log::{debug, info};
use url::Url;

use crate::config::PluginSettings;
use crate::constants::UNKNOWN_LABEL;
use crate::data::{ListItem, Mode, MusicInfo, NavigationRequest};
use crate::subsonic::models::{Album, Child};
use crate::subsonic::{Connection, CoverArtId};

use super::handlers::handler_for;
use super::host::DirectoryHost;
use super::PluginError;

/// One plugin invocation: settings, the navigation request and the
/// connection to the server. Nothing survives between invocations.
#[derive(Debug)]
pub struct Plugin {
    settings: PluginSettings,
    request: NavigationRequest,
    base_url: Url,
    connection: Connection,
}

impl Plugin {
    /// Create the plugin and the server connection from the settings
    pub fn new(settings: PluginSettings, request: NavigationRequest) -> Result<Self, PluginError> {
        let connection = Connection::new(&settings.subsonic_url, &settings.username, &settings.password)?
            .with_timeout(settings.timeout_secs);
        Self::with_connection(settings, request, connection)
    }

    /// Create the plugin around an existing connection
    pub fn with_connection(
        settings: PluginSettings,
        request: NavigationRequest,
        connection: Connection,
    ) -> Result<Self, PluginError> {
        let base_url = Url::parse(request.base_url()).map_err(|e| PluginError::InvalidBaseUrl {
            url: request.base_url().to_string(),
            reason: e.to_string(),
        })?;

        Ok(Plugin {
            settings,
            request,
            base_url,
            connection,
        })
    }

    pub fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    pub fn request(&self) -> &NavigationRequest {
        &self.request
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Render the listing for the requested mode
    ///
    /// The mode is resolved before anything is sent to the host, so an
    /// unknown mode leaves the listing untouched.
    pub fn route(&self, host: &mut dyn DirectoryHost) -> Result<(), PluginError> {
        let mode = self.request.mode()?;
        info!("Rendering {} (handle {})", mode, self.request.handle());
        handler_for(mode).render(self, host)
    }

    /// Navigation URL back into the plugin: the base URL with its query
    /// replaced by `mode` and `args`
    pub fn build_url(&self, mode: Mode, args: &[(&str, String)]) -> String {
        let mut url = self.base_url.clone();
        url.set_query(None);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("mode", &mode.to_string());
            for (key, value) in args {
                pairs.append_pair(key, value);
            }
        }
        url.to_string()
    }

    fn cover_art_url(&self, cover_art: Option<&CoverArtId>) -> Option<String> {
        cover_art.map(|id| self.connection.cover_art_url(id, None))
    }

    /// Add a folder row pointing to `mode` with `args`
    pub fn add_folder(
        &self,
        host: &mut dyn DirectoryHost,
        label: &str,
        mode: Mode,
        args: &[(&str, String)],
        cover_art: Option<&CoverArtId>,
    ) -> Result<(), PluginError> {
        let url = self.build_url(mode, args);
        let mut item = ListItem::new(label_or_unknown(label));
        if let Some(art) = self.cover_art_url(cover_art) {
            item = item.with_art(&art);
        }
        host.add_directory_item(&url, &item, true)
    }

    /// Add a playable row for one track
    pub fn add_track(&self, host: &mut dyn DirectoryHost, track: &Child, show_artist: bool) -> Result<(), PluginError> {
        let url = self.connection.stream_url(
            track.id,
            self.settings.bitrate,
            self.settings.transcode_format(),
        );

        let title = non_empty(&track.title).unwrap_or(UNKNOWN_LABEL);
        let label = if show_artist {
            let artist = track.artist.as_deref().and_then(non_empty).unwrap_or(UNKNOWN_LABEL);
            format!("{} - {}", artist, title)
        } else {
            title.to_string()
        };

        let mut item = ListItem::new(label).playable(true).with_info(MusicInfo {
            artist: track.artist.clone(),
            title: track.title.clone(),
            year: track.year,
            duration: track.duration,
            genre: track.genre.clone(),
        });
        if let Some(art) = self.cover_art_url(track.cover_art.as_ref()) {
            item = item.with_art(&art);
        }

        debug!("Track {}: {}", track.id, item.label);
        host.add_directory_item(&url, &item, false)
    }

    /// Add a folder row for one album, leading to its tracks
    pub fn add_album(&self, host: &mut dyn DirectoryHost, album: &Album, show_artist: bool) -> Result<(), PluginError> {
        let url = self.build_url(Mode::TrackList, &[("album_id", album.id.to_string())]);

        let name = non_empty(&album.name).unwrap_or(UNKNOWN_LABEL);
        let label = if show_artist {
            let artist = album.artist.as_deref().and_then(non_empty).unwrap_or(UNKNOWN_LABEL);
            format!("{} - {}", artist, name)
        } else {
            name.to_string()
        };

        let mut item = ListItem::new(label).playable(false);
        if let Some(art) = self.cover_art_url(album.cover_art.as_ref()) {
            item = item.with_art(&art);
        }

        host.add_directory_item(&url, &item, true)
    }
}

/// `value`, or the placeholder label when the server sent nothing usable
pub(crate) fn label_or_unknown(value: &str) -> &str {
    non_empty(value).unwrap_or(UNKNOWN_LABEL)
}

fn non_empty(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
