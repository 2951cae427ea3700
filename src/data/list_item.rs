use serde::Serialize;
use strum_macros::Display;

/// Hint for the host on how to present a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentType {
    Songs,
    Albums,
    Artists,
}

/// Music metadata shown by the host next to a playable row
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MusicInfo {
    pub artist: Option<String>,
    pub title: String,
    pub year: Option<u32>,
    /// Seconds
    pub duration: Option<u64>,
    pub genre: Option<String>,
}

/// One row of a listing
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListItem {
    pub label: String,
    pub icon: Option<String>,
    pub thumbnail: Option<String>,
    /// Background image
    pub fanart: Option<String>,
    pub playable: bool,
    pub info: Option<MusicInfo>,
}

impl ListItem {
    pub fn new(label: impl Into<String>) -> Self {
        ListItem {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Use the same image as icon, thumbnail and background
    pub fn with_art(mut self, url: &str) -> Self {
        self.icon = Some(url.to_string());
        self.thumbnail = Some(url.to_string());
        self.fanart = Some(url.to_string());
        self
    }

    pub fn with_icon(mut self, url: &str) -> Self {
        self.icon = Some(url.to_string());
        self
    }

    pub fn playable(mut self, playable: bool) -> Self {
        self.playable = playable;
        self
    }

    pub fn with_info(mut self, info: MusicInfo) -> Self {
        self.info = Some(info);
        self
    }
}
