// Configuration for the Subsonic plugin
//
// The settings are owned by the host's configuration store and are read-only
// here. They are loaded from a JSON document; individual values can be
// overridden on the command line.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::DEFAULT_TIMEOUT_SECS;

/// Errors that can occur while loading settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Plugin settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginSettings {
    /// Full URL of the Subsonic server, e.g. "https://music.example.com"
    #[serde(default)]
    pub subsonic_url: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    /// Number of songs in random listings
    #[serde(default = "default_random_count")]
    pub random_count: u32,

    /// Maximum stream bitrate in kbit/s, 0 for no limit
    #[serde(default)]
    pub bitrate: u32,

    /// Transcoding target format (e.g. "mp3"), server default when unset
    #[serde(default)]
    pub trans_format: Option<String>,

    /// Timeout for HTTP requests in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_random_count() -> u32 {
    20
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for PluginSettings {
    fn default() -> Self {
        PluginSettings {
            subsonic_url: String::new(),
            username: String::new(),
            password: String::new(),
            random_count: default_random_count(),
            bitrate: 0,
            trans_format: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PluginSettings {
    /// Load settings from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let settings = Self::from_json(&content)?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: PluginSettings = serde_json::from_str(json)?;
        debug!(
            "Settings: server {}, user {}, random_count {}, bitrate {}, format {:?}",
            settings.subsonic_url, settings.username, settings.random_count, settings.bitrate, settings.trans_format
        );
        Ok(settings)
    }

    /// The transcoding format, ignoring an empty value
    pub fn transcode_format(&self) -> Option<&str> {
        self.trans_format.as_deref().filter(|f| !f.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = PluginSettings::from_json("{}").unwrap();
        assert_eq!(settings, PluginSettings::default());
        assert_eq!(settings.random_count, 20);
        assert_eq!(settings.bitrate, 0);
        assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(settings.transcode_format(), None);
    }

    #[test]
    fn test_full_settings() {
        let settings = PluginSettings::from_json(
            r#"{
                "subsonic_url": "https://music.example.com",
                "username": "alice",
                "password": "secret",
                "random_count": 50,
                "bitrate": 192,
                "trans_format": "ogg"
            }"#,
        )
        .unwrap();

        assert_eq!(settings.subsonic_url, "https://music.example.com");
        assert_eq!(settings.username, "alice");
        assert_eq!(settings.random_count, 50);
        assert_eq!(settings.bitrate, 192);
        assert_eq!(settings.transcode_format(), Some("ogg"));
    }

    #[test]
    fn test_blank_format_is_unset() {
        let settings = PluginSettings::from_json(r#"{"trans_format": " "}"#).unwrap();
        assert_eq!(settings.transcode_format(), None);
    }

    #[test]
    fn test_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        fs::write(&path, r#"{"subsonic_url": "http://localhost:4040", "username": "bob"}"#).unwrap();

        let settings = PluginSettings::from_file(&path).unwrap();
        assert_eq!(settings.subsonic_url, "http://localhost:4040");
        assert_eq!(settings.username, "bob");
    }

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let result = PluginSettings::from_file(tmp.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_malformed_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, "not valid {{{").unwrap();
        assert!(matches!(PluginSettings::from_file(&path), Err(ConfigError::Parse(_))));
    }
}
