/// Plugin settings
pub mod config;

/// Global constants
pub mod constants;

/// Navigation requests, modes and listing rows
pub mod data;

/// HTTP transport and small utilities
pub mod helpers;

/// Logging configuration and utilities
pub mod logging;

/// Menu router
pub mod plugin;

/// Subsonic connection and normalized response models
pub mod subsonic;

pub use crate::config::PluginSettings;
pub use crate::plugin::Plugin;
pub use crate::subsonic::Connection;
