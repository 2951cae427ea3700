//! Menu router: turns a navigation request into one rendered listing.

pub mod console_host;
pub mod handlers;
pub mod host;
#[allow(clippy::module_inception)]
pub mod plugin;


use crate::data::NavigationError;
use crate::subsonic::ConnectionError;

pub use console_host::ConsoleHost;
pub use handlers::{handler_for, ModeHandler};
pub use host::DirectoryHost;
pub use plugin::Plugin;

/// Errors that terminate a plugin invocation
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid value '{value}' for argument {name}")]
    InvalidArgument { name: &'static str, value: String },

    #[error("Invalid plugin base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error("Host I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<NavigationError> for PluginError {
    fn from(error: NavigationError) -> Self {
        match error {
            NavigationError::UnknownMode(mode) => PluginError::UnknownMode(mode),
            NavigationError::MissingArgument(name) => PluginError::MissingArgument(name),
            NavigationError::InvalidArgument { name, value } => PluginError::InvalidArgument { name, value },
        }
    }
}
