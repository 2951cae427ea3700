use std::collections::HashMap;
use std::str::FromStr;

use log::debug;

use super::Mode;

/// Errors while reading a navigation request
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NavigationError {
    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid value '{value}' for argument {name}")]
    InvalidArgument { name: &'static str, value: String },
}

/// A navigation request as handed over by the host
///
/// Consists of the plugin's own base URL, the host's listing handle and the
/// arguments of the query string. Arguments may repeat, so every name maps to
/// all of its values in order.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationRequest {
    base_url: String,
    handle: i32,
    args: HashMap<String, Vec<String>>,
}

impl NavigationRequest {
    pub fn new(base_url: &str, handle: i32, args: HashMap<String, Vec<String>>) -> Self {
        NavigationRequest {
            base_url: base_url.to_string(),
            handle,
            args,
        }
    }

    /// Build a request from a URL-encoded query string; a leading `?` is
    /// allowed and arguments with blank values are dropped
    pub fn parse(base_url: &str, handle: i32, query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut args: HashMap<String, Vec<String>> = HashMap::new();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if value.trim().is_empty() {
                continue;
            }
            args.entry(key.into_owned()).or_default().push(value.into_owned());
        }

        debug!("Navigation request {} (handle {}): {:?}", base_url, handle, args);
        Self::new(base_url, handle, args)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn handle(&self) -> i32 {
        self.handle
    }

    /// First value of an argument
    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values of an argument
    pub fn arg_values(&self, name: &str) -> &[String] {
        self.args.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn require_arg(&self, name: &'static str) -> Result<&str, NavigationError> {
        self.arg(name).ok_or(NavigationError::MissingArgument(name))
    }

    /// Integer identifier argument such as `album_id`
    pub fn require_id(&self, name: &'static str) -> Result<i64, NavigationError> {
        let value = self.require_arg(name)?;
        value.trim().parse::<i64>().map_err(|_| NavigationError::InvalidArgument {
            name,
            value: value.to_string(),
        })
    }

    /// The requested mode; `main_page` when no mode is given
    pub fn mode(&self) -> Result<Mode, NavigationError> {
        match self.arg("mode") {
            None => Ok(Mode::default()),
            Some(name) => Mode::from_str(name).map_err(|_| NavigationError::UnknownMode(name.to_string())),
        }
    }
}
