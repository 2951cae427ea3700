use std::time::Duration;
use log::{debug, error};
use serde_json::Value;
use thiserror::Error;

use super::sanitize::safe_truncate;

/// Error types that can occur when interacting with HTTP clients
#[derive(Debug, Error)]
pub enum HttpClientError {
    #[error("HTTP request error: {0}")]
    RequestError(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Empty response from server")]
    EmptyResponse,
}

/// A trait for blocking HTTP client implementations
/// This version avoids generic methods to enable dynamic dispatch
pub trait HttpClient: Send + Sync + std::fmt::Debug {
    /// Send a GET request and return text response
    fn get_text(&self, url: &str) -> Result<String, HttpClientError>;

    /// Send a GET request and parse the response body as JSON
    fn get_json(&self, url: &str) -> Result<Value, HttpClientError> {
        let response_text = self.get_text(url)?;

        if response_text.is_empty() {
            return Err(HttpClientError::EmptyResponse);
        }

        match serde_json::from_str::<Value>(&response_text) {
            Ok(json_value) => Ok(json_value),
            Err(e) => {
                debug!("Failed to parse JSON response: {}", e);
                debug!("Response text: {}", truncate_for_log(&response_text));
                if response_text.contains("<subsonic-response") || response_text.contains("<?xml") {
                    return Err(HttpClientError::ParseError(
                        "Server answered with XML, expected JSON (f=json not honoured)".to_string(),
                    ));
                }
                Err(HttpClientError::ParseError(e.to_string()))
            }
        }
    }

    /// Clone the client as a boxed trait object
    fn clone_box(&self) -> Box<dyn HttpClient>;
}

impl Clone for Box<dyn HttpClient> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

fn truncate_for_log(text: &str) -> String {
    let truncated = safe_truncate(text, 500);
    if truncated.len() < text.len() {
        format!("{}... (truncated, total length: {} bytes)", truncated, text.len())
    } else {
        text.to_string()
    }
}

/// An HTTP client implementation using ureq
#[derive(Clone, Debug)]
pub struct UreqHttpClient {
    timeout: Duration,
}

impl Default for UreqHttpClient {
    fn default() -> Self {
        Self::new(15)
    }
}

impl UreqHttpClient {
    /// Create a new HTTP client with the specified timeout
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl HttpClient for UreqHttpClient {
    fn get_text(&self, url: &str) -> Result<String, HttpClientError> {
        let response = match ureq::get(url).timeout(self.timeout).call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(code, response)) => {
                let error_body = response
                    .into_string()
                    .unwrap_or_else(|_| "<failed to read response body>".to_string());
                error!("HTTP error {}: {}", code, truncate_for_log(&error_body));
                return Err(HttpClientError::ServerError(format!("HTTP {} error: {}", code, error_body)));
            }
            Err(e) => {
                debug!("GET request failed: {}", e);
                return Err(HttpClientError::RequestError(e.to_string()));
            }
        };

        match response.into_string() {
            Ok(text) => Ok(text),
            Err(e) => {
                debug!("Failed to read response body: {}", e);
                Err(HttpClientError::ParseError(format!("Failed to read response body: {}", e)))
            }
        }
    }

    fn clone_box(&self) -> Box<dyn HttpClient> {
        Box::new(self.clone())
    }
}

/// Create a new HTTP client using the default implementation
pub fn new_http_client(timeout_secs: u64) -> Box<dyn HttpClient> {
    Box::new(UreqHttpClient::new(timeout_secs))
}
