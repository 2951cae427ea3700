//! Scripted in-memory `HttpClient` for tests. Responses are queued per
//! Subsonic method name and every requested URL is recorded.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use super::http_client::{HttpClient, HttpClientError};

#[derive(Clone, Debug, Default)]
pub struct ScriptedHttpClient {
    responses: Arc<Mutex<HashMap<String, VecDeque<Value>>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a payload for `method`, wrapped in an "ok" envelope.
    /// The last queued payload for a method is repeated once the queue drains.
    pub fn respond(&self, method: &str, payload: Value) -> &Self {
        let mut body = json!({"status": "ok", "version": "1.13.0"});
        if let (Some(body), Some(payload)) = (body.as_object_mut(), payload.as_object()) {
            for (k, v) in payload {
                body.insert(k.clone(), v.clone());
            }
        }
        self.respond_raw(method, json!({ "subsonic-response": body }))
    }

    /// Queue a complete response document for `method`
    pub fn respond_raw(&self, method: &str, document: Value) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_default()
            .push_back(document);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests whose path targets `method`
    pub fn requests_for(&self, method: &str) -> Vec<String> {
        let needle = format!("/rest/{}.view", method);
        self.requests()
            .into_iter()
            .filter(|url| url.contains(&needle))
            .collect()
    }

    fn method_of(url: &str) -> Option<String> {
        let path = url.split('?').next()?;
        let last = path.rsplit('/').next()?;
        last.strip_suffix(".view").map(|m| m.to_string())
    }
}

impl HttpClient for ScriptedHttpClient {
    fn get_text(&self, url: &str) -> Result<String, HttpClientError> {
        self.requests.lock().unwrap().push(url.to_string());

        let method = Self::method_of(url)
            .ok_or_else(|| HttpClientError::RequestError(format!("Unexpected URL: {}", url)))?;

        let mut responses = self.responses.lock().unwrap();
        let queue = responses
            .get_mut(&method)
            .ok_or_else(|| HttpClientError::ServerError(format!("HTTP 404 error: no script for {}", method)))?;

        let document = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };

        document
            .map(|d| d.to_string())
            .ok_or(HttpClientError::EmptyResponse)
    }

    fn clone_box(&self) -> Box<dyn HttpClient> {
        Box::new(self.clone())
    }
}
