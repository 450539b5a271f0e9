use std::fmt;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::types::LogEntry;

/// Where the Game Agent serves its command log collection.
pub const DEFAULT_LOGS_ENDPOINT: &str = "http://localhost:5000/logs";

/// Why a poll failed. The distinction only ever reaches the browser console;
/// the UI collapses all of them into one fixed banner message.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Non-success HTTP status from the agent.
    Status(u16),
    /// Network-level failure: connection refused, DNS, aborted request.
    Transport(String),
    /// Response body was not a JSON array of log entries.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status(code) => write!(f, "log endpoint returned HTTP {code}"),
            FetchError::Transport(message) => write!(f, "network failure: {message}"),
            FetchError::Decode(message) => write!(f, "unexpected response body: {message}"),
        }
    }
}

fn js_error_text(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// One poll against the log collection endpoint: a single GET expecting a
/// JSON array of `LogEntry` objects. No timeout is configured; a hung
/// request only delays its own tick's state update.
pub async fn fetch_logs(endpoint: &str) -> Result<Vec<LogEntry>, FetchError> {
    let window = web_sys::window()
        .ok_or_else(|| FetchError::Transport("window not available".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_str(endpoint))
        .await
        .map_err(|e| FetchError::Transport(js_error_text(e)))?;
    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|e| FetchError::Transport(js_error_text(e)))?;
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    let json = JsFuture::from(resp.json().map_err(|e| FetchError::Decode(js_error_text(e)))?)
        .await
        .map_err(|e| FetchError::Decode(js_error_text(e)))?;
    if !js_sys::Array::is_array(&json) {
        return Err(FetchError::Decode("expected a JSON array".to_string()));
    }
    serde_wasm_bindgen::from_value(json).map_err(|e| FetchError::Decode(e.to_string()))
}
