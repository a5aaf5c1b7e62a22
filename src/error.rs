//! API Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to save complaint.")]
    Rejected,
}

impl ApiError {
    /// Wrap a rejected JS promise or thrown JS value
    pub fn network(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ApiError::Network(message)
    }
}
