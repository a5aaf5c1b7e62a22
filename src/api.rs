//! Complaints API Client
//!
//! HTTP bindings to the complaints endpoints via the browser `fetch` API.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Complaint, NewComplaint, SaveResponse};

// ========================
// Requests
// ========================

/// GET the complaint list
pub async fn fetch_complaints(config: &ApiConfig) -> Result<Vec<Complaint>, ApiError> {
    let url = config.list_url();
    web_sys::console::log_1(&format!("[API] GET {}", url).into());

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(ApiError::network)?;

    let text = send(&request).await?;
    parse_complaints(&text)
}

/// POST a new complaint; fails unless the server reports `Success`
pub async fn save_complaint(config: &ApiConfig, complaint: &NewComplaint) -> Result<(), ApiError> {
    let url = config.save_url();
    web_sys::console::log_1(&format!("[API] POST {}", url).into());

    let body = serde_json::to_string(complaint)?;
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));
    let request = Request::new_with_str_and_init(&url, &opts).map_err(ApiError::network)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(ApiError::network)?;

    let text = send(&request).await?;
    parse_save_response(&text)
}

/// Run a request and return the response body as text
async fn send(request: &Request) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(ApiError::network)?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch did not resolve to a Response".to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            url: response.url(),
        });
    }

    let body = JsFuture::from(response.text().map_err(ApiError::network)?)
        .await
        .map_err(ApiError::network)?;
    body.as_string()
        .ok_or_else(|| ApiError::Network("response body is not text".to_string()))
}

// ========================
// Response Parsing
// ========================

pub fn parse_complaints(body: &str) -> Result<Vec<Complaint>, ApiError> {
    Ok(serde_json::from_str(body)?)
}

pub fn parse_save_response(body: &str) -> Result<(), ApiError> {
    let response: SaveResponse = serde_json::from_str(body)?;
    if response.success {
        Ok(())
    } else {
        Err(ApiError::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComplaintId;

    #[test]
    fn test_parse_complaints_keeps_order() {
        let body = r#"[
            {"Id":3,"Title":"Late bus","Body":"Forty minutes."},
            {"Id":1,"Title":"Cold soup","Body":"It was cold."},
            {"Id":2,"Title":"Noise","Body":"All night."}
        ]"#;
        let complaints = parse_complaints(body).unwrap();
        assert_eq!(complaints.len(), 3);
        let ids: Vec<_> = complaints.iter().map(|c| c.id.clone()).collect();
        assert_eq!(
            ids,
            vec![ComplaintId::Number(3), ComplaintId::Number(1), ComplaintId::Number(2)]
        );
        assert_eq!(complaints[1].title, "Cold soup");
        assert_eq!(complaints[1].body, "It was cold.");
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_complaints("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_complaints_rejects_garbage() {
        assert!(matches!(parse_complaints("<html>"), Err(ApiError::Decode(_))));
        assert!(matches!(parse_complaints(r#"{"Id":1}"#), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_parse_save_response() {
        assert!(parse_save_response(r#"{"Success":true}"#).is_ok());
        assert!(matches!(
            parse_save_response(r#"{"Success":false}"#),
            Err(ApiError::Rejected)
        ));
        assert!(matches!(parse_save_response("null"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_rejected_message() {
        assert_eq!(ApiError::Rejected.to_string(), "Failed to save complaint.");
    }
}
