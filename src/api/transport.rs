use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;

use crate::error::Result;

/// Status and raw text of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON POST and hands back whatever came back.
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse>;
}

/// `fetch` through gloo-net. `json()` sets `Content-Type: application/json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse> {
        let response = Request::post(url).json(body)?.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}
