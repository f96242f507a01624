use async_trait::async_trait;
use spamdash_core::Result;

/// Raw backend answer. The body is decoded by the controller so every
/// transport shares the same envelope handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// One request/response exchange with the backend.
///
/// Futures are not required to be `Send`: the controller runs on a single
/// event loop, and browser fetch futures are `!Send`.
/// Only transport-level failures are errors here; a 4xx/5xx answer is an `Ok`.
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<HttpResponse>;

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse>;
}
