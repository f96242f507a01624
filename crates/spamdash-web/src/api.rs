use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use spamdash_client::{HttpResponse, Transport};
use spamdash_core::{DashboardError, Result};

/// Browser `fetch` transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

async fn read(resp: Response) -> Result<HttpResponse> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| DashboardError::Http(e.to_string()))?;
    Ok(HttpResponse { status, body })
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let resp = Request::get(url)
            .send()
            .await
            .map_err(|e| DashboardError::Http(e.to_string()))?;
        read(resp).await
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse> {
        let resp = Request::post(url)
            .json(body)
            .map_err(|e| DashboardError::Http(e.to_string()))?
            .send()
            .await
            .map_err(|e| DashboardError::Http(e.to_string()))?;
        read(resp).await
    }
}
