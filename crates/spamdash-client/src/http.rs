use async_trait::async_trait;
use spamdash_core::{DashboardConfig, DashboardError, Result};

use crate::transport::{HttpResponse, Transport};

/// [`Transport`] backed by `reqwest`, for native front ends.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DashboardError::Http(e.to_string()))?;
        Ok(Self { client })
    }

    async fn read(resp: reqwest::Response) -> Result<HttpResponse> {
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| DashboardError::Http(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        tracing::debug!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DashboardError::Http(e.to_string()))?;
        Self::read(resp).await
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse> {
        tracing::debug!("POST {}", url);
        let resp = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| DashboardError::Http(e.to_string()))?;
        Self::read(resp).await
    }
}
