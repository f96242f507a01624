use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{DashboardError, Result};

/// JSON wrapper every backend endpoint answers with: the payload lives under
/// `content`, and error responses carry a human-readable `msg`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub content: Option<T>,
    pub msg: Option<String>,
}

/// Body of both prediction requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub text: String,
}

/// Turns a raw HTTP status and body into the envelope's `content`.
///
/// Non-2xx responses become [`DashboardError::Backend`] and 2xx responses
/// without `content` become [`DashboardError::MissingContent`]; both keep the
/// `msg` field when the body carries one.
pub fn decode_content<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if !(200..300).contains(&status) {
        let msg = serde_json::from_str::<Envelope<serde_json::Value>>(body)
            .ok()
            .and_then(|e| e.msg);
        return Err(DashboardError::Backend { status, msg });
    }

    let envelope: Envelope<T> = serde_json::from_str(body)?;
    match envelope.content {
        Some(content) => Ok(content),
        None => Err(DashboardError::MissingContent { msg: envelope.msg }),
    }
}
