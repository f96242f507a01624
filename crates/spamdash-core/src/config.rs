use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Backend, DashboardError, Result, SampleCategory};

pub const ENV_BASE_URL: &str = "SPAMDASH_BASE_URL";
pub const ENV_SECONDARY_PATH: &str = "SPAMDASH_SECONDARY_PATH";
pub const ENV_DISABLE_SECONDARY: &str = "SPAMDASH_DISABLE_SECONDARY";
pub const ENV_TIMEOUT_MS: &str = "SPAMDASH_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Origin of the backend. Empty means "same origin" (browser builds).
    pub base_url: String,
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8090".to_string(),
            endpoints: EndpointsConfig::default(),
            notifications: NotificationConfig::default(),
            request_timeout_ms: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointsConfig {
    pub model_info: String,
    pub primary_prediction: String,
    /// `None` runs the dashboard against the primary backend only.
    pub secondary_prediction: Option<String>,
    pub sample_message: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            model_info: "/getModelInfo".to_string(),
            primary_prediction: "/getModelPred".to_string(),
            secondary_prediction: Some("/getPyModelPred".to_string()),
            sample_message: "/getRandMsg".to_string(),
        }
    }
}

/// Display durations, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub predictions_updated_ms: u64,
    pub sample_fetched_ms: u64,
    pub warning_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            predictions_updated_ms: 1000,
            sample_fetched_ms: 1500,
            warning_ms: 2500,
        }
    }
}

impl NotificationConfig {
    pub fn predictions_updated(&self) -> Duration {
        Duration::from_millis(self.predictions_updated_ms)
    }

    pub fn sample_fetched(&self) -> Duration {
        Duration::from_millis(self.sample_fetched_ms)
    }

    pub fn warning(&self) -> Duration {
        Duration::from_millis(self.warning_ms)
    }
}

impl DashboardConfig {
    /// Same-origin configuration for a UI served by the backend itself.
    pub fn same_origin() -> Self {
        Self {
            base_url: String::new(),
            ..Self::default()
        }
    }

    /// Defaults overridden by `SPAMDASH_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(path) = lookup(ENV_SECONDARY_PATH) {
            self.endpoints.secondary_prediction = Some(path);
        }
        if let Some(flag) = lookup(ENV_DISABLE_SECONDARY) {
            if parse_flag(ENV_DISABLE_SECONDARY, &flag)? {
                self.endpoints.secondary_prediction = None;
            }
        }
        if let Some(ms) = lookup(ENV_TIMEOUT_MS) {
            let ms = ms.trim().parse::<u64>().map_err(|e| {
                DashboardError::Config(format!("{}={:?}: {}", ENV_TIMEOUT_MS, ms, e))
            })?;
            self.request_timeout_ms = Some(ms);
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    /// Backends a submission fans out to, in dispatch order.
    pub fn prediction_backends(&self) -> Vec<Backend> {
        Backend::all()
            .iter()
            .copied()
            .filter(|b| self.prediction_path(*b).is_some())
            .collect()
    }

    pub fn prediction_path(&self, backend: Backend) -> Option<&str> {
        match backend {
            Backend::Primary => Some(self.endpoints.primary_prediction.as_str()),
            Backend::Secondary => self.endpoints.secondary_prediction.as_deref(),
        }
    }

    pub fn sample_path(&self, category: SampleCategory) -> String {
        format!(
            "{}/{}",
            self.endpoints.sample_message.trim_end_matches('/'),
            category.as_str()
        )
    }

    /// Absolute (or origin-relative, when `base_url` is empty) URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(DashboardError::Config(format!(
            "{}: expected a boolean, got {:?}",
            key, other
        ))),
    }
}
