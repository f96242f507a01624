pub mod config;
pub mod envelope;
pub mod error;
pub mod model;
pub mod notification;
pub mod sample;

pub use config::{DashboardConfig, EndpointsConfig, NotificationConfig};
pub use envelope::{decode_content, Envelope, PredictionRequest};
pub use error::{DashboardError, Result};
pub use model::{Backend, ModelInfo, PredictionResult, Predictions, ViewState};
pub use notification::{Notification, NotificationLevel};
pub use sample::SampleCategory;
