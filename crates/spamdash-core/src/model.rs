use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata describing the model(s) loaded by the backend.
///
/// The backend owns the shape of this payload, so the fields are kept as an
/// opaque JSON object. The accessors below cover the fields the reference
/// backend reports; anything else is still available through [`ModelInfo::get`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelInfo(Map<String, Value>);

const INFO_LABELS: &[(&str, &str)] = &[
    ("hasbeentrained", "Trained"),
    ("numobs", "Training observations"),
    ("numtkns", "Distinct tokens"),
    ("numspam", "Spam messages"),
    ("numham", "Ham messages"),
];

impl ModelInfo {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn has_been_trained(&self) -> Option<bool> {
        self.get("hasbeentrained").and_then(Value::as_bool)
    }

    pub fn observation_count(&self) -> Option<u64> {
        self.get("numobs").and_then(Value::as_u64)
    }

    pub fn token_count(&self) -> Option<u64> {
        self.get("numtkns").and_then(Value::as_u64)
    }

    pub fn spam_count(&self) -> Option<u64> {
        self.get("numspam").and_then(Value::as_u64)
    }

    pub fn ham_count(&self) -> Option<u64> {
        self.get("numham").and_then(Value::as_u64)
    }

    /// Label/value pairs for display. Known fields come first with readable
    /// labels, followed by any other fields under their raw key.
    pub fn display_rows(&self) -> Vec<(String, String)> {
        let mut rows: Vec<(String, String)> = INFO_LABELS
            .iter()
            .filter_map(|(key, label)| {
                self.get(key)
                    .map(|v| (label.to_string(), display_value(v)))
            })
            .collect();

        rows.extend(
            self.0
                .iter()
                .filter(|(key, _)| !INFO_LABELS.iter().any(|(k, _)| *k == key.as_str()))
                .map(|(key, v)| (key.clone(), display_value(v))),
        );

        rows
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "yes".to_string(),
        Value::Bool(false) => "no".to_string(),
        other => other.to_string(),
    }
}

/// Output of one prediction backend.
///
/// `have_prediction` is false until the backend's response has been applied.
/// Every other field the backend returns (score, label, ...) is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(rename = "havepred", alias = "havePrediction", default)]
    pub have_prediction: bool,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl PredictionResult {
    /// The `{havePrediction: false}` state a result sits in while a
    /// submission is pending or after it failed.
    pub fn pending() -> Self {
        Self::default()
    }

    /// Spam score as reported by the backend, e.g. `"87.50"` or `"100.0%"`.
    pub fn prediction(&self) -> Option<&str> {
        self.fields.get("prediction").and_then(Value::as_str)
    }

    pub fn label(&self) -> Option<&str> {
        self.fields.get("label").and_then(Value::as_str)
    }
}

/// The prediction backends a submission fans out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Primary,
    Secondary,
}

impl Backend {
    pub fn all() -> &'static [Backend] {
        &[Backend::Primary, Backend::Secondary]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Backend::Primary => "Naive Bayes (Go)",
            Backend::Secondary => "Multinomial NB (scikit-learn)",
        }
    }

    /// Only the primary backend announces a successful update.
    pub fn announces_success(&self) -> bool {
        matches!(self, Backend::Primary)
    }
}

/// Per-backend prediction results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predictions {
    pub primary: PredictionResult,
    pub secondary: PredictionResult,
}

impl Predictions {
    pub fn get(&self, backend: Backend) -> &PredictionResult {
        match backend {
            Backend::Primary => &self.primary,
            Backend::Secondary => &self.secondary,
        }
    }

    pub fn get_mut(&mut self, backend: Backend) -> &mut PredictionResult {
        match backend {
            Backend::Primary => &mut self.primary,
            Backend::Secondary => &mut self.secondary,
        }
    }

    pub fn reset(&mut self) {
        self.primary = PredictionResult::pending();
        self.secondary = PredictionResult::pending();
    }
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub model_info: ModelInfo,
    pub input_text: String,
    pub predictions: Predictions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prediction_result_accepts_both_flag_names() {
        let go: PredictionResult =
            serde_json::from_value(json!({"havepred": true, "prediction": "87.50"})).unwrap();
        assert!(go.have_prediction);
        assert_eq!(go.prediction(), Some("87.50"));

        let camel: PredictionResult =
            serde_json::from_value(json!({"havePrediction": true, "label": "spam"})).unwrap();
        assert!(camel.have_prediction);
        assert_eq!(camel.label(), Some("spam"));
        assert!(!camel.fields.contains_key("havePrediction"));
    }

    #[test]
    fn test_prediction_result_missing_flag_is_false() {
        let res: PredictionResult = serde_json::from_value(json!({"prediction": "1.0"})).unwrap();
        assert!(!res.have_prediction);
    }

    #[test]
    fn test_predictions_reset_drops_previous_fields() {
        let mut preds = Predictions::default();
        preds.get_mut(Backend::Secondary).have_prediction = true;
        preds
            .get_mut(Backend::Secondary)
            .fields
            .insert("prediction".into(), json!("12.00"));

        preds.reset();

        assert_eq!(preds.secondary, PredictionResult::pending());
        assert!(!preds.primary.have_prediction);
    }

    #[test]
    fn test_model_info_display_rows() {
        let info: ModelInfo = serde_json::from_value(json!({
            "numham": 4825,
            "hasbeentrained": true,
            "numspam": 747,
            "vocab": "en"
        }))
        .unwrap();

        assert_eq!(info.has_been_trained(), Some(true));
        assert_eq!(info.spam_count(), Some(747));
        assert_eq!(info.observation_count(), None);

        let rows = info.display_rows();
        assert_eq!(rows[0], ("Trained".to_string(), "yes".to_string()));
        assert_eq!(rows[1], ("Spam messages".to_string(), "747".to_string()));
        assert_eq!(rows[2], ("Ham messages".to_string(), "4825".to_string()));
        assert_eq!(rows[3], ("vocab".to_string(), "en".to_string()));
    }

    #[test]
    fn test_only_primary_announces() {
        assert!(Backend::Primary.announces_success());
        assert!(!Backend::Secondary.announces_success());
    }
}
