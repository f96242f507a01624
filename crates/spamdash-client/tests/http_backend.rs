use std::cell::RefCell;
use std::rc::Rc;

use axum::{
    extract::Path,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use spamdash_client::{ReqwestTransport, ViewController, PREDICTION_FAILED};
use spamdash_core::{DashboardConfig, Notification, PredictionRequest, SampleCategory};
use tokio::net::TcpListener;

const SPAM_SAMPLE: &str = "FREE entry to win a nokia, text WIN to 80086 now";
const HAM_SAMPLE: &str = "Ok lar... see you at home";

async fn model_info() -> Json<Value> {
    Json(json!({
        "content": {
            "hasbeentrained": true,
            "numobs": 5572,
            "numtkns": 8713,
            "numspam": 747,
            "numham": 4825
        }
    }))
}

async fn naive_bayes(Json(req): Json<PredictionRequest>) -> (StatusCode, Json<Value>) {
    if req.text.contains("offline") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"msg": "model has not yet been trained", "content": {"havepred": false}})),
        );
    }
    let score = if req.text.to_lowercase().contains("free") {
        "97.50"
    } else {
        "2.10"
    };
    (
        StatusCode::OK,
        Json(json!({"msg": "a spam prediction", "content": {"havepred": true, "prediction": score}})),
    )
}

async fn scikit(Json(req): Json<PredictionRequest>) -> (StatusCode, Json<Value>) {
    if req.text.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"msg": "missing text value"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "msg": "Scikit Learn spam prediction",
            "content": {"prediction": "100.0%", "havepred": true}
        })),
    )
}

async fn rand_msg(Path(class): Path<String>) -> Json<Value> {
    let text = match class.as_str() {
        "spam" => SPAM_SAMPLE,
        "ham" => HAM_SAMPLE,
        _ => "",
    };
    Json(json!({ "content": text }))
}

async fn spawn_backend() -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let app = Router::new()
        .route("/getModelInfo", get(model_info))
        .route("/getModelPred", post(naive_bayes))
        .route("/getPyModelPred", post(scikit))
        .route("/getRandMsg/{class}", get(rand_msg));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

fn controller(base_url: String) -> (ViewController, Rc<RefCell<Vec<Notification>>>) {
    let config = DashboardConfig {
        base_url,
        ..DashboardConfig::default()
    };
    let transport = ReqwestTransport::new(&config).expect("client");
    let notes = Rc::new(RefCell::new(Vec::new()));
    let sink = notes.clone();
    let ctrl = ViewController::new(config, transport, move |n: Notification| {
        sink.borrow_mut().push(n)
    });
    (ctrl, notes)
}

#[tokio::test]
async fn full_session_against_live_backend() {
    let (ctrl, notes) = controller(spawn_backend().await);

    ctrl.initialize().await.expect("model info");
    let info = ctrl.state().model_info;
    assert_eq!(info.spam_count(), Some(747));
    assert_eq!(info.token_count(), Some(8713));

    ctrl.fill_sample_text(SampleCategory::Spam).await;
    assert_eq!(ctrl.state().input_text, SPAM_SAMPLE);

    ctrl.submit().await;
    let state = ctrl.state();
    assert_eq!(state.predictions.primary.prediction(), Some("97.50"));
    assert_eq!(state.predictions.secondary.prediction(), Some("100.0%"));

    let messages: Vec<String> = notes.borrow().iter().map(|n| n.message.clone()).collect();
    assert_eq!(
        messages,
        vec!["Loaded a sample spam message", "Predictions Updated"]
    );
}

#[tokio::test]
async fn backend_error_message_reaches_user() {
    let (ctrl, notes) = controller(spawn_backend().await);

    ctrl.set_input_text("is the model offline?");
    ctrl.submit().await;

    let state = ctrl.state();
    assert!(!state.predictions.primary.have_prediction);
    assert!(state.predictions.secondary.have_prediction);

    let notes = notes.borrow();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].is_warning());
    assert_eq!(notes[0].message, "model has not yet been trained");
}

#[tokio::test]
async fn unreachable_backend_degrades_gracefully() {
    let (ctrl, notes) = controller("http://127.0.0.1:1".to_string());

    assert!(ctrl.initialize().await.is_err());
    assert!(notes.borrow().is_empty());

    ctrl.set_input_text("hello");
    ctrl.submit().await;

    let notes = notes.borrow();
    assert_eq!(notes.len(), 2);
    assert!(notes
        .iter()
        .all(|n| n.is_warning() && n.message == PREDICTION_FAILED));
    assert!(ctrl.state().model_info.is_empty());
}
