use std::cell::RefCell;
use std::rc::Rc;

use futures::future::join_all;
use serde::de::DeserializeOwned;
use spamdash_core::{
    decode_content, Backend, DashboardConfig, ModelInfo, Notification, PredictionRequest,
    PredictionResult, Result, SampleCategory, ViewState,
};

use crate::notifier::Notifier;
use crate::transport::{HttpResponse, Transport};

pub const EMPTY_INPUT_WARNING: &str = "no text entered, please enter submit again";
pub const PREDICTIONS_UPDATED: &str = "Predictions Updated";
pub const PREDICTION_FAILED: &str = "an error occurred, please try again";
pub const SAMPLE_FAILED: &str = "could not fetch a sample message, please try again";

type RenderFn = Box<dyn Fn(&ViewState)>;

struct Inner {
    config: DashboardConfig,
    transport: Box<dyn Transport>,
    notifier: Box<dyn Notifier>,
    state: RefCell<ViewState>,
    render: RefCell<Option<RenderFn>>,
}

/// Owns the dashboard's [`ViewState`] and performs every mutation of it.
///
/// Cloning is cheap and yields a handle to the same controller, so event
/// handlers can each hold one. Every operation is an `async fn` meant to be
/// spawned on the front end's (single-threaded) event loop; no `RefCell`
/// borrow is held across an `.await`, so operations may overlap freely.
#[derive(Clone)]
pub struct ViewController {
    inner: Rc<Inner>,
}

impl ViewController {
    pub fn new(
        config: DashboardConfig,
        transport: impl Transport + 'static,
        notifier: impl Notifier + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                config,
                transport: Box::new(transport),
                notifier: Box::new(notifier),
                state: RefCell::new(ViewState::default()),
                render: RefCell::new(None),
            }),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    /// Registers the callback that receives the state after every mutation.
    /// It must not call back into the controller synchronously.
    pub fn on_render(&self, render: impl Fn(&ViewState) + 'static) {
        *self.inner.render.borrow_mut() = Some(Box::new(render));
        self.render();
    }

    pub fn state(&self) -> ViewState {
        self.inner.state.borrow().clone()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    /// Text field binding for user edits.
    pub fn set_input_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.update(|s| s.input_text = text);
    }

    /// Fetches model metadata. A failure is logged and returned, but the user
    /// is not notified; the model info simply stays empty.
    pub async fn initialize(&self) -> Result<()> {
        let config = &self.inner.config;
        let url = config.url(&config.endpoints.model_info);

        match decode::<ModelInfo>(self.inner.transport.get(&url).await) {
            Ok(info) => {
                tracing::info!("Model info loaded ({} fields)", info.fields().len());
                self.update(|s| s.model_info = info);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to fetch model info: {}", e);
                Err(e)
            }
        }
    }

    /// Sends the input text to every configured prediction backend at once.
    ///
    /// Each backend's answer is applied as soon as it arrives; a failure on
    /// one never touches the other. In-flight requests from an earlier call
    /// are not cancelled, so the last response to land wins.
    pub async fn submit(&self) {
        self.update(|s| s.predictions.reset());

        let text = self.with_state(|s| s.input_text.clone());
        if text.is_empty() {
            self.notify(Notification::warning(
                EMPTY_INPUT_WARNING,
                self.inner.config.notifications.warning(),
            ));
            return;
        }

        let body = match serde_json::to_value(PredictionRequest { text }) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Failed to encode prediction request: {}", e);
                self.notify(Notification::warning(
                    PREDICTION_FAILED,
                    self.inner.config.notifications.warning(),
                ));
                return;
            }
        };

        let backends = self.inner.config.prediction_backends();
        tracing::debug!("Submitting to {} backend(s)", backends.len());
        join_all(backends.into_iter().map(|b| self.predict(b, &body))).await;
    }

    async fn predict(&self, backend: Backend, body: &serde_json::Value) {
        let config = &self.inner.config;
        let Some(path) = config.prediction_path(backend) else {
            return;
        };
        let url = config.url(path);

        match decode::<PredictionResult>(self.inner.transport.post_json(&url, body).await) {
            Ok(prediction) => {
                tracing::info!(
                    "{:?} prediction: {}",
                    backend,
                    prediction.prediction().unwrap_or("-")
                );
                self.update(|s| *s.predictions.get_mut(backend) = prediction);
                if backend.announces_success() {
                    self.notify(Notification::success(
                        PREDICTIONS_UPDATED,
                        config.notifications.predictions_updated(),
                    ));
                }
            }
            Err(e) => {
                tracing::warn!("{:?} prediction failed: {}", backend, e);
                self.notify(Notification::warning(
                    e.user_message(PREDICTION_FAILED),
                    config.notifications.warning(),
                ));
            }
        }
    }

    /// Empties the input and the predictions, then (unless `category` is
    /// [`SampleCategory::Clear`]) loads a canned message of that category.
    pub async fn fill_sample_text(&self, category: SampleCategory) {
        self.update(|s| {
            s.input_text.clear();
            s.predictions.reset();
        });

        if category.is_clear() {
            return;
        }

        let config = &self.inner.config;
        let url = config.url(&config.sample_path(category));

        match decode::<String>(self.inner.transport.get(&url).await) {
            Ok(text) => {
                self.update(|s| s.input_text = text);
                self.notify(Notification::success(
                    format!("Loaded a sample {} message", category),
                    config.notifications.sample_fetched(),
                ));
            }
            Err(e) => {
                tracing::warn!("Failed to fetch {} sample: {}", category, e);
                self.notify(Notification::warning(
                    SAMPLE_FAILED,
                    config.notifications.warning(),
                ));
            }
        }
    }

    fn update(&self, f: impl FnOnce(&mut ViewState)) {
        f(&mut self.inner.state.borrow_mut());
        self.render();
    }

    fn render(&self) {
        if let Some(render) = self.inner.render.borrow().as_ref() {
            render(&self.inner.state.borrow());
        }
    }

    fn notify(&self, notification: Notification) {
        tracing::debug!(
            "Notify [{}] {}",
            notification.level.label(),
            notification.message
        );
        self.inner.notifier.notify(notification);
    }
}

fn decode<T: DeserializeOwned>(response: Result<HttpResponse>) -> Result<T> {
    let response = response?;
    decode_content(response.status, &response.body)
}
