pub mod controller;
#[cfg(feature = "reqwest")]
pub mod http;
pub mod notifier;
pub mod transport;

pub use controller::{
    ViewController, EMPTY_INPUT_WARNING, PREDICTIONS_UPDATED, PREDICTION_FAILED, SAMPLE_FAILED,
};
#[cfg(feature = "reqwest")]
pub use http::ReqwestTransport;
pub use notifier::Notifier;
pub use transport::{HttpResponse, Transport};
