pub mod header;
pub mod model_info;
pub mod prediction_card;
pub mod toasts;
