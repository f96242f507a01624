use leptos::prelude::*;
use spamdash_client::ViewController;
use spamdash_core::{DashboardConfig, Notification, SampleCategory, ViewState};

use crate::api::GlooTransport;
use crate::components::model_info::ModelInfoPanel;
use crate::components::prediction_card::PredictionCard;
use crate::components::toasts::{show_toast, ToastQueue, Toasts};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = RwSignal::new(ViewState::default());
    let toasts = RwSignal::new(ToastQueue::default());

    let config = DashboardConfig::same_origin();
    let backends = config.prediction_backends();
    let controller = ViewController::new(config, GlooTransport, move |n: Notification| {
        show_toast(toasts, n)
    });
    controller.on_render(move |s| state.set(s.clone()));
    let ctrl = StoredValue::new_local(controller);

    // Fetch model info on mount
    Effect::new(move || {
        let ctrl = ctrl.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = ctrl.initialize().await {
                web_sys::console::warn_1(&format!("model info unavailable: {}", e).into());
            }
        });
    });

    let submit = move |_| {
        let ctrl = ctrl.get_value();
        wasm_bindgen_futures::spawn_local(async move { ctrl.submit().await });
    };

    let fill = move |category: SampleCategory| {
        let ctrl = ctrl.get_value();
        wasm_bindgen_futures::spawn_local(async move { ctrl.fill_sample_text(category).await });
    };

    view! {
        <div class="page dashboard-page">
            <Toasts queue=toasts />

            <ModelInfoPanel state=state />

            <div class="input-panel">
                <label>"Message"</label>
                <textarea
                    rows="6"
                    placeholder="Paste or type a message to classify..."
                    prop:value=move || state.with(|s| s.input_text.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        ctrl.with_value(|c| c.set_input_text(text));
                    }
                ></textarea>

                <div class="button-group">
                    <button class="run-btn" on:click=submit>"Submit"</button>
                    {SampleCategory::all().iter().map(|c| {
                        let c = *c;
                        let label = match c {
                            SampleCategory::Spam => "Spam sample",
                            SampleCategory::Ham => "Ham sample",
                            SampleCategory::Clear => "Clear",
                        };
                        view! {
                            <button class="sample-btn" on:click=move |_| fill(c)>{label}</button>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>

            <div class="results-panel">
                {backends.into_iter().map(|backend| view! {
                    <PredictionCard backend=backend state=state />
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
