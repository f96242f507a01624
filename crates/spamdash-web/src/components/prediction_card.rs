use leptos::prelude::*;
use spamdash_core::{Backend, ViewState};

#[component]
pub fn PredictionCard(backend: Backend, state: RwSignal<ViewState>) -> impl IntoView {
    let result = move || state.with(|s| s.predictions.get(backend).clone());

    view! {
        <div class="prediction-card">
            <h3>{backend.label()}</h3>
            {move || {
                let r = result();
                if !r.have_prediction {
                    return view! { <p class="placeholder">"Submit text to see a prediction"</p> }.into_any();
                }
                let score = r.prediction().unwrap_or("?").to_string();
                let extra = r
                    .fields
                    .iter()
                    .filter(|(k, _)| k.as_str() != "prediction")
                    .map(|(k, v)| {
                        let value = v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string());
                        view! { <li>{k.clone()}": "{value}</li> }
                    })
                    .collect::<Vec<_>>();
                view! {
                    <div class="prediction">
                        <span class="score">{score}</span>
                        <span class="score-label">" spam probability"</span>
                        <ul class="prediction-fields">{extra}</ul>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
