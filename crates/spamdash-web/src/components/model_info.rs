use leptos::prelude::*;
use spamdash_core::ViewState;

#[component]
pub fn ModelInfoPanel(state: RwSignal<ViewState>) -> impl IntoView {
    let rows = move || state.with(|s| s.model_info.display_rows());

    view! {
        <div class="model-info-panel">
            <h3>"Model"</h3>
            {move || {
                let rows = rows();
                if rows.is_empty() {
                    view! { <p class="placeholder">"No model information available"</p> }.into_any()
                } else {
                    view! {
                        <table class="model-info-table">
                            <tbody>
                                {rows.into_iter().map(|(label, value)| view! {
                                    <tr>
                                        <td>{label}</td>
                                        <td>{value}</td>
                                    </tr>
                                }).collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }.into_any()
                }
            }}
        </div>
    }
}
