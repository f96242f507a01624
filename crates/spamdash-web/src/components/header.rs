use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"spamdash"</h1>
            <span class="subtitle">"Spam Classifier Dashboard"</span>
        </header>
    }
}
