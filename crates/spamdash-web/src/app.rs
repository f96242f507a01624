use leptos::prelude::*;

use crate::components::header::Header;
use crate::pages::dashboard::DashboardPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <Header />
            <main class="content">
                <DashboardPage />
            </main>
        </div>
    }
}
