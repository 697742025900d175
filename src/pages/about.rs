//! About page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page__body">
            <h1>"About"</h1>
            <p>"Learn more about our platform."</p>
        </div>
    }
}
