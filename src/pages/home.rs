//! Landing page.

use leptos::prelude::*;

/// Home page with the product greeting.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page__body page__body--center">
            <h1>"Welcome to Reckon"</h1>
            <p>"A modern account management platform."</p>
        </div>
    }
}
