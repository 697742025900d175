//! Fallback page for unknown paths.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page__body page__body--center">
            <h1>"Page not found"</h1>
            <p>"The address you followed does not exist."</p>
            <a href="/" class="btn btn--primary">
                "Back to home"
            </a>
        </div>
    }
}
