//! Registration page.

use leptos::prelude::*;

/// Registration page placeholder; the sign-up form lands here.
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="page__body page__body--narrow">
            <h1>"Register"</h1>
            <p>"Registration form will be implemented here."</p>
        </div>
    }
}
