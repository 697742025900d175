//! Login page.

use leptos::prelude::*;

/// Login page placeholder; the credential form lands here.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="page__body page__body--narrow">
            <h1>"Login"</h1>
            <p>"Login form will be implemented here."</p>
        </div>
    }
}
