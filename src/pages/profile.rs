//! Profile page for signed-in users.

use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <div class="page__body">
            <h1>"Profile"</h1>
            <p>"User profile will be implemented here."</p>
        </div>
    }
}
