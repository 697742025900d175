//! Settings page for signed-in users.

use leptos::prelude::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="page__body">
            <h1>"Settings"</h1>
            <p>"User settings will be implemented here."</p>
        </div>
    }
}
