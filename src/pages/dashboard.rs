//! Dashboard page for signed-in users.

use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="page__body">
            <h1>"Dashboard"</h1>
            <p>"User dashboard will be implemented here."</p>
        </div>
    }
}
