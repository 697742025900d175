//! Admin panel page.

use leptos::prelude::*;

/// Admin panel landing page, reachable only through the admin guard.
#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <div class="page__body">
            <h1>"Admin Panel"</h1>
            <p>"Admin panel will be implemented here."</p>
        </div>
    }
}
