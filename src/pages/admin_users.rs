//! User management page for admins.

use leptos::prelude::*;

/// User management page, reachable only through the admin guard.
#[component]
pub fn AdminUsersPage() -> impl IntoView {
    view! {
        <div class="page__body">
            <h1>"User Management"</h1>
            <p>"User management will be implemented here."</p>
        </div>
    }
}
