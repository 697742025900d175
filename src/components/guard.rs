//! Route guards wrapping views that require a signed-in or admin session.
//!
//! Each guard waits for the mount-time session fetch to settle before
//! redirecting, so a returning visitor with a valid stored token is not
//! bounced through the login page while the fetch is in flight.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;

/// Renders its children only for signed-in users; otherwise redirects
/// to `/login` once the session has loaded.
#[component]
pub fn RequireAuth(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    children()
}

/// Renders its children only for admins. Signed-out visitors are sent to
/// `/login`, signed-in non-admins back to the home page.
#[component]
pub fn RequireAdmin(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        if !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        } else if !state.is_admin() {
            navigate("/", NavigateOptions::default());
        }
    });

    children()
}
