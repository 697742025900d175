//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::{RequireAdmin, RequireAuth};
use crate::components::navigation::Navigation;
use crate::pages::{
    about::AboutPage, admin::AdminPage, admin_users::AdminUsersPage, dashboard::DashboardPage,
    home::HomePage, login::LoginPage, not_found::NotFoundPage, profile::ProfilePage,
    register::RegisterPage, settings::SettingsPage,
};
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context, restores a stored sign-in on first
/// load, and sets up client-side routing. The navigation bar is rendered
/// alongside every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Single writer for session state; everything else reads the signal.
    let session = RwSignal::new(Session::default());
    provide_context(session);

    // Restore the session from a stored token, if any.
    #[cfg(feature = "hydrate")]
    {
        session.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            session.update(|s| {
                s.user = user;
                s.loading = false;
            });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/reckon-client.css"/>
        <Title text="Reckon"/>

        <Router>
            <Navigation/>
            <main class="page">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("settings")
                        view=|| view! { <RequireAuth><SettingsPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <RequireAdmin><AdminPage/></RequireAdmin> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("users"))
                        view=|| view! { <RequireAdmin><AdminUsersPage/></RequireAdmin> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
