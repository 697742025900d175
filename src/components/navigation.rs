//! Responsive navigation bar with authentication-aware link sections.

use leptos::prelude::*;

use crate::components::nav_icon::NavIcon;
use crate::state::nav::{LOGIN_PATH, REGISTER_PATH, visible_items};
use crate::state::session::Session;
use crate::state::ui::MenuState;

/// Top navigation bar, rendered alongside every page.
///
/// The link list comes from [`visible_items`]: generic links always show,
/// signed-in users get their section, admins additionally the admin section.
/// Signed-out visitors get Login and Register actions; signed-in users an
/// identity label and a Logout button. On narrow viewports the same links
/// collapse behind a hamburger toggle.
#[component]
pub fn Navigation() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    // Menu state is local to this component; nothing else reads it.
    let menu = RwSignal::new(MenuState::default());

    let authenticated = move || session.get().is_authenticated();
    let display_name = move || session.get().display_name();
    let visible = move || visible_items(&session.get());
    let menu_open = move || menu.get().open;

    let toggle_menu = move |_| menu.update(MenuState::toggle);
    let close_menu = move |_| menu.update(MenuState::close);

    // Drop the token first, then clear the session and close the menu.
    let on_logout = move |_| {
        crate::net::api::logout();
        session.update(Session::log_out);
        menu.update(MenuState::close);
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">
                    "Reckon"
                </a>

                <div class="navbar__links">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <a href=item.path class="navbar__link">
                                        <NavIcon icon=item.icon/>
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <Show
                        when=authenticated
                        fallback=|| {
                            view! {
                                <a href=LOGIN_PATH class="btn btn--outline">
                                    "Login"
                                </a>
                                <a href=REGISTER_PATH class="btn btn--primary">
                                    "Register"
                                </a>
                            }
                        }
                    >
                        <span class="navbar__user">{display_name}</span>
                        <button class="btn btn--outline" on:click=on_logout>
                            "Logout"
                        </button>
                    </Show>
                </div>

                <button class="navbar__toggle" on:click=toggle_menu title="Menu">
                    {move || if menu_open() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>

            <Show when=menu_open>
                <div class="navbar__menu">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.path
                                        class="navbar__menu-link"
                                        on:click=close_menu
                                    >
                                        <NavIcon icon=item.icon/>
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <Show
                        when=authenticated
                        fallback=move || {
                            view! {
                                <a
                                    href=LOGIN_PATH
                                    class="navbar__menu-link"
                                    on:click=close_menu
                                >
                                    "Login"
                                </a>
                                <a
                                    href=REGISTER_PATH
                                    class="navbar__menu-link"
                                    on:click=close_menu
                                >
                                    "Register"
                                </a>
                            }
                        }
                    >
                        <div class="navbar__menu-user">
                            <span class="navbar__user">{display_name}</span>
                            <button class="btn btn--outline" on:click=on_logout>
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}
