//! Inline SVG glyphs for navigation entries.

use leptos::prelude::*;

use crate::state::nav::Icon;

/// Small stroked glyph rendered before a navigation label.
#[component]
pub fn NavIcon(icon: Icon) -> impl IntoView {
    view! {
        <svg class="nav-icon" viewBox="0 0 20 20" aria-hidden="true">
            {match icon {
                Icon::Home => {
                    view! {
                        <path d="M3 9l7-6 7 6"></path>
                        <path d="M5 8v9h10V8"></path>
                    }
                        .into_any()
                }
                Icon::Info => {
                    view! {
                        <circle cx="10" cy="10" r="7"></circle>
                        <line x1="10" y1="9" x2="10" y2="14"></line>
                        <line x1="10" y1="6" x2="10" y2="6.5"></line>
                    }
                        .into_any()
                }
                Icon::Chart => {
                    view! {
                        <line x1="5" y1="16" x2="5" y2="10"></line>
                        <line x1="10" y1="16" x2="10" y2="4"></line>
                        <line x1="15" y1="16" x2="15" y2="7"></line>
                    }
                        .into_any()
                }
                Icon::User => {
                    view! {
                        <circle cx="10" cy="7" r="3"></circle>
                        <path d="M4 17a6 6 0 0 1 12 0"></path>
                    }
                        .into_any()
                }
                Icon::Settings => {
                    view! {
                        <circle cx="10" cy="10" r="3"></circle>
                        <path d="M10 3v2M10 15v2M3 10h2M15 10h2M5 5l1.5 1.5M13.5 13.5L15 15M15 5l-1.5 1.5M6.5 13.5L5 15"></path>
                    }
                        .into_any()
                }
                Icon::Shield => {
                    view! {
                        <path d="M10 3l6 2v5c0 4-2.5 6-6 7-3.5-1-6-3-6-7V5z"></path>
                    }
                        .into_any()
                }
                Icon::Users => {
                    view! {
                        <circle cx="7" cy="7" r="3"></circle>
                        <path d="M2 17a5 5 0 0 1 10 0"></path>
                        <circle cx="14" cy="8" r="2.5"></circle>
                        <path d="M13 12.5a5 5 0 0 1 5 4.5"></path>
                    }
                        .into_any()
                }
            }}
        </svg>
    }
}
