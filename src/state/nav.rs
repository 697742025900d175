#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::session::Session;

/// A single navigable link entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

/// Glyph rendered next to a navigation label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Home,
    Info,
    Chart,
    User,
    Settings,
    Shield,
    Users,
}

/// Links visible to every visitor, in display order.
pub const GENERIC_ITEMS: &[NavItem] = &[
    NavItem {
        path: "/",
        label: "Home",
        icon: Icon::Home,
    },
    NavItem {
        path: "/about",
        label: "About",
        icon: Icon::Info,
    },
];

/// Links visible to signed-in users, in display order.
pub const USER_ITEMS: &[NavItem] = &[
    NavItem {
        path: "/dashboard",
        label: "Dashboard",
        icon: Icon::Chart,
    },
    NavItem {
        path: "/profile",
        label: "Profile",
        icon: Icon::User,
    },
    NavItem {
        path: "/settings",
        label: "Settings",
        icon: Icon::Settings,
    },
];

/// Links visible to admins only, in display order.
pub const ADMIN_ITEMS: &[NavItem] = &[
    NavItem {
        path: "/admin",
        label: "Admin Panel",
        icon: Icon::Shield,
    },
    NavItem {
        path: "/admin/users",
        label: "User Management",
        icon: Icon::Users,
    },
];

/// Sign-in action target shown to signed-out visitors.
pub const LOGIN_PATH: &str = "/login";

/// Registration action target shown to signed-out visitors.
pub const REGISTER_PATH: &str = "/register";

/// Links visible for the given session, in display order.
///
/// Generic links always show. Signed-in users additionally get the user
/// section, and admins the admin section after it.
pub fn visible_items(session: &Session) -> Vec<&'static NavItem> {
    let mut items: Vec<&'static NavItem> = GENERIC_ITEMS.iter().collect();
    if session.is_authenticated() {
        items.extend(USER_ITEMS);
        if session.is_admin() {
            items.extend(ADMIN_ITEMS);
        }
    }
    items
}
