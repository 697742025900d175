use super::*;

use crate::net::types::User;
use crate::state::session::Session;

// =============================================================
// MenuState
// =============================================================

#[test]
fn menu_starts_closed() {
    assert!(!MenuState::default().open);
}

#[test]
fn toggle_opens_a_closed_menu() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(menu.open);
}

#[test]
fn toggle_twice_closes_again() {
    let mut menu = MenuState::default();
    menu.toggle();
    menu.toggle();
    assert!(!menu.open);
}

#[test]
fn close_is_idempotent() {
    let mut menu = MenuState::default();
    menu.close();
    assert!(!menu.open);

    menu.toggle();
    menu.close();
    menu.close();
    assert!(!menu.open);
}

// =============================================================
// Logout handling
// =============================================================

// Mirrors the navigation bar's logout handler: the session is cleared
// first, then the menu closed.
#[test]
fn logout_with_open_menu_clears_both() {
    let mut session = Session::default();
    session.log_in(User {
        id: 1,
        email: "ada@x.com".to_owned(),
        full_name: None,
        is_active: true,
        is_superuser: false,
    });
    let mut menu = MenuState { open: true };

    session.log_out();
    menu.close();

    assert!(!session.is_authenticated());
    assert!(!menu.open);
}
