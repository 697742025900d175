use super::*;

use crate::net::types::User;

fn session(signed_in: bool, is_superuser: bool) -> Session {
    let mut session = Session::default();
    if signed_in {
        session.log_in(User {
            id: 1,
            email: "ada@x.com".to_owned(),
            full_name: None,
            is_active: true,
            is_superuser,
        });
    }
    session
}

fn labels<'a>(items: impl IntoIterator<Item = &'a NavItem>) -> Vec<&'static str> {
    items.into_iter().map(|i| i.label).collect()
}

// =============================================================
// Table contents
// =============================================================

#[test]
fn generic_table_order() {
    assert_eq!(labels(GENERIC_ITEMS), ["Home", "About"]);
}

#[test]
fn user_table_order() {
    assert_eq!(labels(USER_ITEMS), ["Dashboard", "Profile", "Settings"]);
}

#[test]
fn admin_table_order() {
    assert_eq!(labels(ADMIN_ITEMS), ["Admin Panel", "User Management"]);
}

// =============================================================
// Visibility by session
// =============================================================

#[test]
fn signed_out_sees_generic_only() {
    let visible = visible_items(&session(false, false));
    assert_eq!(labels(visible), ["Home", "About"]);
}

#[test]
fn signed_out_admin_flag_is_irrelevant() {
    // A stale admin flag cannot leak links without a user record.
    let visible = visible_items(&session(false, true));
    assert_eq!(labels(visible), ["Home", "About"]);
}

#[test]
fn signed_in_sees_user_section() {
    let visible = visible_items(&session(true, false));
    assert_eq!(
        labels(visible),
        ["Home", "About", "Dashboard", "Profile", "Settings"]
    );
}

#[test]
fn signed_in_never_sees_admin_section() {
    let visible = visible_items(&session(true, false));
    assert!(visible.iter().all(|i| !i.path.starts_with("/admin")));
}

#[test]
fn admin_sees_everything_in_order() {
    let visible = visible_items(&session(true, true));
    assert_eq!(
        labels(visible),
        [
            "Home",
            "About",
            "Dashboard",
            "Profile",
            "Settings",
            "Admin Panel",
            "User Management",
        ]
    );
}

// =============================================================
// Route table integrity
// =============================================================

#[test]
fn all_nine_paths_are_distinct() {
    let mut paths: Vec<&str> = GENERIC_ITEMS
        .iter()
        .chain(USER_ITEMS)
        .chain(ADMIN_ITEMS)
        .map(|i| i.path)
        .collect();
    paths.push(LOGIN_PATH);
    paths.push(REGISTER_PATH);

    assert_eq!(paths.len(), 9);
    let mut deduped = paths.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), paths.len());
}

#[test]
fn tables_are_disjoint() {
    for generic in GENERIC_ITEMS {
        assert!(!USER_ITEMS.contains(generic));
        assert!(!ADMIN_ITEMS.contains(generic));
    }
    for user in USER_ITEMS {
        assert!(!ADMIN_ITEMS.contains(user));
    }
}
