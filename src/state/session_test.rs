use super::*;

fn user(full_name: Option<&str>, is_superuser: bool) -> User {
    User {
        id: 1,
        email: "ada@x.com".to_owned(),
        full_name: full_name.map(str::to_owned),
        is_active: true,
        is_superuser,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_default_no_user() {
    let session = Session::default();
    assert!(session.user.is_none());
}

#[test]
fn session_default_not_loading() {
    let session = Session::default();
    assert!(!session.loading);
}

#[test]
fn session_default_not_authenticated() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
}

// =============================================================
// Derived reads
// =============================================================

#[test]
fn signed_in_user_is_authenticated() {
    let mut session = Session::default();
    session.log_in(user(None, false));
    assert!(session.is_authenticated());
    assert!(!session.is_admin());
}

#[test]
fn superuser_is_admin() {
    let mut session = Session::default();
    session.log_in(user(None, true));
    assert!(session.is_authenticated());
    assert!(session.is_admin());
}

#[test]
fn admin_requires_a_user() {
    // The admin flag lives on the user record, so a signed-out session
    // can never report admin.
    let session = Session::default();
    assert!(!session.is_admin());
}

// =============================================================
// Display name fallback chain
// =============================================================

#[test]
fn display_name_prefers_full_name() {
    let mut session = Session::default();
    session.log_in(user(Some("Ada Lovelace"), false));
    assert_eq!(session.display_name(), "Ada Lovelace");
}

#[test]
fn display_name_falls_back_to_email() {
    let mut session = Session::default();
    session.log_in(user(None, false));
    assert_eq!(session.display_name(), "ada@x.com");
}

#[test]
fn display_name_empty_when_signed_out() {
    let session = Session::default();
    assert_eq!(session.display_name(), "");
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn log_in_clears_loading() {
    let mut session = Session {
        user: None,
        loading: true,
    };
    session.log_in(user(None, false));
    assert!(!session.loading);
    assert!(session.is_authenticated());
}

#[test]
fn log_out_returns_to_initial_state() {
    let mut session = Session::default();
    session.log_in(user(Some("Ada Lovelace"), true));
    session.log_out();
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
    assert_eq!(session.display_name(), "");
}
