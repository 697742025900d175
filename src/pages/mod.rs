//! Route-level page components. All are static placeholders pending the
//! real feature work behind each route.

pub mod about;
pub mod admin;
pub mod admin_users;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod settings;
