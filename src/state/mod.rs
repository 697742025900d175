//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `nav`, `ui`) so individual
//! components can depend on small focused models. The navigation tables
//! are plain data filtered by a pure function, which keeps the conditional
//! link logic testable without rendering anything.

pub mod nav;
pub mod session;
pub mod ui;
