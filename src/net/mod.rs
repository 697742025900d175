//! Network layer: wire types and REST helpers for the `/api/v1` backend.

pub mod api;
pub mod types;
