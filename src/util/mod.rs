//! Browser-environment helpers.

pub mod token;
