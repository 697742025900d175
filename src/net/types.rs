#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// User record as served by `GET /api/v1/users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

/// Bearer token issued by `POST /api/v1/auth/login`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}
