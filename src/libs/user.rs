//! User account entity.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    /// SHA-256 hex digest of the password; never serialized in responses.
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub created_at: Option<String>,
    pub last_login: Option<String>,
}

impl User {
    pub fn new(username: &str, email: &str) -> Self {
        User {
            id: None,
            username: username.to_string(),
            email: email.to_string(),
            password_hash: None,
            created_at: None,
            last_login: None,
        }
    }
}
