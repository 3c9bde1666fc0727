use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Argon2 PHC string. Never leaves the process.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub email: Option<String>,
    pub organization: Option<String>,
}

/// Fields for a user about to be created; the repository assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email: Option<String>,
    pub organization: Option<String>,
}

/// Partial profile update. `None` means "leave unchanged".
#[derive(Debug, Default, Clone)]
pub struct UserPatch {
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
}
