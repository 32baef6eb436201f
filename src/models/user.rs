//! User account model.

use serde::{Deserialize, Serialize};

/// Access level of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Master,
    Sector,
}

/// A sector assignment on a user account. User assignments are the only
/// place a sector identifier is declared as existing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSectorConfig {
    pub sector_id: String,
    pub label: String,
    pub authorized_count: u32,
}

/// A registered user account.
///
/// Passwords are stored in plaintext, inherited from the source data
/// model and documented as a known gap. API responses go through
/// [`User::sanitized`] so the password never leaves the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: UserRole,
    #[serde(default)]
    pub sectors: Vec<UserSectorConfig>,
}

impl User {
    /// Copy of this user with the password stripped, for API responses.
    pub fn sanitized(&self) -> User {
        User {
            password: None,
            ..self.clone()
        }
    }
}

/// Request body for creating a new user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: UserRole,
    #[serde(default)]
    pub sectors: Vec<UserSectorConfig>,
}

fn default_role() -> UserRole {
    UserRole::Sector
}

/// Request body for updating an existing user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub sectors: Option<Vec<UserSectorConfig>>,
}

/// Request body for a login attempt.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    /// Device name shown in the synced-terminals panel.
    #[serde(default)]
    pub device_name: Option<String>,
}
