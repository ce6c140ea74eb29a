//! Managed user (admin-facing)

use super::role::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User record as managed from the admin screen
///
/// Uses the same [`Role`] enum as the session record; the historical casing
/// divergence between the two surfaces is absorbed at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedUser {
    #[serde(alias = "userId", alias = "_id")]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, alias = "lastLogin")]
    pub last_login: Option<DateTime<Utc>>,
}

/// Update user payload (`PUT /update` on the auth collaborator)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Only sent when the admin sets a new password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
