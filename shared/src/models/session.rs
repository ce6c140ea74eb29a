//! Session record
//!
//! The locally persisted identity/credential bundle for the currently
//! authenticated user. One user is active at a time.

use super::role::Role;
use serde::{Deserialize, Serialize};

/// Persisted session record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Opaque bearer token minted by the auth collaborator
    pub access_token: String,
}

impl SessionUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
            access_token: access_token.into(),
        }
    }
}
