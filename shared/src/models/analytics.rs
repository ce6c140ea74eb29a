//! User analytics payload (`GET /analytics` on the auth collaborator)

use serde::{Deserialize, Serialize};

/// Per-role user counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(rename = "totalUsers")]
    pub total_users: u32,
    pub admin: u32,
    pub sales: u32,
    pub inventory: u32,
}

/// Analytics envelope as returned by the auth collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAnalytics {
    pub stats: UserStats,
}
