//! Role-based navigation gate
//!
//! Decides which dashboard sections a role may enter. This gate only shapes
//! the navigation surface; the collaborator services enforce authorization
//! on every request regardless.

use crate::session::AuthState;
use serde::Serialize;
use shared::models::Role;

/// Gated dashboard sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Section {
    UserAdmin,
    Inventory,
    Sales,
}

impl Section {
    /// Landing route for the section
    pub fn path(&self) -> &'static str {
        match self {
            Section::UserAdmin => "/user-management",
            Section::Inventory => "/inventory-dashboard",
            Section::Sales => "/sales",
        }
    }

    /// Management sub-route, where the section has one
    pub fn management_path(&self) -> Option<&'static str> {
        match self {
            Section::UserAdmin => None,
            Section::Inventory => Some("/inventory/management"),
            Section::Sales => Some("/sales/management"),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::UserAdmin => "User Management",
            Section::Inventory => "Inventory",
            Section::Sales => "Sales",
        }
    }
}

/// Routes outside the role gate
pub mod routes {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const DASHBOARD: &str = "/dashboard";
}

/// Outcome of a gate check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDecision {
    Allow,
    /// Not logged in; send to the login page
    RedirectToLogin,
    /// Logged in, but the role does not carry this section
    Denied,
}

/// Sections offered to a role, in display order
pub fn sections_for(role: Role) -> &'static [Section] {
    match role {
        Role::Admin => &[Section::UserAdmin, Section::Inventory, Section::Sales],
        Role::Sales => &[Section::Sales],
        Role::Inventory => &[Section::Inventory],
        Role::User => &[],
    }
}

/// Gate the dashboard landing page: any authenticated user may enter
pub fn check_dashboard(state: AuthState) -> NavDecision {
    match state {
        AuthState::Unauthenticated => NavDecision::RedirectToLogin,
        AuthState::Authenticated(_) => NavDecision::Allow,
    }
}

/// Gate a navigation attempt
pub fn check(state: AuthState, section: Section) -> NavDecision {
    match state {
        AuthState::Unauthenticated => NavDecision::RedirectToLogin,
        AuthState::Authenticated(role) => {
            if sections_for(role).contains(&section) {
                NavDecision::Allow
            } else {
                tracing::debug!(role = %role, section = ?section, "Navigation denied");
                NavDecision::Denied
            }
        }
    }
}
