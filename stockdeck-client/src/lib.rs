//! Stockdeck Client - HTTP clients for the dashboard collaborators
//!
//! Provides typed, bearer-token-authenticated calls to the three external
//! services the dashboard talks to: auth, sales, and inventory.

pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod inventory;
pub mod sales;

pub use auth::AuthClient;
pub use cache::TtlCache;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use inventory::InventoryClient;
pub use sales::SalesClient;

// Re-export shared types for convenience
pub use shared::models::{ManagedUser, Product, Sale, SessionUser, UserAnalytics};
