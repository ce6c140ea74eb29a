//! Data models for the dashboard domain

pub mod analytics;
pub mod product;
pub mod role;
pub mod sale;
pub mod session;
pub mod user;

pub use analytics::{UserAnalytics, UserStats};
pub use product::{Product, ProductCreate, ProductSnapshot, ProductUpdate};
pub use role::Role;
pub use sale::{Sale, SaleCreate};
pub use session::SessionUser;
pub use user::{ManagedUser, UserUpdate};
