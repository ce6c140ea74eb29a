//! Stockdeck application layer
//!
//! Everything the dashboard UI shell calls into: the session store, the
//! role-based navigation gate, the in-memory inventory/sales store with the
//! atomic sale transaction, derived statistics, chart aggregation and
//! display formatting. Rendering lives elsewhere; this crate owns the
//! behavior.

pub mod chart;
pub mod dashboard;
pub mod fixtures;
pub mod format;
pub mod nav;
pub mod session;
pub mod stats;
pub mod store;

pub use chart::{ChartBucket, ChartPeriod};
pub use dashboard::{Dashboard, Overview};
pub use nav::{NavDecision, Section};
pub use session::{AuthState, FileStorage, MemoryStorage, SessionStorage, SessionStore};
pub use stats::{InventoryStats, SalesStats, StockStatus, TopProduct};
pub use store::DashboardStore;

pub use shared::error::{AppError, AppResult, ErrorCode};
pub use shared::models::{
    ManagedUser, Product, ProductCreate, ProductUpdate, Role, Sale, SessionUser,
};
