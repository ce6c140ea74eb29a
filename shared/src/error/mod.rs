//! Unified error handling
//!
//! Error codes, categories, HTTP status mapping, and the `AppError` /
//! `ApiResponse` types shared by the client and application crates.

pub mod category;
pub mod codes;
pub mod http;
pub mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
