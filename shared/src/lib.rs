//! Shared types for the Stockdeck dashboard
//!
//! Common types used across the client and application crates: data models,
//! error codes, response envelopes, and utility helpers.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
