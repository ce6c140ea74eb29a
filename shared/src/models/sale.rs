//! Sale Model

use super::product::ProductSnapshot;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sale record
///
/// Immutable once created: there is no edit or delete path for sales.
/// `total` is `product.price * quantity` at the time of sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub product: ProductSnapshot,
    /// Units sold, at least 1 and at most the product's stock at sale time
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Create sale payload sent to the sales collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCreate {
    pub product_id: i64,
    pub quantity: u32,
}
