//! Derived inventory and sales statistics
//!
//! Pure functions over the store's product and sale collections. Nothing in
//! here mutates state or performs I/O.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{Product, Sale};
use std::collections::HashMap;

/// Stock level classification
///
/// Total and mutually exclusive over all `(stock, threshold)` pairs:
/// out-of-stock wins when stock is zero, even when the threshold is zero too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn classify(stock: u32, threshold: u32) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock < threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn of(product: &Product) -> Self {
        Self::classify(product.stock, product.threshold)
    }

    /// Display label as shown in the inventory views
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Inventory headline numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventoryStats {
    pub total_products: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

impl InventoryStats {
    pub fn compute(products: &[Product]) -> Self {
        let mut stats = Self {
            total_products: products.len(),
            in_stock: 0,
            low_stock: 0,
            out_of_stock: 0,
        };
        for product in products {
            match StockStatus::of(product) {
                StockStatus::InStock => stats.in_stock += 1,
                StockStatus::LowStock => stats.low_stock += 1,
                StockStatus::OutOfStock => stats.out_of_stock += 1,
            }
        }
        stats
    }
}

/// One row of the top-products ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopProduct {
    pub product_id: i64,
    pub name: String,
    pub revenue: Decimal,
    pub units: u32,
}

/// Sales headline numbers plus the top-five products by revenue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesStats {
    pub total_revenue: Decimal,
    pub total_units: u32,
    /// Mean sale total, zero when there are no sales
    pub average_sale: Decimal,
    /// Products with at least one sale, by revenue descending, at most five
    pub top_products: Vec<TopProduct>,
}

const TOP_PRODUCT_LIMIT: usize = 5;

impl SalesStats {
    pub fn compute(sales: &[Sale]) -> Self {
        let total_revenue: Decimal = sales.iter().map(|s| s.total).sum();
        let total_units: u32 = sales.iter().map(|s| s.quantity).sum();
        let average_sale = if sales.is_empty() {
            Decimal::ZERO
        } else {
            total_revenue / Decimal::from(sales.len() as u64)
        };

        let mut by_product: HashMap<i64, TopProduct> = HashMap::new();
        for sale in sales {
            let entry = by_product
                .entry(sale.product.id)
                .or_insert_with(|| TopProduct {
                    product_id: sale.product.id,
                    name: sale.product.name.clone(),
                    revenue: Decimal::ZERO,
                    units: 0,
                });
            entry.revenue += sale.total;
            entry.units += sale.quantity;
        }

        let mut top_products: Vec<TopProduct> = by_product.into_values().collect();
        top_products.sort_by(|a, b| b.revenue.cmp(&a.revenue).then(a.product_id.cmp(&b.product_id)));
        top_products.truncate(TOP_PRODUCT_LIMIT);

        Self {
            total_revenue,
            total_units,
            average_sale,
            top_products,
        }
    }
}
