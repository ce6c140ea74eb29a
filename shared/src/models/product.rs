//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
///
/// `stock` and `threshold` are unsigned by construction; the stock-status
/// classification in the app crate relies on that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Unit price, non-negative; a JSON number on the wire
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: u32,
    /// Inventory level below which the product is flagged "Low Stock"
    pub threshold: u32,
    /// Image URL
    pub image: String,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: u32,
    pub threshold: u32,
    pub image: Option<String>,
}

/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub stock: Option<u32>,
    pub threshold: Option<u32>,
    pub image: Option<String>,
}

/// Denormalized product data captured on a sale record
///
/// A sale keeps the product as it was at the time of sale; later edits or
/// deletes of the product must not rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

impl Product {
    /// Apply an update payload, field by field
    pub fn apply_update(&mut self, update: &ProductUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(threshold) = update.threshold {
            self.threshold = threshold;
        }
        if let Some(image) = &update.image {
            self.image = image.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: 1,
            name: "Wireless Headphones".to_string(),
            price: Decimal::new(12999, 2),
            stock: 45,
            threshold: 10,
            image: "https://placehold.co/200x200?text=Headphones".to_string(),
        }
    }

    #[test]
    fn test_apply_update_partial() {
        let mut p = product();
        p.apply_update(&ProductUpdate {
            stock: Some(40),
            ..Default::default()
        });
        assert_eq!(p.stock, 40);
        assert_eq!(p.name, "Wireless Headphones");
        assert_eq!(p.price, Decimal::new(12999, 2));
    }

    #[test]
    fn test_snapshot_captures_price() {
        let mut p = product();
        let snap = ProductSnapshot::from(&p);
        p.price = Decimal::new(9999, 2);
        assert_eq!(snap.price, Decimal::new(12999, 2));
        assert_eq!(snap.id, p.id);
    }

    #[test]
    fn test_price_serializes_as_number() {
        let json = serde_json::to_value(product()).unwrap();
        assert_eq!(json["price"], serde_json::json!(129.99));
    }
}
