//! Seed data for mock mode
//!
//! A small catalog and sales history used when the dashboard runs without
//! its collaborator services. Covers every stock status so the inventory
//! screens have something to show.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::models::{Product, ProductSnapshot, Sale};

/// Seed catalog: six products spanning in-stock, low-stock and out-of-stock
pub fn seed_products() -> Vec<Product> {
    vec![
        product(1, "Wireless Headphones", Decimal::new(12999, 2), 45, 10, "Headphones"),
        product(2, "Smart Watch", Decimal::new(19999, 2), 8, 10, "Watch"),
        product(3, "Bluetooth Speaker", Decimal::new(7999, 2), 23, 15, "Speaker"),
        product(4, "Laptop Stand", Decimal::new(4999, 2), 0, 5, "Stand"),
        product(5, "Wireless Mouse", Decimal::new(3999, 2), 12, 10, "Mouse"),
        product(6, "USB-C Hub", Decimal::new(5999, 2), 7, 8, "Hub"),
    ]
}

/// Seed sales history, newest first
pub fn seed_sales() -> Vec<Sale> {
    let products = seed_products();
    vec![
        sale(1, "2025-05-12T10:30:00Z", &products[0], 2),
        sale(2, "2025-05-12T09:15:00Z", &products[2], 1),
        sale(3, "2025-05-11T16:45:00Z", &products[1], 1),
        sale(4, "2025-05-11T14:20:00Z", &products[4], 3),
        sale(5, "2025-05-10T11:05:00Z", &products[0], 1),
    ]
}

fn product(id: i64, name: &str, price: Decimal, stock: u32, threshold: u32, tag: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        stock,
        threshold,
        image: format!("https://placehold.co/200x200?text={}", tag),
    }
}

fn sale(id: i64, date: &str, product: &Product, quantity: u32) -> Sale {
    let date: DateTime<Utc> = date.parse().unwrap_or_else(|_| Utc::now());
    Sale {
        id,
        date,
        product: ProductSnapshot::from(product),
        quantity,
        total: product.price * Decimal::from(quantity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_covers_every_stock_status() {
        let products = seed_products();
        assert!(products.iter().any(|p| p.stock == 0));
        assert!(products.iter().any(|p| p.stock > 0 && p.stock < p.threshold));
        assert!(products.iter().any(|p| p.stock >= p.threshold));
    }

    #[test]
    fn test_seed_sales_are_newest_first() {
        let sales = seed_sales();
        assert_eq!(sales.len(), 5);
        assert!(sales.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_seed_sale_totals_match_price_times_quantity() {
        for sale in seed_sales() {
            assert_eq!(sale.total, sale.product.price * Decimal::from(sale.quantity));
        }
    }
}
