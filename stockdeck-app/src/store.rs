//! In-memory dashboard store
//!
//! Holds the product catalog and the sales history behind a single lock so
//! the sale transaction's stock decrement and sale append commit as one
//! state transition. Backs mock mode and caches collaborator fetches in
//! networked mode.

use chrono::Utc;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Product, ProductCreate, ProductSnapshot, ProductUpdate, Sale};
use shared::util::snowflake_id;

const DEFAULT_IMAGE: &str = "https://placehold.co/200x200?text=Product";

#[derive(Debug, Default)]
struct StoreState {
    products: Vec<Product>,
    /// Newest first
    sales: Vec<Sale>,
}

/// Product catalog + sales history under one lock
#[derive(Debug, Default)]
pub struct DashboardStore {
    state: RwLock<StoreState>,
}

impl DashboardStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the mock catalog and history
    pub fn with_fixtures() -> Self {
        let store = Self::new();
        store.seed(crate::fixtures::seed_products(), crate::fixtures::seed_sales());
        store
    }

    /// Replace both collections, e.g. after a collaborator fetch
    pub fn seed(&self, products: Vec<Product>, sales: Vec<Sale>) {
        let mut state = self.state.write();
        state.products = products;
        state.sales = sales;
    }

    pub fn products(&self) -> Vec<Product> {
        self.state.read().products.clone()
    }

    pub fn sales(&self) -> Vec<Sale> {
        self.state.read().sales.clone()
    }

    pub fn product(&self, product_id: i64) -> Option<Product> {
        self.state
            .read()
            .products
            .iter()
            .find(|p| p.id == product_id)
            .cloned()
    }

    /// Add a product to the catalog with a freshly minted id
    pub fn add_product(&self, create: ProductCreate) -> AppResult<Product> {
        if create.name.trim().is_empty() {
            return Err(AppError::with_message(
                ErrorCode::RequiredField,
                "Product name is required",
            ));
        }
        if create.price.is_sign_negative() {
            return Err(AppError::new(ErrorCode::ProductInvalidPrice));
        }

        let product = Product {
            id: snowflake_id(),
            name: create.name,
            price: create.price,
            stock: create.stock,
            threshold: create.threshold,
            image: create.image.unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
        };
        self.state.write().products.push(product.clone());
        tracing::info!(product_id = product.id, name = %product.name, "Product added");
        Ok(product)
    }

    /// Apply a partial update to an existing product
    ///
    /// Past sales keep their snapshot of the product as it was sold.
    pub fn update_product(&self, product_id: i64, update: &ProductUpdate) -> AppResult<Product> {
        if let Some(price) = update.price {
            if price.is_sign_negative() {
                return Err(AppError::new(ErrorCode::ProductInvalidPrice));
            }
        }

        let mut state = self.state.write();
        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| AppError::product_not_found(product_id))?;
        product.apply_update(update);
        Ok(product.clone())
    }

    /// Remove a product from the catalog; its sales history stays intact
    pub fn delete_product(&self, product_id: i64) -> AppResult<()> {
        let mut state = self.state.write();
        let before = state.products.len();
        state.products.retain(|p| p.id != product_id);
        if state.products.len() == before {
            return Err(AppError::product_not_found(product_id));
        }
        tracing::info!(product_id, "Product deleted");
        Ok(())
    }

    /// Mirror a product the collaborator created or edited
    pub fn upsert_product(&self, product: Product) {
        let mut state = self.state.write();
        match state.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => state.products.push(product),
        }
    }

    /// Mirror a collaborator-recorded sale into local state
    pub fn apply_sale(&self, sale: Sale) {
        let mut state = self.state.write();
        if let Some(product) = state.products.iter_mut().find(|p| p.id == sale.product.id) {
            product.stock = product.stock.saturating_sub(sale.quantity);
        }
        state.sales.insert(0, sale);
    }

    /// Record a sale: validate, decrement stock, prepend the sale record
    ///
    /// Preconditions are checked in order: no selection, unknown product,
    /// quantity of zero, quantity above stock. All checks happen under the
    /// write lock, so a failed sale provably mutates nothing and the two
    /// mutations of a successful sale are one transition.
    pub fn record_sale(&self, product_id: Option<i64>, quantity: u32) -> AppResult<Sale> {
        let product_id = product_id.ok_or_else(AppError::no_product_selected)?;

        let mut state = self.state.write();
        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| AppError::product_not_found(product_id))?;

        if quantity == 0 {
            return Err(AppError::new(ErrorCode::InvalidQuantity));
        }
        if quantity > product.stock {
            return Err(AppError::insufficient_stock(product.stock));
        }
        // total computed before any mutation; a non-representable total
        // rejects the sale instead of panicking on Decimal overflow
        let total = product
            .price
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::ValueOutOfRange, "Sale total is too large")
            })?;

        product.stock -= quantity;
        let sale = Sale {
            id: snowflake_id(),
            date: Utc::now(),
            product: ProductSnapshot::from(&*product),
            quantity,
            total,
        };
        state.sales.insert(0, sale.clone());
        tracing::info!(
            sale_id = sale.id,
            product_id,
            quantity,
            total = %sale.total,
            "Sale recorded"
        );
        Ok(sale)
    }
}
