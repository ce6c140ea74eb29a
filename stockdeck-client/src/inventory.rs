//! Inventory collaborator client

use crate::{ClientResult, HttpClient};
use shared::models::{Product, ProductCreate, ProductUpdate};

/// Inventory service client
#[derive(Debug)]
pub struct InventoryClient {
    http: HttpClient,
}

impl InventoryClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.http.set_token(token);
    }

    pub fn clear_token(&mut self) {
        self.http.clear_token();
    }

    /// `POST /add`
    pub async fn add_product(&self, product: &ProductCreate) -> ClientResult<Product> {
        self.http.post("/add", product).await
    }

    /// `PUT /:id`
    pub async fn update_product(
        &self,
        product_id: i64,
        update: &ProductUpdate,
    ) -> ClientResult<Product> {
        self.http.put(&format!("/{}", product_id), update).await
    }

    /// `DELETE /:id`
    pub async fn delete_product(&self, product_id: i64) -> ClientResult<()> {
        let _: serde_json::Value = self.http.delete(&format!("/{}", product_id)).await?;
        Ok(())
    }

    /// `GET /all`
    pub async fn all_products(&self) -> ClientResult<Vec<Product>> {
        self.http.get("/all").await
    }

    /// `GET /:id`
    pub async fn product(&self, product_id: i64) -> ClientResult<Product> {
        self.http.get(&format!("/{}", product_id)).await
    }
}
