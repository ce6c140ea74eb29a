//! Sales collaborator client

use crate::{ClientResult, HttpClient};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::models::{Product, Sale, SaleCreate};

/// Sales analytics payload (`GET /analytics`, `GET /user/analytics`)
#[derive(Debug, Clone, Deserialize)]
pub struct SalesAnalytics {
    #[serde(rename = "totalSales")]
    pub total_sales: Decimal,
    #[serde(rename = "totalItemsSold")]
    pub total_items_sold: u32,
    #[serde(rename = "averageSale")]
    pub average_sale: Decimal,
}

/// Sales service client
#[derive(Debug)]
pub struct SalesClient {
    http: HttpClient,
}

impl SalesClient {
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
    pub async fn add_sale(&self, sale: &SaleCreate) -> ClientResult<Sale> {
        self.http.post("/add", sale).await
    }

    /// `GET /all`
    pub async fn all_sales(&self) -> ClientResult<Vec<Sale>> {
        self.http.get("/all").await
    }

    /// `GET /user` - sales recorded by the current user
    pub async fn user_sales(&self) -> ClientResult<Vec<Sale>> {
        self.http.get("/user").await
    }

    /// `GET /user/analytics`
    pub async fn user_analytics(&self) -> ClientResult<SalesAnalytics> {
        self.http.get("/user/analytics").await
    }

    /// `GET /analytics`
    pub async fn analytics(&self) -> ClientResult<SalesAnalytics> {
        self.http.get("/analytics").await
    }

    /// `GET /products` - the sellable catalog as the sales service sees it
    pub async fn products(&self) -> ClientResult<Vec<Product>> {
        self.http.get("/products").await
    }
}
