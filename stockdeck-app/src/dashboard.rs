//! Dashboard facade
//!
//! The operations a UI shell invokes, tied together over the session store,
//! the in-memory data store and (in networked mode) the collaborator
//! clients. Mock mode runs entirely on seeded local data; networked mode
//! treats the collaborators as the source of truth and mirrors their
//! responses into the local store.

use crate::chart::{self, ChartBucket, ChartPeriod};
use crate::nav::{self, NavDecision, Section};
use crate::session::{AuthState, SessionStore};
use crate::stats::{InventoryStats, SalesStats};
use crate::store::DashboardStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::error::{AppError, AppResult};
use shared::models::{
    ManagedUser, Product, ProductCreate, ProductUpdate, Role, Sale, SaleCreate, SessionUser,
    UserAnalytics, UserUpdate,
};
use stockdeck_client::{AuthClient, ClientConfig, HttpClient, InventoryClient, SalesClient};

/// Headline numbers for the overview screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub inventory: InventoryStats,
    pub sales: SalesStats,
}

struct Services {
    auth: AuthClient,
    sales: SalesClient,
    inventory: InventoryClient,
}

impl Services {
    fn connect(config: &ClientConfig) -> AppResult<Self> {
        Ok(Self {
            auth: AuthClient::new(HttpClient::new(&config.auth_url, config.timeout)?),
            sales: SalesClient::new(HttpClient::new(&config.sales_url, config.timeout)?),
            inventory: InventoryClient::new(HttpClient::new(&config.inventory_url, config.timeout)?),
        })
    }

    fn set_token(&mut self, token: &str) {
        self.auth.set_token(token);
        self.sales.set_token(token);
        self.inventory.set_token(token);
    }

    fn clear_token(&mut self) {
        self.auth.clear_token();
        self.sales.clear_token();
        self.inventory.clear_token();
    }
}

/// The application layer behind the dashboard UI
pub struct Dashboard {
    session: SessionStore,
    store: DashboardStore,
    services: Option<Services>,
}

impl Dashboard {
    /// Mock mode: seeded local data, no collaborators
    ///
    /// Authentication and user administration need the auth collaborator
    /// and are unavailable here; drive the session store directly instead.
    pub fn mock(session: SessionStore) -> Self {
        Self {
            session,
            store: DashboardStore::with_fixtures(),
            services: None,
        }
    }

    /// Networked mode against the configured collaborator services
    ///
    /// A session restored from storage re-arms the bearer token on all
    /// three clients.
    pub fn networked(session: SessionStore, config: &ClientConfig) -> AppResult<Self> {
        let mut services = Services::connect(config)?;
        if let Some(token) = session.token() {
            services.set_token(&token);
        }
        Ok(Self {
            session,
            store: DashboardStore::new(),
            services: Some(services),
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn store(&self) -> &DashboardStore {
        &self.store
    }

    fn services(&self) -> AppResult<&Services> {
        self.services
            .as_ref()
            .ok_or_else(|| AppError::config("Operation requires the collaborator services"))
    }

    fn services_mut(&mut self) -> AppResult<&mut Services> {
        self.services
            .as_mut()
            .ok_or_else(|| AppError::config("Operation requires the collaborator services"))
    }

    // ==================== Auth ====================

    /// Log in and persist the session
    pub async fn login(&mut self, email: &str, password: &str) -> AppResult<SessionUser> {
        let services = self.services_mut()?;
        let user = services.auth.login(email, password).await?;
        services.set_token(&user.access_token);
        self.session.set(user.clone())?;
        Ok(user)
    }

    /// Register a new account, then log in with it
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> AppResult<SessionUser> {
        let services = self.services_mut()?;
        let user = services.auth.register(name, email, password, role).await?;
        services.set_token(&user.access_token);
        self.session.set(user.clone())?;
        Ok(user)
    }

    /// Drop the session and disarm the clients
    pub fn logout(&mut self) -> AppResult<()> {
        if let Some(services) = self.services.as_mut() {
            services.clear_token();
        }
        self.session.clear()?;
        tracing::info!("Logged out");
        Ok(())
    }

    // ==================== Navigation ====================

    pub fn auth_state(&self) -> AuthState {
        self.session.auth_state()
    }

    /// Sections the current user is offered, in display order
    pub fn sections(&self) -> &'static [Section] {
        match self.session.auth_state() {
            AuthState::Authenticated(role) => nav::sections_for(role),
            AuthState::Unauthenticated => &[],
        }
    }

    pub fn check_navigation(&self, section: Section) -> NavDecision {
        nav::check(self.session.auth_state(), section)
    }

    /// Gate for the `/dashboard` landing page itself
    pub fn check_dashboard_landing(&self) -> NavDecision {
        nav::check_dashboard(self.session.auth_state())
    }

    // ==================== Data ====================

    /// Re-fetch products and sales from the collaborators (networked only)
    pub async fn refresh(&mut self) -> AppResult<()> {
        let Some(services) = self.services.as_ref() else {
            return Ok(());
        };
        let products = services.inventory.all_products().await?;
        let sales = services.sales.all_sales().await?;
        tracing::debug!(products = products.len(), sales = sales.len(), "Store refreshed");
        self.store.seed(products, sales);
        Ok(())
    }

    pub fn products(&self) -> Vec<Product> {
        self.store.products()
    }

    pub fn sales(&self) -> Vec<Sale> {
        self.store.sales()
    }

    /// Inventory and sales headline numbers over the current store
    pub fn overview(&self) -> Overview {
        Overview {
            inventory: InventoryStats::compute(&self.store.products()),
            sales: SalesStats::compute(&self.store.sales()),
        }
    }

    /// Chart series for the given period, anchored at `now`
    pub fn chart(&self, period: ChartPeriod, now: DateTime<Utc>) -> Vec<ChartBucket> {
        chart::aggregate(&self.store.sales(), period, now)
    }

    // ==================== Sales ====================

    /// Record a sale of `quantity` units of the selected product
    pub async fn sell(&mut self, product_id: Option<i64>, quantity: u32) -> AppResult<Sale> {
        match self.services.as_ref() {
            None => self.store.record_sale(product_id, quantity),
            Some(services) => {
                let product_id = product_id.ok_or_else(AppError::no_product_selected)?;
                let sale = services
                    .sales
                    .add_sale(&SaleCreate { product_id, quantity })
                    .await?;
                self.store.apply_sale(sale.clone());
                Ok(sale)
            }
        }
    }

    // ==================== Products ====================

    pub async fn add_product(&mut self, create: ProductCreate) -> AppResult<Product> {
        match self.services.as_ref() {
            None => self.store.add_product(create),
            Some(services) => {
                let product = services.inventory.add_product(&create).await?;
                self.store.upsert_product(product.clone());
                Ok(product)
            }
        }
    }

    pub async fn update_product(
        &mut self,
        product_id: i64,
        update: ProductUpdate,
    ) -> AppResult<Product> {
        match self.services.as_ref() {
            None => self.store.update_product(product_id, &update),
            Some(services) => {
                let product = services.inventory.update_product(product_id, &update).await?;
                self.store.upsert_product(product.clone());
                Ok(product)
            }
        }
    }

    pub async fn delete_product(&mut self, product_id: i64) -> AppResult<()> {
        match self.services.as_ref() {
            None => self.store.delete_product(product_id),
            Some(services) => {
                services.inventory.delete_product(product_id).await?;
                // tolerate a product we never had locally
                let _ = self.store.delete_product(product_id);
                Ok(())
            }
        }
    }

    // ==================== User administration (networked only) ====================

    pub async fn users(&self) -> AppResult<Vec<ManagedUser>> {
        Ok(self.services()?.auth.all_users().await?)
    }

    pub async fn update_user(&self, update: &UserUpdate) -> AppResult<()> {
        Ok(self.services()?.auth.update_user(update).await?)
    }

    pub async fn delete_user(&self, user_id: i64) -> AppResult<()> {
        Ok(self.services()?.auth.delete_user(user_id).await?)
    }

    /// User role breakdown, cached client-side for five minutes
    pub async fn user_analytics(&self) -> AppResult<UserAnalytics> {
        Ok(self.services()?.auth.analytics().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStorage;
    use rust_decimal::Decimal;

    fn mock_dashboard() -> Dashboard {
        Dashboard::mock(SessionStore::init(MemoryStorage::new()).unwrap())
    }

    #[tokio::test]
    async fn test_mock_mode_refuses_user_administration() {
        let dashboard = mock_dashboard();
        let err = dashboard.users().await.unwrap_err();
        assert_eq!(err.code, shared::error::ErrorCode::ConfigError);
    }

    #[tokio::test]
    async fn test_mock_refresh_is_a_no_op() {
        let mut dashboard = mock_dashboard();
        let before = dashboard.products();
        dashboard.refresh().await.unwrap();
        assert_eq!(dashboard.products(), before);
    }

    #[test]
    fn test_overview_reflects_seed_data() {
        let dashboard = mock_dashboard();
        let overview = dashboard.overview();
        assert_eq!(overview.inventory.total_products, 6);
        assert_eq!(overview.sales.total_revenue, Decimal::new(78992, 2));
    }

    #[test]
    fn test_unauthenticated_dashboard_offers_no_sections() {
        let dashboard = mock_dashboard();
        assert!(dashboard.sections().is_empty());
        assert_eq!(
            dashboard.check_navigation(Section::Sales),
            NavDecision::RedirectToLogin
        );
    }

    #[tokio::test]
    async fn test_mock_sell_updates_overview() {
        let mut dashboard = mock_dashboard();
        let before = dashboard.overview();
        let sale = dashboard.sell(Some(1), 2).await.unwrap();
        let after = dashboard.overview();
        assert_eq!(after.sales.total_units, before.sales.total_units + 2);
        assert_eq!(
            after.sales.total_revenue,
            before.sales.total_revenue + sale.total
        );
    }
}
