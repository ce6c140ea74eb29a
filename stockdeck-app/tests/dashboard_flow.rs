//! End-to-end flows over the mock dashboard
//!
//! Exercises the pieces together the way the UI shell drives them: restore
//! a session, gate navigation by role, browse the overview, record sales
//! and watch the derived numbers move.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use stockdeck_app::{
    AuthState, ChartPeriod, Dashboard, ErrorCode, FileStorage, MemoryStorage, NavDecision,
    ProductCreate, ProductUpdate, Role, Section, SessionStore, SessionUser, StockStatus,
};

fn logged_in_dashboard(role: Role) -> Dashboard {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let session = SessionStore::init(MemoryStorage::new()).unwrap();
    session
        .set(SessionUser::new("Ada", "ada@example.com", role, "tok-123"))
        .unwrap();
    Dashboard::mock(session)
}

#[test]
fn admin_sees_every_section_sales_does_not() {
    let admin = logged_in_dashboard(Role::Admin);
    assert_eq!(
        admin.sections(),
        &[Section::UserAdmin, Section::Inventory, Section::Sales]
    );
    for section in [Section::UserAdmin, Section::Inventory, Section::Sales] {
        assert_eq!(admin.check_navigation(section), NavDecision::Allow);
    }

    let sales = logged_in_dashboard(Role::Sales);
    assert_eq!(sales.sections(), &[Section::Sales]);
    assert_eq!(
        sales.check_navigation(Section::Inventory),
        NavDecision::Denied
    );
}

#[tokio::test]
async fn selling_moves_stock_and_stats_together() {
    let mut dashboard = logged_in_dashboard(Role::Sales);
    let before = dashboard.overview();

    // Wireless Mouse: 12 in stock at $39.99
    let sale = dashboard.sell(Some(5), 3).await.unwrap();
    assert_eq!(sale.total, Decimal::new(11997, 2));

    let product = dashboard
        .products()
        .into_iter()
        .find(|p| p.id == 5)
        .unwrap();
    assert_eq!(product.stock, 9);

    let after = dashboard.overview();
    assert_eq!(after.sales.total_units, before.sales.total_units + 3);
    assert_eq!(
        after.sales.total_revenue,
        before.sales.total_revenue + sale.total
    );
    // newest first
    assert_eq!(dashboard.sales()[0], sale);
}

#[tokio::test]
async fn failed_sale_changes_nothing() {
    let mut dashboard = logged_in_dashboard(Role::Sales);
    let products = dashboard.products();
    let sales = dashboard.sales();

    let err = dashboard.sell(None, 2).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::NoProductSelected);

    let err = dashboard.sell(Some(999), 2).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ProductNotFound);

    // Smart Watch has 8 in stock
    let err = dashboard.sell(Some(2), 9).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InsufficientStock);
    assert_eq!(err.details.unwrap().get("available").unwrap(), 8);

    assert_eq!(dashboard.products(), products);
    assert_eq!(dashboard.sales(), sales);
}

#[tokio::test]
async fn selling_the_last_unit_flips_the_status() {
    let mut dashboard = logged_in_dashboard(Role::Sales);
    // USB-C Hub: 7 in stock, threshold 8, already low
    let hub = dashboard.products().into_iter().find(|p| p.id == 6).unwrap();
    assert_eq!(StockStatus::of(&hub), StockStatus::LowStock);

    dashboard.sell(Some(6), 7).await.unwrap();
    let hub = dashboard.products().into_iter().find(|p| p.id == 6).unwrap();
    assert_eq!(StockStatus::of(&hub), StockStatus::OutOfStock);

    let overview = dashboard.overview();
    assert_eq!(overview.inventory.out_of_stock, 2);
}

#[tokio::test]
async fn product_lifecycle_in_mock_mode() {
    let mut dashboard = logged_in_dashboard(Role::Inventory);

    let created = dashboard
        .add_product(ProductCreate {
            name: "Webcam".to_string(),
            price: Decimal::new(8999, 2),
            stock: 4,
            threshold: 6,
            image: None,
        })
        .await
        .unwrap();
    assert_eq!(dashboard.overview().inventory.total_products, 7);

    let updated = dashboard
        .update_product(created.id, ProductUpdate {
            stock: Some(20),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.stock, 20);
    assert_eq!(StockStatus::of(&updated), StockStatus::InStock);

    dashboard.delete_product(created.id).await.unwrap();
    assert_eq!(dashboard.overview().inventory.total_products, 6);
}

#[test]
fn chart_buckets_track_the_seeded_history() {
    let dashboard = logged_in_dashboard(Role::Sales);
    let now: DateTime<Utc> = "2025-05-12T11:00:00Z".parse().unwrap();

    let day = dashboard.chart(ChartPeriod::Day, now);
    assert_eq!(day.len(), 24);
    // the 10:30 sale of two headphones lands an hour before "now"
    assert_eq!(day[22].label, "10:00");
    assert_eq!(day[22].amount, Decimal::new(25998, 2));

    let week = dashboard.chart(ChartPeriod::Week, now);
    assert_eq!(week.len(), 7);
    let week_total: Decimal = week.iter().map(|b| b.amount).sum();
    // all five seeded sales fall inside the trailing week
    assert_eq!(week_total, Decimal::new(78992, 2));

    let month = dashboard.chart(ChartPeriod::Month, now);
    assert_eq!(month.len(), 4);
    let month_total: Decimal = month.iter().map(|b| b.amount).sum();
    assert_eq!(month_total, Decimal::new(78992, 2));
}

#[tokio::test]
async fn todays_sale_lands_in_the_last_bucket_of_every_period() {
    let mut dashboard = logged_in_dashboard(Role::Sales);
    let sale = dashboard.sell(Some(1), 1).await.unwrap();
    // anchor the chart at the sale's own instant so the test cannot race
    // an hour or day boundary
    let now = sale.date;

    for period in [ChartPeriod::Day, ChartPeriod::Week, ChartPeriod::Month] {
        let buckets = dashboard.chart(period, now);
        assert_eq!(buckets.len(), period.bucket_count());
        assert!(
            buckets.last().unwrap().amount >= sale.total,
            "last bucket misses today's sale for {:?}",
            period
        );
    }

    // and a sale 25 hours old is outside the day window
    let stale = now - Duration::hours(25);
    let day = dashboard.chart(ChartPeriod::Day, stale);
    let total: Decimal = day.iter().map(|b| b.amount).sum();
    assert_eq!(total, Decimal::ZERO);
}

#[test]
fn session_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    {
        let session = SessionStore::init(FileStorage::new(&path)).unwrap();
        session
            .set(SessionUser::new("Ada", "ada@example.com", Role::Admin, "tok-9"))
            .unwrap();
    }

    let dashboard = Dashboard::mock(SessionStore::init(FileStorage::new(&path)).unwrap());
    assert_eq!(dashboard.auth_state(), AuthState::Authenticated(Role::Admin));
    assert_eq!(dashboard.session().token().as_deref(), Some("tok-9"));
    assert_eq!(dashboard.sections().len(), 3);
    assert_eq!(dashboard.check_dashboard_landing(), NavDecision::Allow);
}

#[test]
fn logout_is_the_only_way_back_to_unauthenticated() {
    let mut dashboard = logged_in_dashboard(Role::Admin);
    assert_eq!(dashboard.auth_state(), AuthState::Authenticated(Role::Admin));

    dashboard.logout().unwrap();
    assert_eq!(dashboard.auth_state(), AuthState::Unauthenticated);
    assert!(dashboard.sections().is_empty());
    assert_eq!(
        dashboard.check_navigation(Section::UserAdmin),
        NavDecision::RedirectToLogin
    );
    assert_eq!(
        dashboard.check_dashboard_landing(),
        NavDecision::RedirectToLogin
    );
}
