use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::services::ServeDir;

use crate::shared::state::AppState;
use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // HTML DASHBOARD + FORMS
        // ========================================
        .route("/", get(handlers::d400_shop_summary::dashboard_page))
        .route(
            "/add_product",
            post(handlers::a001_product::add_product),
        )
        .route("/add_sale", post(handlers::a002_sale::add_sale))
        .route(
            "/add_investment",
            post(handlers::a003_investment::add_investment),
        )
        .route("/add_expense", post(handlers::a004_expense::add_expense))
        // ========================================
        // JSON API
        // ========================================
        .route("/api/products", get(handlers::a001_product::list_all))
        .route("/api/products/:id", get(handlers::a001_product::get_by_id))
        .route("/api/sales", get(handlers::a002_sale::list_all))
        .route(
            "/api/investments",
            get(handlers::a003_investment::list_all),
        )
        .route("/api/expenses", get(handlers::a004_expense::list_all))
        // D400 Shop Summary Dashboard
        .route(
            "/api/d400/shop_summary",
            get(handlers::d400_shop_summary::get_shop_summary),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .with_state(state)
}
