use askama::Template;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use contracts::dashboards::d400_shop_summary::ShopSummaryResponse;
use contracts::domain::a002_sale::aggregate::DATE_FORMAT;

use crate::dashboards::d400_shop_summary::service;
use crate::shared::error::ShopError;
use crate::shared::state::AppState;
use crate::templates::DashboardTemplate;

/// GET /
pub async fn dashboard_page(State(state): State<AppState>) -> Result<Html<String>, ShopError> {
    let today = chrono::Local::now().date_naive();
    let dashboard = service::get_dashboard(&state.db, today).await?;
    let page = DashboardTemplate::new(dashboard, today.format(DATE_FORMAT).to_string());
    Ok(Html(page.render()?))
}

/// GET /api/d400/shop_summary
pub async fn get_shop_summary(
    State(state): State<AppState>,
) -> Result<Json<ShopSummaryResponse>, ShopError> {
    let today = chrono::Local::now().date_naive();
    let summary = service::get_shop_summary(&state.db, today).await?;
    Ok(Json(summary))
}
