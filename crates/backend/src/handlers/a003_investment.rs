use axum::extract::State;
use axum::response::Redirect;
use axum::{Form, Json};
use contracts::domain::a003_investment::aggregate::{Investment, InvestmentDto};

use crate::domain::a003_investment;
use crate::shared::error::ShopError;
use crate::shared::state::AppState;

/// POST /add_investment
pub async fn add_investment(
    State(state): State<AppState>,
    Form(dto): Form<InvestmentDto>,
) -> Result<Redirect, ShopError> {
    a003_investment::service::create(&state.db, dto).await?;
    Ok(Redirect::to("/"))
}

/// GET /api/investments
pub async fn list_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<Investment>>, ShopError> {
    let items = a003_investment::service::list_all(&state.db).await?;
    Ok(Json(items))
}
