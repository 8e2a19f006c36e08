use axum::extract::State;
use axum::response::Redirect;
use axum::{Form, Json};
use contracts::domain::a002_sale::aggregate::{Sale, SaleDto};

use crate::domain::a002_sale;
use crate::shared::error::ShopError;
use crate::shared::state::AppState;

/// POST /add_sale
///
/// При нехватке остатка отвечает 400 и текстом ошибки, остаток не меняется.
pub async fn add_sale(
    State(state): State<AppState>,
    Form(dto): Form<SaleDto>,
) -> Result<Redirect, ShopError> {
    a002_sale::service::create(&state.db, dto).await?;
    Ok(Redirect::to("/"))
}

/// GET /api/sales
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Sale>>, ShopError> {
    let items = a002_sale::service::list_all(&state.db).await?;
    Ok(Json(items))
}
