use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use contracts::domain::a001_product::aggregate::{Product, ProductDto};

use crate::domain::a001_product;
use crate::shared::error::ShopError;
use crate::shared::state::AppState;

/// POST /add_product
pub async fn add_product(
    State(state): State<AppState>,
    Form(dto): Form<ProductDto>,
) -> Result<Redirect, ShopError> {
    a001_product::service::create(&state.db, dto).await?;
    Ok(Redirect::to("/"))
}

/// GET /api/products
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ShopError> {
    let items = a001_product::service::list_all(&state.db).await?;
    Ok(Json(items))
}

/// GET /api/products/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ShopError> {
    match a001_product::service::get_by_id(&state.db, id).await? {
        Some(product) => Ok(Json(product).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}
