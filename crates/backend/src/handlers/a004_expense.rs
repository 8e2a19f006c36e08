use axum::extract::State;
use axum::response::Redirect;
use axum::{Form, Json};
use contracts::domain::a004_expense::aggregate::{Expense, ExpenseDto};

use crate::domain::a004_expense;
use crate::shared::error::ShopError;
use crate::shared::state::AppState;

/// POST /add_expense
pub async fn add_expense(
    State(state): State<AppState>,
    Form(dto): Form<ExpenseDto>,
) -> Result<Redirect, ShopError> {
    a004_expense::service::create(&state.db, dto).await?;
    Ok(Redirect::to("/"))
}

/// GET /api/expenses
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Expense>>, ShopError> {
    let items = a004_expense::service::list_all(&state.db).await?;
    Ok(Json(items))
}
