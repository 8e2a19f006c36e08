use super::repository;
use crate::shared::error::ShopError;
use contracts::domain::a004_expense::aggregate::{Expense, ExpenseDto};
use sea_orm::DatabaseConnection;

/// Добавление расхода
pub async fn create(db: &DatabaseConnection, dto: ExpenseDto) -> Result<i32, ShopError> {
    dto.validate()?;
    let id = repository::insert(db, &dto).await?;
    tracing::info!(
        "Expense {}: {} {:.2} on {}",
        id,
        dto.description,
        dto.amount,
        dto.date
    );
    Ok(id)
}

/// Получение списка всех расходов
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Expense>, ShopError> {
    Ok(repository::list_all(db).await?)
}
