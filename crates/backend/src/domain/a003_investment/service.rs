use super::repository;
use crate::domain::a001_product;
use crate::shared::error::ShopError;
use contracts::domain::a003_investment::aggregate::{Investment, InvestmentDto};
use sea_orm::DatabaseConnection;

/// Добавление вложения в товар
pub async fn create(db: &DatabaseConnection, dto: InvestmentDto) -> Result<i32, ShopError> {
    dto.validate()?;

    let product = a001_product::repository::get_by_id(db, dto.product_id)
        .await?
        .ok_or(ShopError::ProductNotFound(dto.product_id))?;

    let id = repository::insert(db, &product, &dto).await?;
    tracing::info!(
        "Investment {}: {:.2} into {} at {}",
        id,
        dto.amount,
        product.name,
        dto.shop_name
    );
    Ok(id)
}

/// Получение списка всех вложений
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Investment>, ShopError> {
    Ok(repository::list_all(db).await?)
}
