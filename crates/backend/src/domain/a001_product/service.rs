use super::repository;
use crate::shared::error::ShopError;
use contracts::domain::a001_product::aggregate::{Product, ProductDto};
use sea_orm::DatabaseConnection;

/// Добавление нового товара
pub async fn create(db: &DatabaseConnection, dto: ProductDto) -> Result<i32, ShopError> {
    dto.validate()?;
    let id = repository::insert(db, &dto).await?;
    tracing::info!(
        "Product {} created: {} ({}), qty {}",
        id,
        dto.name,
        dto.company,
        dto.quantity
    );
    Ok(id)
}

/// Получение товара по ID
pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Product>, ShopError> {
    Ok(repository::get_by_id(db, id).await?)
}

/// Получение списка всех товаров
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Product>, ShopError> {
    Ok(repository::list_all(db).await?)
}
