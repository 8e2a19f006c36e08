use super::repository::{self, NewSale};
use crate::domain::a001_product;
use crate::shared::error::ShopError;
use chrono::NaiveDate;
use contracts::domain::a002_sale::aggregate::{Sale, SaleDto, DATE_FORMAT};
use sea_orm::{DatabaseConnection, TransactionTrait};

/// Продажа товара сегодняшним днём (локальное время сервера)
pub async fn create(db: &DatabaseConnection, dto: SaleDto) -> Result<i32, ShopError> {
    let today = chrono::Local::now().date_naive();
    create_on(db, dto, today).await
}

/// Продажа товара заданным днём
///
/// Списание остатка и запись продажи идут в одной транзакции: при нехватке
/// товара ничего не записывается. Транзакция начинается с условного UPDATE,
/// поэтому параллельные продажи одного товара выстраиваются в очередь на
/// блокировке записи SQLite и не уводят остаток в минус.
pub async fn create_on(
    db: &DatabaseConnection,
    dto: SaleDto,
    date: NaiveDate,
) -> Result<i32, ShopError> {
    dto.validate()?;

    let txn = db.begin().await?;

    let decremented =
        a001_product::repository::decrement_stock(&txn, dto.product_id, dto.quantity_sold).await?;

    let product = match a001_product::repository::get_by_id(&txn, dto.product_id).await? {
        Some(product) => product,
        None => {
            txn.rollback().await?;
            return Err(ShopError::ProductNotFound(dto.product_id));
        }
    };

    if !decremented {
        txn.rollback().await?;
        return Err(ShopError::InsufficientStock {
            requested: dto.quantity_sold,
            available: product.quantity,
        });
    }

    let profit = product.profit_for(dto.quantity_sold);
    let id = repository::insert(
        &txn,
        NewSale {
            product_id: product.id,
            product_name: product.name.clone(),
            company: product.company.clone(),
            quantity_sold: dto.quantity_sold,
            profit,
            date: date.format(DATE_FORMAT).to_string(),
        },
    )
    .await?;

    txn.commit().await?;

    tracing::info!(
        "Sale {}: {} x{} (profit {:.2}), stock left {}",
        id,
        product.name,
        dto.quantity_sold,
        profit,
        product.quantity
    );
    Ok(id)
}

/// Получение списка всех продаж
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Sale>, ShopError> {
    Ok(repository::list_all(db).await?)
}

/// Продажи за дни [date_from, date_to] включительно
pub async fn list_by_period(
    db: &DatabaseConnection,
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> Result<Vec<Sale>, ShopError> {
    let date_from = date_from.format(DATE_FORMAT).to_string();
    let date_to = date_to.format(DATE_FORMAT).to_string();
    Ok(repository::list_by_period(db, &date_from, &date_to).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::{connect_in_memory, initialize_database};
    use contracts::domain::a001_product::aggregate::ProductDto;

    async fn seed_product(db: &DatabaseConnection, quantity: i32) -> i32 {
        a001_product::service::create(
            db,
            ProductDto {
                name: "Cooking oil".into(),
                company: "SunCo".into(),
                cost_price: 4.0,
                sell_price: 5.5,
                quantity,
            },
        )
        .await
        .unwrap()
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[tokio::test]
    async fn test_sale_decrements_stock_and_records_profit() {
        let db = connect_in_memory().await.unwrap();
        let product_id = seed_product(&db, 10).await;

        let sale_id = create_on(
            &db,
            SaleDto {
                product_id,
                quantity_sold: 4,
            },
            day("2024-05-17"),
        )
        .await
        .unwrap();

        let product = a001_product::repository::get_by_id(&db, product_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(product.quantity, 6);

        let sales = list_all(&db).await.unwrap();
        assert_eq!(sales.len(), 1);
        let sale = &sales[0];
        assert_eq!(sale.id, sale_id);
        assert_eq!(sale.product_id, product_id);
        assert_eq!(sale.product_name, "Cooking oil");
        assert_eq!(sale.company, "SunCo");
        assert_eq!(sale.quantity_sold, 4);
        assert_eq!(sale.profit, 6.0);
        assert_eq!(sale.date, "2024-05-17");
    }

    #[tokio::test]
    async fn test_selling_more_than_stock_is_rejected() {
        let db = connect_in_memory().await.unwrap();
        let product_id = seed_product(&db, 3).await;

        let err = create_on(
            &db,
            SaleDto {
                product_id,
                quantity_sold: 4,
            },
            day("2024-05-17"),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            ShopError::InsufficientStock {
                requested: 4,
                available: 3
            }
        ));

        let product = a001_product::repository::get_by_id(&db, product_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(product.quantity, 3);
        assert!(list_all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_selling_entire_stock_is_allowed() {
        let db = connect_in_memory().await.unwrap();
        let product_id = seed_product(&db, 2).await;

        create_on(
            &db,
            SaleDto {
                product_id,
                quantity_sold: 2,
            },
            day("2024-05-17"),
        )
        .await
        .unwrap();

        let product = a001_product::repository::get_by_id(&db, product_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(product.quantity, 0);

        // Следующая продажа уже невозможна
        let err = create_on(
            &db,
            SaleDto {
                product_id,
                quantity_sold: 1,
            },
            day("2024-05-18"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ShopError::InsufficientStock { .. }));
    }

    #[tokio::test]
    async fn test_unknown_product_and_invalid_quantity() {
        let db = connect_in_memory().await.unwrap();
        let product_id = seed_product(&db, 5).await;

        let err = create_on(
            &db,
            SaleDto {
                product_id: product_id + 100,
                quantity_sold: 1,
            },
            day("2024-05-17"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ShopError::ProductNotFound(_)));

        let err = create_on(
            &db,
            SaleDto {
                product_id,
                quantity_sold: 0,
            },
            day("2024-05-17"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ShopError::Validation(_)));

        let product = a001_product::repository::get_by_id(&db, product_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(product.quantity, 5);
    }

    #[tokio::test]
    async fn test_list_by_period() {
        let db = connect_in_memory().await.unwrap();
        let product_id = seed_product(&db, 10).await;
        for date in ["2024-05-10", "2024-05-15", "2024-05-20"] {
            create_on(
                &db,
                SaleDto {
                    product_id,
                    quantity_sold: 1,
                },
                day(date),
            )
            .await
            .unwrap();
        }

        let sales = list_by_period(&db, day("2024-05-11"), day("2024-05-20"))
            .await
            .unwrap();
        let dates: Vec<&str> = sales.iter().map(|s| s.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-05-15", "2024-05-20"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_sales_never_oversell() {
        let path = std::env::temp_dir().join(format!(
            "shopbook-concurrent-sales-{}.db",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        let db = initialize_database(&path).await.unwrap();
        let product_id = seed_product(&db, 5).await;

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let db = db.clone();
                tokio::spawn(async move {
                    create(
                        &db,
                        SaleDto {
                            product_id,
                            quantity_sold: 1,
                        },
                    )
                    .await
                })
            })
            .collect();

        let mut sold = 0;
        let mut rejected = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => sold += 1,
                Err(ShopError::InsufficientStock { .. }) => rejected += 1,
                Err(e) => panic!("unexpected sale error: {e}"),
            }
        }
        assert_eq!(sold, 5);
        assert_eq!(rejected, 15);

        let product = a001_product::repository::get_by_id(&db, product_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(product.quantity, 0);
        assert_eq!(list_all(&db).await.unwrap().len(), 5);

        drop(db);
        let _ = std::fs::remove_file(&path);
    }
}
