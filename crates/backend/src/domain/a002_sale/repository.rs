use contracts::domain::a002_sale::aggregate::Sale;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_sale")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub company: String,
    pub quantity_sold: i32,
    pub profit: f64,
    pub date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Sale {
    fn from(m: Model) -> Self {
        Sale {
            id: m.id,
            product_id: m.product_id,
            product_name: m.product_name,
            company: m.company,
            quantity_sold: m.quantity_sold,
            profit: m.profit,
            date: m.date,
        }
    }
}

/// Запись продажи до вставки (id ещё не назначен)
#[derive(Debug, Clone)]
pub struct NewSale {
    pub product_id: i32,
    pub product_name: String,
    pub company: String,
    pub quantity_sold: i32,
    pub profit: f64,
    pub date: String,
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Sale>, DbErr> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Продажи за период [date_from, date_to] включительно
pub async fn list_by_period<C: ConnectionTrait>(
    db: &C,
    date_from: &str,
    date_to: &str,
) -> Result<Vec<Sale>, DbErr> {
    let items = Entity::find()
        .filter(Column::Date.gte(date_from))
        .filter(Column::Date.lte(date_to))
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn insert<C: ConnectionTrait>(db: &C, sale: NewSale) -> Result<i32, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        product_id: Set(sale.product_id),
        product_name: Set(sale.product_name),
        company: Set(sale.company),
        quantity_sold: Set(sale.quantity_sold),
        profit: Set(sale.profit),
        date: Set(sale.date),
    };
    let model = active.insert(db).await?;
    Ok(model.id)
}
