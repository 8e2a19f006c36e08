use contracts::domain::a001_product::aggregate::{Product, ProductDto};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub company: String,
    pub cost_price: f64,
    pub sell_price: f64,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            id: m.id,
            name: m.name,
            company: m.company,
            cost_price: m.cost_price,
            sell_price: m.sell_price,
            quantity: m.quantity,
        }
    }
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Product>, DbErr> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Product>, DbErr> {
    let result = Entity::find_by_id(id).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn insert<C: ConnectionTrait>(db: &C, dto: &ProductDto) -> Result<i32, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(dto.name.trim().to_string()),
        company: Set(dto.company.trim().to_string()),
        cost_price: Set(dto.cost_price),
        sell_price: Set(dto.sell_price),
        quantity: Set(dto.quantity),
    };
    let model = active.insert(db).await?;
    Ok(model.id)
}

/// Списать `quantity` единиц, только если остатка хватает
///
/// Проверка и списание выполняются одним UPDATE. Возвращает `false`, если
/// товара нет или остатка не хватило.
pub async fn decrement_stock<C: ConnectionTrait>(
    db: &C,
    id: i32,
    quantity: i32,
) -> Result<bool, DbErr> {
    let result = Entity::update_many()
        .col_expr(Column::Quantity, Expr::col(Column::Quantity).sub(quantity))
        .filter(Column::Id.eq(id))
        .filter(Column::Quantity.gte(quantity))
        .exec(db)
        .await?;
    Ok(result.rows_affected == 1)
}
