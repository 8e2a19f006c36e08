use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a003_investment::aggregate::{Investment, InvestmentDto};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a003_investment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub company: String,
    pub amount: f64,
    pub shop_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Investment {
    fn from(m: Model) -> Self {
        Investment {
            id: m.id,
            product_id: m.product_id,
            product_name: m.product_name,
            company: m.company,
            amount: m.amount,
            shop_name: m.shop_name,
        }
    }
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Investment>, DbErr> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Вставка вложения; название и компания берутся из товара
pub async fn insert<C: ConnectionTrait>(
    db: &C,
    product: &Product,
    dto: &InvestmentDto,
) -> Result<i32, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        product_id: Set(product.id),
        product_name: Set(product.name.clone()),
        company: Set(product.company.clone()),
        amount: Set(dto.amount),
        shop_name: Set(dto.shop_name.trim().to_string()),
    };
    let model = active.insert(db).await?;
    Ok(model.id)
}
