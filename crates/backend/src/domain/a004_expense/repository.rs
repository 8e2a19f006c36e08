use contracts::domain::a004_expense::aggregate::{Expense, ExpenseDto};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a004_expense")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "desc")]
    pub description: String,
    pub amount: f64,
    pub date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Expense {
    fn from(m: Model) -> Self {
        Expense {
            id: m.id,
            description: m.description,
            amount: m.amount,
            date: m.date,
        }
    }
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Expense>, DbErr> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn insert<C: ConnectionTrait>(db: &C, dto: &ExpenseDto) -> Result<i32, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        description: Set(dto.description.trim().to_string()),
        amount: Set(dto.amount),
        date: Set(dto.date.trim().to_string()),
    };
    let model = active.insert(db).await?;
    Ok(model.id)
}
