//! 库存变更流水，只追加
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stock_history")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub resource_id: Uuid,
    pub city: String,
    pub previous_quantity: Option<i32>,
    pub new_quantity: i32,
    /// 0 restock, 1 request_fulfilled, 2 manual_adjustment, 3 consumption
    pub change_reason: i32,
    pub updated_by: Option<Uuid>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
