//! 资源申请
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub resource_id: Uuid,
    pub quantity: i32,
    /// 0 pending, 1 approved, 2 rejected, 3 fulfilled, 4 cancelled
    pub status: i32,
    /// 0 low, 1 medium, 2 high
    pub urgency: i32,
    pub city: Option<String>,
    pub approved_by: Option<Uuid>,
    pub estimated_delivery_date: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
