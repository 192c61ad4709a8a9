//! 通知
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    /// 0 request_update, 1 alert, 2 stock_warning, 3 approval_needed, 4 info
    pub r#type: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub read: bool,
    pub action_url: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
