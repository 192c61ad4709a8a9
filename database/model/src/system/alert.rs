//! 短缺、疫情等广播告警
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "alerts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// 0 shortage, 1 epidemic, 2 info, 3 maintenance, 4 urgent
    pub r#type: i32,
    /// 0 low, 1 medium, 2 high, 3 critical
    pub severity: i32,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub city: Option<String>,
    pub resource_id: Option<Uuid>,
    pub active: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub resolved_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
