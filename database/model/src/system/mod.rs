mod alert;
mod audit_log;
mod distribution_plan;
mod notification;
mod request;
mod resource;
mod stock;
mod stock_history;
mod user;

pub mod prelude {
    pub use super::{
        alert::{
            ActiveModel as AlertActiveModel, Column as AlertColumn, Entity as AlertEntity,
            Model as AlertModel, PrimaryKey as AlertPrimaryKey, Relation as AlertRelation,
        },
        audit_log::{
            ActiveModel as AuditLogActiveModel, Column as AuditLogColumn, Entity as AuditLogEntity,
            Model as AuditLogModel, PrimaryKey as AuditLogPrimaryKey, Relation as AuditLogRelation,
        },
        distribution_plan::{
            ActiveModel as DistributionPlanActiveModel, Column as DistributionPlanColumn, Entity as DistributionPlanEntity,
            Model as DistributionPlanModel, PrimaryKey as DistributionPlanPrimaryKey, Relation as DistributionPlanRelation,
        },
        notification::{
            ActiveModel as NotificationActiveModel, Column as NotificationColumn, Entity as NotificationEntity,
            Model as NotificationModel, PrimaryKey as NotificationPrimaryKey, Relation as NotificationRelation,
        },
        request::{
            ActiveModel as RequestActiveModel, Column as RequestColumn, Entity as RequestEntity,
            Model as RequestModel, PrimaryKey as RequestPrimaryKey, Relation as RequestRelation,
        },
        resource::{
            ActiveModel as ResourceActiveModel, Column as ResourceColumn, Entity as ResourceEntity,
            Model as ResourceModel, PrimaryKey as ResourcePrimaryKey, Relation as ResourceRelation,
        },
        stock::{
            ActiveModel as StockActiveModel, Column as StockColumn, Entity as StockEntity,
            Model as StockModel, PrimaryKey as StockPrimaryKey, Relation as StockRelation,
        },
        stock_history::{
            ActiveModel as StockHistoryActiveModel, Column as StockHistoryColumn, Entity as StockHistoryEntity,
            Model as StockHistoryModel, PrimaryKey as StockHistoryPrimaryKey, Relation as StockHistoryRelation,
        },
        user::{
            ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
            Model as UserModel, PrimaryKey as UserPrimaryKey, Relation as UserRelation,
        },
    };
}
