use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use database_model::system::prelude::*;
use domain_notice::{
    model::{entity::AuditLog, vo::AuditFilter},
    repository::AuditLogRepo,
};
use sea_orm::{prelude::*, ActiveModelTrait, QueryOrder};

use crate::infrastructure::database::OrmRepo;

impl ReadOnlyRepository<AuditLog> for OrmRepo {}

#[async_trait::async_trait]
impl MutableRepository<AuditLog> for OrmRepo {
    async fn insert(&self, entity: &AuditLog) -> anyhow::Result<Uuid> {
        let active_model = AuditLogActiveModel::from(AuditLogModel::from(entity.clone())).reset_all();
        self.push(self.statement(AuditLogEntity::insert(active_model))).await;
        Ok(entity.id)
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<AuditLog> for OrmRepo {}

#[async_trait::async_trait]
impl AuditLogRepo for OrmRepo {
    async fn get_filtered(&self, filter: AuditFilter) -> anyhow::Result<Vec<AuditLog>> {
        let mut select = AuditLogEntity::find();
        if let Some(entity) = filter.entity {
            select = select.filter(AuditLogColumn::Entity.eq(entity));
        }
        if let Some(since) = filter.since {
            select = select.filter(AuditLogColumn::CreatedAt.gte(since));
        }
        select
            .order_by_desc(AuditLogColumn::CreatedAt)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(AuditLog::try_from)
            .collect()
    }
}
