use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use database_model::system::prelude::*;
use domain_notice::{model::entity::Alert, repository::AlertRepo};
use sea_orm::{prelude::*, ActiveModelTrait, QueryOrder};

use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl ReadOnlyRepository<Alert> for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Alert>> {
        AlertEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(Alert::try_from)
            .transpose()
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Alert>> {
        self.get_all_filtered(false).await
    }
}

#[async_trait::async_trait]
impl MutableRepository<Alert> for OrmRepo {
    async fn insert(&self, entity: &Alert) -> anyhow::Result<Uuid> {
        let active_model = AlertActiveModel::from(AlertModel::from(entity.clone())).reset_all();
        self.push(self.statement(AlertEntity::insert(active_model))).await;
        Ok(entity.id)
    }

    async fn update(&self, entity: &Alert) -> anyhow::Result<()> {
        let mut active_model: AlertActiveModel = AlertModel::from(entity.clone()).into();
        active_model.active.reset();
        active_model.resolved_at.reset();
        self.push(self.statement(AlertEntity::update(active_model))).await;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<Alert> for OrmRepo {}

#[async_trait::async_trait]
impl AlertRepo for OrmRepo {
    async fn get_all_filtered(&self, active_only: bool) -> anyhow::Result<Vec<Alert>> {
        let mut select = AlertEntity::find();
        if active_only {
            select = select.filter(AlertColumn::Active.eq(true));
        }
        select
            .order_by_desc(AlertColumn::CreatedAt)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(Alert::try_from)
            .collect()
    }
}
