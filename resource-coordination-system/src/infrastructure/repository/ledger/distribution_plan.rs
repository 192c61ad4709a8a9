use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use database_model::system::prelude::*;
use domain_ledger::{model::entity::DistributionPlan, repository::DistributionPlanRepo};
use sea_orm::{prelude::*, ActiveModelTrait, QueryOrder};

use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl ReadOnlyRepository<DistributionPlan> for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<DistributionPlan>> {
        DistributionPlanEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(DistributionPlan::try_from)
            .transpose()
    }

    async fn get_all(&self) -> anyhow::Result<Vec<DistributionPlan>> {
        DistributionPlanEntity::find()
            .order_by_desc(DistributionPlanColumn::CreatedAt)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(DistributionPlan::try_from)
            .collect()
    }
}

#[async_trait::async_trait]
impl MutableRepository<DistributionPlan> for OrmRepo {
    async fn insert(&self, entity: &DistributionPlan) -> anyhow::Result<Uuid> {
        let active_model =
            DistributionPlanActiveModel::from(DistributionPlanModel::from(entity.clone()))
                .reset_all();
        self.push(self.statement(DistributionPlanEntity::insert(active_model))).await;
        Ok(entity.id)
    }

    async fn update(&self, entity: &DistributionPlan) -> anyhow::Result<()> {
        let mut active_model: DistributionPlanActiveModel =
            DistributionPlanModel::from(entity.clone()).into();
        active_model.status.reset();
        self.push(self.statement(DistributionPlanEntity::update(active_model))).await;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<DistributionPlan> for OrmRepo {}

impl DistributionPlanRepo for OrmRepo {}
