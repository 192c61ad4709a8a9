use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use database_model::system::prelude::*;
use domain_ledger::{
    model::entity::{Resource, ResourceType},
    repository::ResourceRepo,
};
use sea_orm::{prelude::*, ActiveModelTrait, QueryOrder};

use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl ReadOnlyRepository<Resource> for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Resource>> {
        ResourceEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(Resource::try_from)
            .transpose()
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Resource>> {
        self.get_all_by_type(None).await
    }
}

#[async_trait::async_trait]
impl MutableRepository<Resource> for OrmRepo {
    async fn insert(&self, entity: &Resource) -> anyhow::Result<Uuid> {
        let active_model = ResourceActiveModel::from(ResourceModel::from(entity.clone())).reset_all();
        self.push(self.statement(ResourceEntity::insert(active_model))).await;
        Ok(entity.id)
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<Resource> for OrmRepo {}

#[async_trait::async_trait]
impl ResourceRepo for OrmRepo {
    async fn get_all_by_type(
        &self,
        resource_type: Option<ResourceType>,
    ) -> anyhow::Result<Vec<Resource>> {
        let mut select = ResourceEntity::find();
        if let Some(resource_type) = resource_type {
            select = select.filter(ResourceColumn::Type.eq(resource_type as i32));
        }
        select
            .order_by_asc(ResourceColumn::Name)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(Resource::try_from)
            .collect()
    }
}
