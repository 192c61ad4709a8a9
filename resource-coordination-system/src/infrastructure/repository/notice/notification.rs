use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use database_model::system::prelude::*;
use domain_notice::{model::entity::Notification, repository::NotificationRepo};
use sea_orm::{prelude::*, ActiveModelTrait, QueryOrder};

use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl ReadOnlyRepository<Notification> for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Notification>> {
        NotificationEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(Notification::try_from)
            .transpose()
    }
}

#[async_trait::async_trait]
impl MutableRepository<Notification> for OrmRepo {
    async fn insert(&self, entity: &Notification) -> anyhow::Result<Uuid> {
        let active_model =
            NotificationActiveModel::from(NotificationModel::from(entity.clone())).reset_all();
        self.push(self.statement(NotificationEntity::insert(active_model))).await;
        Ok(entity.id)
    }

    async fn update(&self, entity: &Notification) -> anyhow::Result<()> {
        let mut active_model: NotificationActiveModel =
            NotificationModel::from(entity.clone()).into();
        active_model.read.reset();
        self.push(self.statement(NotificationEntity::update(active_model))).await;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<Notification> for OrmRepo {}

#[async_trait::async_trait]
impl NotificationRepo for OrmRepo {
    async fn get_by_user(
        &self,
        user_id: Uuid,
        unread_only: bool,
    ) -> anyhow::Result<Vec<Notification>> {
        let mut select = NotificationEntity::find().filter(NotificationColumn::UserId.eq(user_id));
        if unread_only {
            select = select.filter(NotificationColumn::Read.eq(false));
        }
        select
            .order_by_desc(NotificationColumn::CreatedAt)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(Notification::try_from)
            .collect()
    }
}
