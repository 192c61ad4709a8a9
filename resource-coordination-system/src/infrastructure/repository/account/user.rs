use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use database_model::system::prelude::*;
use domain_account::{model::entity::User, repository::UserRepo};
use sea_orm::{prelude::*, ActiveModelTrait, Condition, PaginatorTrait, QueryOrder};

use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl ReadOnlyRepository<User> for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        UserEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn get_all(&self) -> anyhow::Result<Vec<User>> {
        UserEntity::find()
            .order_by_asc(UserColumn::CreatedAt)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(User::try_from)
            .collect()
    }
}

#[async_trait::async_trait]
impl MutableRepository<User> for OrmRepo {
    async fn insert(&self, entity: &User) -> anyhow::Result<Uuid> {
        let active_model = UserActiveModel::from(UserModel::from(entity.clone())).reset_all();
        self.push(self.statement(UserEntity::insert(active_model))).await;
        Ok(entity.id)
    }

    async fn update(&self, entity: &User) -> anyhow::Result<()> {
        let mut active_model: UserActiveModel = UserModel::from(entity.clone()).into();
        active_model.city.reset();
        active_model.postal_code.reset();
        active_model.first_name.reset();
        active_model.last_name.reset();
        active_model.profile_image_url.reset();
        active_model.department.reset();
        active_model.phone.reset();
        active_model.updated_at.reset();
        self.push(self.statement(UserEntity::update(active_model))).await;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<User> for OrmRepo {}

#[async_trait::async_trait]
impl UserRepo for OrmRepo {
    async fn find_by_email(&self, email: String) -> anyhow::Result<Option<User>> {
        UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(self.db.get_connection())
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn exists_by_email_or_username(
        &self,
        email: String,
        username: String,
    ) -> anyhow::Result<bool> {
        let count = UserEntity::find()
            .filter(
                Condition::any()
                    .add(UserColumn::Email.eq(email))
                    .add(UserColumn::Username.eq(username)),
            )
            .count(self.db.get_connection())
            .await?;
        Ok(count > 0)
    }
}
