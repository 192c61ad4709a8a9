use architecture::repository::DBRepository;

use crate::model::entity::User;

#[async_trait::async_trait]
pub trait UserRepo: DBRepository<User> + Send + Sync {
    async fn find_by_email(&self, email: String) -> anyhow::Result<Option<User>>;
    async fn exists_by_email_or_username(
        &self,
        email: String,
        username: String,
    ) -> anyhow::Result<bool>;
}
