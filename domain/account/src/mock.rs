use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::{
    model::entity::User,
    repository::{SessionStore, UserRepo},
};

mock! {
    pub UserRepo {}
    #[async_trait]
    impl UserRepo for UserRepo {
        async fn find_by_email(&self, email: String) -> anyhow::Result<Option<User>>;
        async fn exists_by_email_or_username(
            &self,
            email: String,
            username: String,
        ) -> anyhow::Result<bool>;
    }
    impl DBRepository<User> for UserRepo {}
    #[async_trait]
    impl ReadOnlyRepository<User> for UserRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;
        async fn get_all(&self) -> anyhow::Result<Vec<User>>;
    }
    #[async_trait]
    impl MutableRepository<User> for UserRepo {
        async fn insert(&self, entity: &User) -> anyhow::Result<Uuid>;
        async fn update(&self, entity: &User) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}

mock! {
    pub SessionStore {}
    #[async_trait]
    impl SessionStore for SessionStore {
        async fn issue(&self, user_id: Uuid) -> anyhow::Result<String>;
        async fn resolve(&self, token: &str) -> anyhow::Result<Option<Uuid>>;
        async fn revoke(&self, token: &str) -> anyhow::Result<()>;
    }
}
