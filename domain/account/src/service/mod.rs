use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    exception::AccountResult,
    model::{
        entity::User,
        vo::{Credentials, ProfileUpdate, Registration, Session},
    },
};

#[async_trait]
pub trait AccountService: Send + Sync {
    /// Creates the account and logs it in.
    async fn register(&self, registration: Registration) -> AccountResult<Session>;
    async fn login(&self, credentials: Credentials) -> AccountResult<Session>;
    async fn logout(&self, token: &str) -> AccountResult<()>;
    /// The acting user.
    async fn current_user(&self) -> AccountResult<User>;
    async fn update_profile(&self, update: ProfileUpdate) -> AccountResult<User>;
    async fn list_users(&self) -> AccountResult<Vec<User>>;
    async fn get_user(&self, id: Uuid) -> AccountResult<User>;
}
