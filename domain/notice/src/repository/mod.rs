use architecture::repository::DBRepository;
use uuid::Uuid;

use crate::model::{
    entity::{Alert, AuditLog, Notification},
    vo::AuditFilter,
};

#[async_trait::async_trait]
pub trait AlertRepo: DBRepository<Alert> + Send + Sync {
    /// Newest first. Inactive alerts are skipped when `active_only` is set.
    async fn get_all_filtered(&self, active_only: bool) -> anyhow::Result<Vec<Alert>>;
}

#[async_trait::async_trait]
pub trait NotificationRepo: DBRepository<Notification> + Send + Sync {
    /// A user's notifications, newest first.
    async fn get_by_user(&self, user_id: Uuid, unread_only: bool)
        -> anyhow::Result<Vec<Notification>>;
}

#[async_trait::async_trait]
pub trait AuditLogRepo: DBRepository<AuditLog> + Send + Sync {
    /// Newest first.
    async fn get_filtered(&self, filter: AuditFilter) -> anyhow::Result<Vec<AuditLog>>;
}
