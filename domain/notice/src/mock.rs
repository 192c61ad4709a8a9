use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::{
    model::{
        entity::{Alert, AuditLog, Notification},
        vo::AuditFilter,
    },
    repository::{AlertRepo, AuditLogRepo, NotificationRepo},
};

mock! {
    pub AlertRepo {}
    #[async_trait]
    impl AlertRepo for AlertRepo {
        async fn get_all_filtered(&self, active_only: bool) -> anyhow::Result<Vec<Alert>>;
    }
    impl DBRepository<Alert> for AlertRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Alert> for AlertRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Alert>>;
    }
    #[async_trait]
    impl MutableRepository<Alert> for AlertRepo {
        async fn insert(&self, entity: &Alert) -> anyhow::Result<Uuid>;
        async fn update(&self, entity: &Alert) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}

mock! {
    pub NotificationRepo {}
    #[async_trait]
    impl NotificationRepo for NotificationRepo {
        async fn get_by_user(&self, user_id: Uuid, unread_only: bool)
            -> anyhow::Result<Vec<Notification>>;
    }
    impl DBRepository<Notification> for NotificationRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Notification> for NotificationRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Notification>>;
    }
    #[async_trait]
    impl MutableRepository<Notification> for NotificationRepo {
        async fn insert(&self, entity: &Notification) -> anyhow::Result<Uuid>;
        async fn update(&self, entity: &Notification) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}

mock! {
    pub AuditLogRepo {}
    #[async_trait]
    impl AuditLogRepo for AuditLogRepo {
        async fn get_filtered(&self, filter: AuditFilter) -> anyhow::Result<Vec<AuditLog>>;
    }
    impl DBRepository<AuditLog> for AuditLogRepo {}
    impl ReadOnlyRepository<AuditLog> for AuditLogRepo {}
    #[async_trait]
    impl MutableRepository<AuditLog> for AuditLogRepo {
        async fn insert(&self, entity: &AuditLog) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}
