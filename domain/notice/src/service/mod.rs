use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    exception::NoticeResult,
    model::{
        entity::{Alert, AuditLog, Notification},
        vo::{AuditEntry, NewAlert},
    },
};

#[async_trait]
pub trait AlertService: Send + Sync {
    async fn create(&self, alert: NewAlert) -> NoticeResult<Alert>;
    /// Newest first, only active alerts unless `include_inactive`.
    async fn list(&self, include_inactive: bool) -> NoticeResult<Vec<Alert>>;
    /// Returns the alert before and after the change.
    async fn set_active(&self, id: Uuid, active: bool) -> NoticeResult<(Alert, Alert)>;
}

/// Notifications of the acting user.
#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn list(&self, unread_only: bool) -> NoticeResult<Vec<Notification>>;
    async fn mark_read(&self, id: Uuid, read: bool) -> NoticeResult<Notification>;
}

#[async_trait]
pub trait AuditService: Send + Sync {
    /// Appends an entry attributed to the acting user and client address.
    async fn record(&self, entry: AuditEntry) -> NoticeResult<AuditLog>;
    async fn list(&self, entity: Option<String>, days: Option<i64>) -> NoticeResult<Vec<AuditLog>>;
}
