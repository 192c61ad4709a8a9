use std::sync::Arc;

use architecture::repository::{MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use domain_notice::{
    exception::{NoticeException, NoticeResult},
    model::entity::Notification,
    repository::NotificationRepo,
    service::NotificationService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct NotificationServiceImpl {
    notification_repo: Arc<dyn NotificationRepo>,
    #[builder(default)]
    user_id: Option<Uuid>,
}

#[async_trait]
impl NotificationService for NotificationServiceImpl {
    async fn list(&self, unread_only: bool) -> NoticeResult<Vec<Notification>> {
        let user_id = self.user_id.ok_or(NoticeException::Unauthenticated)?;
        Ok(self
            .notification_repo
            .get_by_user(user_id, unread_only)
            .await?)
    }

    async fn mark_read(&self, id: Uuid, read: bool) -> NoticeResult<Notification> {
        let user_id = self.user_id.ok_or(NoticeException::Unauthenticated)?;
        // 他人的通知按不存在处理
        let mut notification = self
            .notification_repo
            .find_by_id(id)
            .await?
            .filter(|n| n.user_id == user_id)
            .ok_or(NoticeException::NoSuchNotification { id })?;
        notification.read = read;
        self.notification_repo.update(&notification).await?;
        self.notification_repo.save_changed().await?;
        Ok(notification)
    }
}
