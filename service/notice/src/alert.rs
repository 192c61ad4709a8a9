use std::sync::Arc;

use architecture::repository::{MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use chrono::Utc;
use domain_ledger::repository::ResourceRepo;
use domain_notice::{
    exception::{NoticeException, NoticeResult},
    model::{entity::Alert, vo::NewAlert},
    repository::AlertRepo,
    service::AlertService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct AlertServiceImpl {
    alert_repo: Arc<dyn AlertRepo>,
    resource_repo: Arc<dyn ResourceRepo>,
    #[builder(default)]
    user_id: Option<Uuid>,
}

#[async_trait]
impl AlertService for AlertServiceImpl {
    async fn create(&self, alert: NewAlert) -> NoticeResult<Alert> {
        let message = alert.message.trim().to_string();
        if message.is_empty() {
            return Err(NoticeException::EmptyMessage);
        }
        if let Some(resource_id) = alert.resource_id {
            if self.resource_repo.find_by_id(resource_id).await?.is_none() {
                return Err(NoticeException::NoSuchResource { id: resource_id });
            }
        }
        let alert = Alert {
            id: Uuid::new_v4(),
            r#type: alert.r#type,
            severity: alert.severity,
            message,
            city: alert.city.map(|c| c.trim().to_string()).filter(|c| !c.is_empty()),
            resource_id: alert.resource_id,
            active: true,
            created_by: self.user_id,
            created_at: Utc::now(),
            resolved_at: None,
        };
        self.alert_repo.insert(&alert).await?;
        self.alert_repo.save_changed().await?;
        tracing::info!("Alert {} raised with severity {:?}.", alert.id, alert.severity);
        Ok(alert)
    }

    async fn list(&self, include_inactive: bool) -> NoticeResult<Vec<Alert>> {
        Ok(self.alert_repo.get_all_filtered(!include_inactive).await?)
    }

    async fn set_active(&self, id: Uuid, active: bool) -> NoticeResult<(Alert, Alert)> {
        let old = self
            .alert_repo
            .find_by_id(id)
            .await?
            .ok_or(NoticeException::NoSuchAlert { id })?;
        let mut new = old.clone();
        new.set_active(active, Utc::now());
        self.alert_repo.update(&new).await?;
        self.alert_repo.save_changed().await?;
        Ok((old, new))
    }
}
