use std::sync::Arc;

use architecture::repository::MutableRepository;
use async_trait::async_trait;
use chrono::Utc;
use domain_ledger::model::vo::window_start;
use domain_notice::{
    exception::{NoticeException, NoticeResult},
    model::{
        entity::AuditLog,
        vo::{AuditEntry, AuditFilter},
    },
    repository::AuditLogRepo,
    service::AuditService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct AuditServiceImpl {
    audit_repo: Arc<dyn AuditLogRepo>,
    #[builder(default)]
    user_id: Option<Uuid>,
    #[builder(default)]
    ip_address: Option<String>,
}

#[async_trait]
impl AuditService for AuditServiceImpl {
    async fn record(&self, entry: AuditEntry) -> NoticeResult<AuditLog> {
        let log = AuditLog {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            action: entry.action,
            entity: entry.entity.to_string(),
            entity_id: entry.entity_id,
            old_value: entry.old_value,
            new_value: entry.new_value,
            ip_address: self.ip_address.clone(),
            created_at: Utc::now(),
        };
        self.audit_repo.insert(&log).await?;
        self.audit_repo.save_changed().await?;
        Ok(log)
    }

    async fn list(&self, entity: Option<String>, days: Option<i64>) -> NoticeResult<Vec<AuditLog>> {
        let since = match days {
            Some(days) if days <= 0 => return Err(NoticeException::InvalidWindow { value: days }),
            Some(days) => window_start(days),
            None => None,
        };
        Ok(self
            .audit_repo
            .get_filtered(AuditFilter { entity, since })
            .await?)
    }
}
