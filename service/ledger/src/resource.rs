use std::sync::Arc;

use architecture::repository::{MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use chrono::Utc;
use domain_ledger::{
    exception::{LedgerException, LedgerResult},
    model::{
        entity::{
            resource::{DEFAULT_CRITICAL_LEVEL, DEFAULT_RECOMMENDED_STOCK},
            Resource, ResourceType,
        },
        vo::NewResource,
    },
    repository::ResourceRepo,
    service::ResourceService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct ResourceServiceImpl {
    resource_repo: Arc<dyn ResourceRepo>,
}

#[async_trait]
impl ResourceService for ResourceServiceImpl {
    async fn create(&self, resource: NewResource) -> LedgerResult<Resource> {
        let name = resource.name.trim();
        if name.is_empty() {
            return Err(LedgerException::EmptyField { field: "name" });
        }
        let critical_level = resource.critical_level.unwrap_or(DEFAULT_CRITICAL_LEVEL);
        if critical_level < 0 {
            return Err(LedgerException::Negative {
                field: "criticalLevel",
                value: critical_level,
            });
        }
        let recommended_stock = resource.recommended_stock.unwrap_or(DEFAULT_RECOMMENDED_STOCK);
        if recommended_stock < 0 {
            return Err(LedgerException::Negative {
                field: "recommendedStock",
                value: recommended_stock,
            });
        }
        let resource = Resource {
            id: Uuid::new_v4(),
            name: name.to_string(),
            r#type: resource.r#type,
            description: resource.description,
            critical_level: Some(critical_level),
            recommended_stock: Some(recommended_stock),
            created_at: Utc::now(),
        };
        self.resource_repo.insert(&resource).await?;
        self.resource_repo.save_changed().await?;
        tracing::info!("Resource {} ({}) created.", resource.name, resource.id);
        Ok(resource)
    }

    async fn get(&self, id: Uuid) -> LedgerResult<Resource> {
        self.resource_repo
            .find_by_id(id)
            .await?
            .ok_or(LedgerException::NoSuchResource { id })
    }

    async fn list(&self, resource_type: Option<ResourceType>) -> LedgerResult<Vec<Resource>> {
        Ok(self.resource_repo.get_all_by_type(resource_type).await?)
    }
}
