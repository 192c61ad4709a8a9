use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    exception::LedgerResult,
    model::{
        entity::{Resource, ResourceType},
        vo::NewResource,
    },
};

#[async_trait]
pub trait ResourceService: Send + Sync {
    /// Creates a resource. Missing thresholds take their defaults.
    async fn create(&self, resource: NewResource) -> LedgerResult<Resource>;
    async fn get(&self, id: Uuid) -> LedgerResult<Resource>;
    async fn list(&self, resource_type: Option<ResourceType>) -> LedgerResult<Vec<Resource>>;
}
