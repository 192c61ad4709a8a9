use architecture::repository::DBRepository;

use crate::model::entity::{Resource, ResourceType};

#[async_trait::async_trait]
pub trait ResourceRepo: DBRepository<Resource> + Send + Sync {
    /// Resources of the given type, or every resource when `None`.
    async fn get_all_by_type(&self, resource_type: Option<ResourceType>) -> anyhow::Result<Vec<Resource>>;
}
