use architecture::repository::DBRepository;
use uuid::Uuid;

use crate::model::{entity::Stock, vo::StockDetail};

/// `insert` upserts on `(resource_id, city)`.
#[async_trait::async_trait]
pub trait StockRepo: DBRepository<Stock> + Send + Sync {
    async fn find_by_resource_and_city(
        &self,
        resource_id: Uuid,
        city: String,
    ) -> anyhow::Result<Option<Stock>>;

    /// Stocks joined with their resource, optionally restricted to one city.
    async fn get_all_with_resource(&self, city: Option<String>) -> anyhow::Result<Vec<StockDetail>>;

    /// Stocks of a resource holding at least `min_quantity`, in any city.
    async fn get_by_resource_with_min_quantity(
        &self,
        resource_id: Uuid,
        min_quantity: i32,
    ) -> anyhow::Result<Vec<StockDetail>>;
}
