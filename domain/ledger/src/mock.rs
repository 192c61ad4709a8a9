use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::{
    model::{
        entity::{DistributionPlan, Resource, ResourceType, Stock, StockHistory},
        vo::{HistoryFilter, StockDetail},
    },
    repository::{DistributionPlanRepo, ResourceRepo, StockHistoryRepo, StockRepo},
};

mock! {
    pub ResourceRepo {}
    #[async_trait]
    impl ResourceRepo for ResourceRepo {
        async fn get_all_by_type(&self, resource_type: Option<ResourceType>) -> anyhow::Result<Vec<Resource>>;
    }
    impl DBRepository<Resource> for ResourceRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Resource> for ResourceRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Resource>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Resource>>;
    }
    #[async_trait]
    impl MutableRepository<Resource> for ResourceRepo {
        async fn insert(&self, entity: &Resource) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}

mock! {
    pub StockRepo {}
    #[async_trait]
    impl StockRepo for StockRepo {
        async fn find_by_resource_and_city(
            &self,
            resource_id: Uuid,
            city: String,
        ) -> anyhow::Result<Option<Stock>>;
        async fn get_all_with_resource(&self, city: Option<String>) -> anyhow::Result<Vec<StockDetail>>;
        async fn get_by_resource_with_min_quantity(
            &self,
            resource_id: Uuid,
            min_quantity: i32,
        ) -> anyhow::Result<Vec<StockDetail>>;
    }
    impl DBRepository<Stock> for StockRepo {}
    impl ReadOnlyRepository<Stock> for StockRepo {}
    #[async_trait]
    impl MutableRepository<Stock> for StockRepo {
        async fn insert(&self, entity: &Stock) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}

mock! {
    pub StockHistoryRepo {}
    #[async_trait]
    impl StockHistoryRepo for StockHistoryRepo {
        async fn get_history(&self, filter: HistoryFilter) -> anyhow::Result<Vec<StockHistory>>;
    }
    impl DBRepository<StockHistory> for StockHistoryRepo {}
    impl ReadOnlyRepository<StockHistory> for StockHistoryRepo {}
    #[async_trait]
    impl MutableRepository<StockHistory> for StockHistoryRepo {
        async fn insert(&self, entity: &StockHistory) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}

mock! {
    pub DistributionPlanRepo {}
    impl DistributionPlanRepo for DistributionPlanRepo {}
    impl DBRepository<DistributionPlan> for DistributionPlanRepo {}
    #[async_trait]
    impl ReadOnlyRepository<DistributionPlan> for DistributionPlanRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<DistributionPlan>>;
        async fn get_all(&self) -> anyhow::Result<Vec<DistributionPlan>>;
    }
    #[async_trait]
    impl MutableRepository<DistributionPlan> for DistributionPlanRepo {
        async fn insert(&self, entity: &DistributionPlan) -> anyhow::Result<Uuid>;
        async fn update(&self, entity: &DistributionPlan) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}
