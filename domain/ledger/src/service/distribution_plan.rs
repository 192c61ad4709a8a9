use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    exception::LedgerResult,
    model::{
        entity::{DistributionPlan, PlanStatus},
        vo::NewDistributionPlan,
    },
};

#[async_trait]
pub trait DistributionPlanService: Send + Sync {
    async fn create(&self, plan: NewDistributionPlan) -> LedgerResult<DistributionPlan>;
    async fn list(&self) -> LedgerResult<Vec<DistributionPlan>>;
    /// Returns the plan before and after the change.
    async fn update_status(
        &self,
        id: Uuid,
        status: PlanStatus,
    ) -> LedgerResult<(DistributionPlan, DistributionPlan)>;
}
