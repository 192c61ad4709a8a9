use std::sync::Arc;

use architecture::repository::{MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use chrono::Utc;
use domain_ledger::{
    exception::{LedgerException, LedgerResult},
    model::{
        entity::{DistributionPlan, PlanStatus},
        vo::NewDistributionPlan,
    },
    repository::{DistributionPlanRepo, ResourceRepo},
    service::DistributionPlanService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct DistributionPlanServiceImpl {
    resource_repo: Arc<dyn ResourceRepo>,
    plan_repo: Arc<dyn DistributionPlanRepo>,
    #[builder(default)]
    user_id: Option<Uuid>,
}

#[async_trait]
impl DistributionPlanService for DistributionPlanServiceImpl {
    async fn create(&self, plan: NewDistributionPlan) -> LedgerResult<DistributionPlan> {
        let from_city = plan.from_city.trim().to_string();
        let to_city = plan.to_city.trim().to_string();
        if from_city.is_empty() {
            return Err(LedgerException::EmptyField { field: "fromCity" });
        }
        if to_city.is_empty() {
            return Err(LedgerException::EmptyField { field: "toCity" });
        }
        if from_city == to_city {
            return Err(LedgerException::SameCity { city: from_city });
        }
        if plan.quantity <= 0 {
            return Err(LedgerException::NonPositiveQuantity {
                value: plan.quantity,
            });
        }
        if self.resource_repo.find_by_id(plan.resource_id).await?.is_none() {
            return Err(LedgerException::NoSuchResource {
                id: plan.resource_id,
            });
        }
        let plan = DistributionPlan {
            id: Uuid::new_v4(),
            resource_id: plan.resource_id,
            from_city,
            to_city,
            quantity: plan.quantity,
            status: PlanStatus::Planned,
            estimated_arrival: plan.estimated_arrival,
            created_by: self.user_id,
            created_at: Utc::now(),
        };
        self.plan_repo.insert(&plan).await?;
        self.plan_repo.save_changed().await?;
        Ok(plan)
    }

    async fn list(&self) -> LedgerResult<Vec<DistributionPlan>> {
        Ok(self.plan_repo.get_all().await?)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: PlanStatus,
    ) -> LedgerResult<(DistributionPlan, DistributionPlan)> {
        let old = self
            .plan_repo
            .find_by_id(id)
            .await?
            .ok_or(LedgerException::NoSuchDistributionPlan { id })?;
        let new = DistributionPlan {
            status,
            ..old.clone()
        };
        self.plan_repo.update(&new).await?;
        self.plan_repo.save_changed().await?;
        Ok((old, new))
    }
}
