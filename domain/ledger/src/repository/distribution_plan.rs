use architecture::repository::DBRepository;

use crate::model::entity::DistributionPlan;

/// `get_all` returns plans newest first.
pub trait DistributionPlanRepo: DBRepository<DistributionPlan> + Send + Sync {}
