pub mod distribution_plan;
pub mod resource;
pub mod stock;
pub mod stock_history;

#[rustfmt::skip]
pub use {
    distribution_plan::{DistributionPlan, PlanStatus},
    resource::{Resource, ResourceType},
    stock::Stock,
    stock_history::{ChangeReason, StockHistory},
};
