mod distribution_plan;
mod resource;
mod stock_ledger;

pub use distribution_plan::DistributionPlanServiceImpl;
pub use resource::ResourceServiceImpl;
pub use stock_ledger::StockLedgerServiceImpl;
