mod distribution_plan;
mod resource;
mod stock_ledger;

#[rustfmt::skip]
pub use {
    distribution_plan::DistributionPlanService,
    resource::ResourceService,
    stock_ledger::StockLedgerService,
};
