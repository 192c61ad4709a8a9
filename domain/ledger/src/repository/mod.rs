mod distribution_plan;
mod resource;
mod stock;
mod stock_history;

#[rustfmt::skip]
pub use {
    distribution_plan::DistributionPlanRepo,
    resource::ResourceRepo,
    stock::StockRepo,
    stock_history::StockHistoryRepo,
};
