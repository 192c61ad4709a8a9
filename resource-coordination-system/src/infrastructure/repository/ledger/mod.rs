mod distribution_plan;
mod resource;
mod stock;
mod stock_history;
