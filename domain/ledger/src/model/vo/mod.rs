mod command;
mod stock_detail;

#[rustfmt::skip]
pub use {
    command::*,
    stock_detail::{StockDetail, StockMovement},
};
