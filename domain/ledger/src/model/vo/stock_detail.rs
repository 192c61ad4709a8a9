use serde::Serialize;

use crate::model::entity::{Resource, Stock, StockHistory};

/// A stock row joined with the resource it counts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StockDetail {
    #[serde(flatten)]
    pub stock: Stock,
    pub resource: Resource,
}

impl StockDetail {
    pub fn is_critical(&self) -> bool {
        self.stock.is_critical(&self.resource)
    }
}

/// Result of one ledger write: the stock as stored and the history row appended for it.
#[derive(Debug, Clone)]
pub struct StockMovement {
    pub stock: Stock,
    pub history: StockHistory,
}
