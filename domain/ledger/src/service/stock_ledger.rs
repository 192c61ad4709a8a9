use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    exception::LedgerResult,
    model::{
        entity::StockHistory,
        vo::{StockChange, StockDetail, StockFilter, StockMovement},
    },
};

#[async_trait]
pub trait StockLedgerService: Send + Sync {
    /// Writes the new quantity of `(resource_id, city)` and appends the matching history row.
    async fn record(&self, change: StockChange) -> LedgerResult<StockMovement>;

    async fn list(&self, filter: StockFilter) -> LedgerResult<Vec<StockDetail>>;

    /// History of a resource, newest first, optionally limited to a city and to the
    /// trailing `days`.
    async fn history(
        &self,
        resource_id: Uuid,
        city: Option<String>,
        days: Option<i64>,
    ) -> LedgerResult<Vec<StockHistory>>;
}
