use architecture::repository::DBRepository;

use crate::model::{entity::StockHistory, vo::HistoryFilter};

#[async_trait::async_trait]
pub trait StockHistoryRepo: DBRepository<StockHistory> + Send + Sync {
    /// Matching rows, newest first.
    async fn get_history(&self, filter: HistoryFilter) -> anyhow::Result<Vec<StockHistory>>;
}
