use async_trait::async_trait;

use crate::{
    exception::ReportResult,
    model::{DistributionEntry, ExportFile, ExportFormat, StockTrendPoint, Summary, TrendQuery},
};

#[async_trait]
pub trait ReportService: Send + Sync {
    async fn summary(&self) -> ReportResult<Summary>;
    /// Quantities recorded in the stock history inside the window, oldest first.
    async fn stock_trends(&self, query: TrendQuery) -> ReportResult<Vec<StockTrendPoint>>;
    /// Sorted by city, then resource type.
    async fn distribution(&self) -> ReportResult<Vec<DistributionEntry>>;
}

#[async_trait]
pub trait ExportService: Send + Sync {
    async fn export_stocks(&self, format: ExportFormat) -> ReportResult<ExportFile>;
    async fn export_requests(&self, format: ExportFormat) -> ReportResult<ExportFile>;
}
