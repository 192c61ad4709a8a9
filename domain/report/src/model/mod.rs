use chrono::{DateTime, Utc};
use domain_ledger::model::entity::ResourceType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_TREND_DAYS: i64 = 30;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_resources: u64,
    pub critical_shortages: u64,
    pub pending_requests: u64,
    pub active_alerts: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendQuery {
    pub resource_id: Option<Uuid>,
    pub city: Option<String>,
    pub days: Option<i64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockTrendPoint {
    pub date: DateTime<Utc>,
    pub city: String,
    pub quantity: i32,
    pub resource_name: String,
}

/// Stock totals of one resource type in one city.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DistributionEntry {
    pub city: String,
    pub resource_type: ResourceType,
    pub total_quantity: i64,
    pub critical_count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub content_type: &'static str,
    pub file_name: String,
    pub body: Vec<u8>,
}
