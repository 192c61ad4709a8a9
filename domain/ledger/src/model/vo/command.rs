use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::model::entity::{ChangeReason, ResourceType};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResource {
    pub name: String,
    pub r#type: ResourceType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub critical_level: Option<i32>,
    #[serde(default)]
    pub recommended_stock: Option<i32>,
}

/// Sets the quantity of a resource in a city.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockChange {
    pub resource_id: Uuid,
    pub city: String,
    pub postal_code: String,
    pub quantity: i32,
    #[serde(default)]
    pub change_reason: Option<ChangeReason>,
}

#[derive(Debug, Clone, Default)]
pub struct StockFilter {
    pub city: Option<String>,
    pub critical_only: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryFilter {
    pub resource_id: Option<Uuid>,
    pub city: Option<String>,
    /// Only rows created at or after this instant.
    pub since: Option<DateTime<Utc>>,
}

/// Start of a trailing window of `days` days ending now.
///
/// `None` when the window reaches past the representable time range, in which case the
/// query has no lower bound. Non-positive `days` are rejected by callers before this.
pub fn window_start(days: i64) -> Option<DateTime<Utc>> {
    Duration::try_days(days).and_then(|window| Utc::now().checked_sub_signed(window))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDistributionPlan {
    pub resource_id: Uuid,
    pub from_city: String,
    pub to_city: String,
    pub quantity: i32,
    #[serde(default)]
    pub estimated_arrival: Option<DateTime<Utc>>,
}
