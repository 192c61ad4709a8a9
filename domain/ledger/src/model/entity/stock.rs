use architecture::model::AggregateRoot;
use chrono::{DateTime, Utc};
use database_model::system::prelude::StockModel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Resource;

/// Current quantity of one resource in one city. At most one row exists per
/// `(resource_id, city)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: Uuid,
    pub resource_id: Uuid,
    pub city: String,
    pub postal_code: String,
    pub quantity: i32,
    pub last_restock_date: Option<DateTime<Utc>>,
    pub updated_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Stock {
    pub fn is_critical(&self, resource: &Resource) -> bool {
        self.quantity <= resource.critical_threshold()
    }
}

impl AggregateRoot for Stock {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl From<StockModel> for Stock {
    fn from(model: StockModel) -> Self {
        let StockModel {
            id,
            resource_id,
            city,
            postal_code,
            quantity,
            last_restock_date,
            updated_by,
            created_at,
            updated_at,
        } = model;
        Self {
            id,
            resource_id,
            city,
            postal_code,
            quantity,
            last_restock_date,
            updated_by,
            created_at,
            updated_at,
        }
    }
}

impl From<Stock> for StockModel {
    fn from(entity: Stock) -> Self {
        let Stock {
            id,
            resource_id,
            city,
            postal_code,
            quantity,
            last_restock_date,
            updated_by,
            created_at,
            updated_at,
        } = entity;
        Self {
            id,
            resource_id,
            city,
            postal_code,
            quantity,
            last_restock_date,
            updated_by,
            created_at,
            updated_at,
        }
    }
}
