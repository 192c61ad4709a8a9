use anyhow::anyhow;
use architecture::model::AggregateRoot;
use chrono::{DateTime, Utc};
use database_model::system::prelude::StockHistoryModel;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One append-only row per stock write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockHistory {
    pub id: Uuid,
    pub resource_id: Uuid,
    pub city: String,
    /// Absent when the write created the stock row.
    pub previous_quantity: Option<i32>,
    pub new_quantity: i32,
    pub change_reason: ChangeReason,
    pub updated_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[serde(rename_all = "snake_case")]
pub enum ChangeReason {
    #[default]
    Restock = 0,
    RequestFulfilled = 1,
    ManualAdjustment = 2,
    Consumption = 3,
}

impl AggregateRoot for StockHistory {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl TryFrom<StockHistoryModel> for StockHistory {
    type Error = anyhow::Error;

    fn try_from(model: StockHistoryModel) -> Result<Self, Self::Error> {
        Ok(Self {
            change_reason: FromPrimitive::from_i32(model.change_reason)
                .ok_or(anyhow!("Wrong change reason: {}.", model.change_reason))?,
            id: model.id,
            resource_id: model.resource_id,
            city: model.city,
            previous_quantity: model.previous_quantity,
            new_quantity: model.new_quantity,
            updated_by: model.updated_by,
            created_at: model.created_at,
        })
    }
}

impl From<StockHistory> for StockHistoryModel {
    fn from(entity: StockHistory) -> Self {
        let StockHistory {
            id,
            resource_id,
            city,
            previous_quantity,
            new_quantity,
            change_reason,
            updated_by,
            created_at,
        } = entity;
        Self {
            id,
            resource_id,
            city,
            previous_quantity,
            new_quantity,
            change_reason: change_reason as i32,
            updated_by,
            created_at,
        }
    }
}
