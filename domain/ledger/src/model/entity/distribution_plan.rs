use anyhow::anyhow;
use architecture::model::AggregateRoot;
use chrono::{DateTime, Utc};
use database_model::system::prelude::DistributionPlanModel;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A proposed transfer of a resource quantity from one city to another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DistributionPlan {
    pub id: Uuid,
    pub resource_id: Uuid,
    pub from_city: String,
    pub to_city: String,
    pub quantity: i32,
    pub status: PlanStatus,
    pub estimated_arrival: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    #[default]
    Planned = 0,
    InTransit = 1,
    Delivered = 2,
    Cancelled = 3,
}

impl AggregateRoot for DistributionPlan {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl TryFrom<DistributionPlanModel> for DistributionPlan {
    type Error = anyhow::Error;

    fn try_from(model: DistributionPlanModel) -> Result<Self, Self::Error> {
        Ok(Self {
            status: FromPrimitive::from_i32(model.status)
                .ok_or(anyhow!("Wrong distribution plan status: {}.", model.status))?,
            id: model.id,
            resource_id: model.resource_id,
            from_city: model.from_city,
            to_city: model.to_city,
            quantity: model.quantity,
            estimated_arrival: model.estimated_arrival,
            created_by: model.created_by,
            created_at: model.created_at,
        })
    }
}

impl From<DistributionPlan> for DistributionPlanModel {
    fn from(entity: DistributionPlan) -> Self {
        let DistributionPlan {
            id,
            resource_id,
            from_city,
            to_city,
            quantity,
            status,
            estimated_arrival,
            created_by,
            created_at,
        } = entity;
        Self {
            id,
            resource_id,
            from_city,
            to_city,
            quantity,
            status: status as i32,
            estimated_arrival,
            created_by,
            created_at,
        }
    }
}
