use anyhow::anyhow;
use architecture::model::AggregateRoot;
use chrono::{DateTime, Utc};
use database_model::system::prelude::AlertModel;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: Uuid,
    pub r#type: AlertType,
    pub severity: AlertSeverity,
    pub message: String,
    pub city: Option<String>,
    pub resource_id: Option<Uuid>,
    pub active: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Shortage = 0,
    Epidemic = 1,
    #[default]
    Info = 2,
    Maintenance = 3,
    Urgent = 4,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Low = 0,
    #[default]
    Medium = 1,
    High = 2,
    Critical = 3,
}

impl Alert {
    /// Activating clears `resolved_at`, deactivating stamps it with `now`.
    pub fn set_active(&mut self, active: bool, now: DateTime<Utc>) {
        self.active = active;
        self.resolved_at = if active { None } else { Some(now) };
    }
}

impl AggregateRoot for Alert {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl TryFrom<AlertModel> for Alert {
    type Error = anyhow::Error;

    fn try_from(model: AlertModel) -> Result<Self, Self::Error> {
        Ok(Self {
            r#type: FromPrimitive::from_i32(model.r#type)
                .ok_or(anyhow!("Wrong alert type: {}.", model.r#type))?,
            severity: FromPrimitive::from_i32(model.severity)
                .ok_or(anyhow!("Wrong alert severity: {}.", model.severity))?,
            id: model.id,
            message: model.message,
            city: model.city,
            resource_id: model.resource_id,
            active: model.active,
            created_by: model.created_by,
            created_at: model.created_at,
            resolved_at: model.resolved_at,
        })
    }
}

impl From<Alert> for AlertModel {
    fn from(entity: Alert) -> Self {
        let Alert {
            id,
            r#type,
            severity,
            message,
            city,
            resource_id,
            active,
            created_by,
            created_at,
            resolved_at,
        } = entity;
        Self {
            id,
            r#type: r#type as i32,
            severity: severity as i32,
            message,
            city,
            resource_id,
            active,
            created_by,
            created_at,
            resolved_at,
        }
    }
}
