use anyhow::anyhow;
use architecture::model::AggregateRoot;
use chrono::{DateTime, Utc};
use database_model::system::prelude::ResourceModel;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Threshold used when a resource has no critical level of its own.
pub const DEFAULT_CRITICAL_LEVEL: i32 = 10;
pub const DEFAULT_RECOMMENDED_STOCK: i32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: Uuid,
    pub name: String,
    pub r#type: ResourceType,
    pub description: Option<String>,
    pub critical_level: Option<i32>,
    pub recommended_stock: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, FromPrimitive,
    ToPrimitive,
)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    #[default]
    Medication = 0,
    Equipment = 1,
    Staff = 2,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Medication => "medication",
            ResourceType::Equipment => "equipment",
            ResourceType::Staff => "staff",
        }
    }
}

impl Resource {
    /// Stocks at or below this quantity count as a shortage.
    pub fn critical_threshold(&self) -> i32 {
        self.critical_level.unwrap_or(DEFAULT_CRITICAL_LEVEL)
    }
}

impl AggregateRoot for Resource {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl TryFrom<ResourceModel> for Resource {
    type Error = anyhow::Error;

    fn try_from(model: ResourceModel) -> Result<Self, Self::Error> {
        let ResourceModel {
            id,
            name,
            r#type,
            description,
            critical_level,
            recommended_stock,
            created_at,
        } = model;
        Ok(Self {
            id,
            name,
            r#type: FromPrimitive::from_i32(r#type)
                .ok_or(anyhow!("Wrong resource type: {}.", r#type))?,
            description,
            critical_level,
            recommended_stock,
            created_at,
        })
    }
}

impl From<Resource> for ResourceModel {
    fn from(entity: Resource) -> Self {
        let Resource {
            id,
            name,
            r#type,
            description,
            critical_level,
            recommended_stock,
            created_at,
        } = entity;
        Self {
            id,
            name,
            r#type: r#type as i32,
            description,
            critical_level,
            recommended_stock,
            created_at,
        }
    }
}
