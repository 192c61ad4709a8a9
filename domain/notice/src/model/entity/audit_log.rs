use architecture::model::AggregateRoot;
use chrono::{DateTime, Utc};
use database_model::system::prelude::AuditLogModel;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub action: AuditAction,
    pub entity: String,
    pub entity_id: Option<Uuid>,
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AuditAction::Create => "create",
            AuditAction::Update => "update",
        })
    }
}

impl FromStr for AuditAction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(AuditAction::Create),
            "update" => Ok(AuditAction::Update),
            _ => anyhow::bail!("Wrong audit action: {s}."),
        }
    }
}

impl AggregateRoot for AuditLog {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl TryFrom<AuditLogModel> for AuditLog {
    type Error = anyhow::Error;

    fn try_from(model: AuditLogModel) -> Result<Self, Self::Error> {
        Ok(Self {
            action: model.action.parse()?,
            id: model.id,
            user_id: model.user_id,
            entity: model.entity,
            entity_id: model.entity_id,
            old_value: model.old_value,
            new_value: model.new_value,
            ip_address: model.ip_address,
            created_at: model.created_at,
        })
    }
}

impl From<AuditLog> for AuditLogModel {
    fn from(entity: AuditLog) -> Self {
        let AuditLog {
            id,
            user_id,
            action,
            entity,
            entity_id,
            old_value,
            new_value,
            ip_address,
            created_at,
        } = entity;
        Self {
            id,
            user_id,
            action: action.to_string(),
            entity,
            entity_id,
            old_value,
            new_value,
            ip_address,
            created_at,
        }
    }
}
