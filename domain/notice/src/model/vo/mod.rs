use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::model::entity::{AlertSeverity, AlertType, AuditAction};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    pub r#type: AlertType,
    pub severity: AlertSeverity,
    pub message: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub resource_id: Option<Uuid>,
}

/// What to write into the audit trail, the actor and address come from the request.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub action: AuditAction,
    pub entity: &'static str,
    pub entity_id: Option<Uuid>,
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
}

impl AuditEntry {
    pub fn created<T: Serialize>(entity: &'static str, entity_id: Uuid, value: &T) -> Self {
        Self {
            action: AuditAction::Create,
            entity,
            entity_id: Some(entity_id),
            old_value: None,
            new_value: serde_json::to_value(value).ok(),
        }
    }

    pub fn updated<O: Serialize, N: Serialize>(
        entity: &'static str,
        entity_id: Uuid,
        old_value: &O,
        new_value: &N,
    ) -> Self {
        Self {
            action: AuditAction::Update,
            entity,
            entity_id: Some(entity_id),
            old_value: serde_json::to_value(old_value).ok(),
            new_value: serde_json::to_value(new_value).ok(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditFilter {
    pub entity: Option<String>,
    pub since: Option<DateTime<Utc>>,
}
