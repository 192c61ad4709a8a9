use anyhow::anyhow;
use architecture::model::AggregateRoot;
use chrono::{DateTime, Utc};
use database_model::system::prelude::NotificationModel;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 发给单个用户的通知
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub r#type: NotificationType,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub action_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    RequestUpdate = 0,
    Alert = 1,
    StockWarning = 2,
    ApprovalNeeded = 3,
    #[default]
    Info = 4,
}

impl Notification {
    pub fn new(
        user_id: Uuid,
        kind: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
        action_url: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            r#type: kind,
            title: title.into(),
            message: message.into(),
            read: false,
            action_url,
            created_at: Utc::now(),
        }
    }
}

impl AggregateRoot for Notification {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl TryFrom<NotificationModel> for Notification {
    type Error = anyhow::Error;

    fn try_from(model: NotificationModel) -> Result<Self, Self::Error> {
        Ok(Self {
            r#type: FromPrimitive::from_i32(model.r#type)
                .ok_or(anyhow!("Wrong notification type: {}.", model.r#type))?,
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            message: model.message,
            read: model.read,
            action_url: model.action_url,
            created_at: model.created_at,
        })
    }
}

impl From<Notification> for NotificationModel {
    fn from(entity: Notification) -> Self {
        let Notification {
            id,
            user_id,
            r#type,
            title,
            message,
            read,
            action_url,
            created_at,
        } = entity;
        Self {
            id,
            user_id,
            r#type: r#type as i32,
            title,
            message,
            read,
            action_url,
            created_at,
        }
    }
}
