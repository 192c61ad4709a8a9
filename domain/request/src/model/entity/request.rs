use anyhow::anyhow;
use architecture::model::AggregateRoot;
use chrono::{DateTime, Utc};
use database_model::system::prelude::RequestModel;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: Uuid,
    pub user_id: Uuid,
    pub resource_id: Uuid,
    pub quantity: i32,
    pub status: RequestStatus,
    pub urgency: Urgency,
    pub city: Option<String>,
    pub approved_by: Option<Uuid>,
    pub estimated_delivery_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, FromPrimitive,
    ToPrimitive,
)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending = 0,
    Approved = 1,
    Rejected = 2,
    Fulfilled = 3,
    Cancelled = 4,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low = 0,
    #[default]
    Medium = 1,
    High = 2,
}

/// Which status changes are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Only the moves listed by [`RequestStatus::next_statuses`].
    #[default]
    Strict,
    /// Any status may follow any other.
    Unconstrained,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 5] = [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Rejected,
        RequestStatus::Fulfilled,
        RequestStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Fulfilled => "fulfilled",
            RequestStatus::Cancelled => "cancelled",
        }
    }

    pub fn next_statuses(&self) -> &'static [RequestStatus] {
        use RequestStatus::*;
        match self {
            Pending => &[Approved, Rejected, Cancelled],
            Approved => &[Fulfilled, Cancelled],
            Rejected | Fulfilled | Cancelled => &[],
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next_statuses().is_empty()
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }
}

impl TransitionPolicy {
    pub fn allows(&self, from: RequestStatus, to: RequestStatus) -> bool {
        match self {
            TransitionPolicy::Strict => from.next_statuses().contains(&to),
            TransitionPolicy::Unconstrained => true,
        }
    }
}

impl AggregateRoot for Request {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl TryFrom<RequestModel> for Request {
    type Error = anyhow::Error;

    fn try_from(model: RequestModel) -> Result<Self, Self::Error> {
        let RequestModel {
            id,
            user_id,
            resource_id,
            quantity,
            status,
            urgency,
            city,
            approved_by,
            estimated_delivery_date,
            notes,
            created_at,
            updated_at,
        } = model;
        Ok(Self {
            id,
            user_id,
            resource_id,
            quantity,
            status: FromPrimitive::from_i32(status)
                .ok_or(anyhow!("Wrong request status: {status}."))?,
            urgency: FromPrimitive::from_i32(urgency)
                .ok_or(anyhow!("Wrong request urgency: {urgency}."))?,
            city,
            approved_by,
            estimated_delivery_date,
            notes,
            created_at,
            updated_at,
        })
    }
}

impl From<Request> for RequestModel {
    fn from(entity: Request) -> Self {
        let Request {
            id,
            user_id,
            resource_id,
            quantity,
            status,
            urgency,
            city,
            approved_by,
            estimated_delivery_date,
            notes,
            created_at,
            updated_at,
        } = entity;
        Self {
            id,
            user_id,
            resource_id,
            quantity,
            status: status as i32,
            urgency: urgency as i32,
            city,
            approved_by,
            estimated_delivery_date,
            notes,
            created_at,
            updated_at,
        }
    }
}
