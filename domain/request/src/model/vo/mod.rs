use chrono::{DateTime, Utc};
use domain_account::model::entity::User;
use domain_ledger::model::entity::Resource;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::{Request, RequestStatus, Urgency};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRequest {
    pub resource_id: Uuid,
    pub quantity: i32,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub status: RequestStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub estimated_delivery_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestFilter {
    pub status: Option<RequestStatus>,
    pub user_id: Option<Uuid>,
}

/// A request together with the resource asked for and the requester.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RequestDetail {
    #[serde(flatten)]
    pub request: Request,
    pub resource: Option<Resource>,
    pub user: Option<User>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RequestStats {
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
    pub fulfilled: u64,
    pub cancelled: u64,
}

impl RequestStats {
    pub fn add(&mut self, status: RequestStatus, count: u64) {
        let slot = match status {
            RequestStatus::Pending => &mut self.pending,
            RequestStatus::Approved => &mut self.approved,
            RequestStatus::Rejected => &mut self.rejected,
            RequestStatus::Fulfilled => &mut self.fulfilled,
            RequestStatus::Cancelled => &mut self.cancelled,
        };
        *slot += count;
    }
}
