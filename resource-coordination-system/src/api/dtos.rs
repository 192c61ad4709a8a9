use domain_account::model::entity::User;
use domain_ledger::model::entity::{PlanStatus, ResourceType};
use domain_report::model::ExportFormat;
use domain_request::model::{entity::RequestStatus, vo::RequestFilter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct ResourceQuery {
    #[serde(rename = "type")]
    pub resource_type: Option<ResourceType>,
}

/// Query flags match their literal text; any other value leaves the default.
fn flag_is(value: &Option<String>, expected: &str) -> bool {
    value.as_deref() == Some(expected)
}

#[derive(Deserialize)]
pub struct StockQuery {
    pub city: Option<String>,
    pub critical: Option<String>,
}

impl StockQuery {
    pub fn critical_only(&self) -> bool {
        flag_is(&self.critical, "true")
    }
}

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub city: Option<String>,
    pub days: Option<i64>,
}

#[derive(Deserialize)]
pub struct AlertQuery {
    pub active: Option<String>,
}

impl AlertQuery {
    /// `false` lists every alert, anything else only the active ones.
    pub fn include_inactive(&self) -> bool {
        flag_is(&self.active, "false")
    }
}

#[derive(Deserialize)]
pub struct ActiveUpdate {
    pub active: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestQuery {
    pub status: Option<RequestStatus>,
    pub user_id: Option<Uuid>,
}

impl From<RequestQuery> for RequestFilter {
    fn from(query: RequestQuery) -> Self {
        RequestFilter {
            status: query.status,
            user_id: query.user_id,
        }
    }
}

#[derive(Deserialize)]
pub struct NotificationQuery {
    pub unread: Option<String>,
}

impl NotificationQuery {
    pub fn unread_only(&self) -> bool {
        flag_is(&self.unread, "true")
    }
}

#[derive(Deserialize)]
pub struct ReadUpdate {
    pub read: bool,
}

#[derive(Deserialize)]
pub struct AuditQuery {
    pub entity: Option<String>,
    pub days: Option<i64>,
}

#[derive(Deserialize)]
pub struct PlanStatusUpdate {
    pub status: PlanStatus,
}

#[derive(Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub format: ExportFormat,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
