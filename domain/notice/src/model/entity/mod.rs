pub mod alert;
pub mod audit_log;
pub mod notification;

#[rustfmt::skip]
pub use {
    alert::{Alert, AlertSeverity, AlertType},
    audit_log::{AuditAction, AuditLog},
    notification::{Notification, NotificationType},
};
