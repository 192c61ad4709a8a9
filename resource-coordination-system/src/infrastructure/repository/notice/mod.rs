mod alert;
mod audit_log;
mod notification;
