use std::sync::Arc;

use actix_web::web;
use domain_notice::{model::vo::AuditEntry, service::AuditService};

use crate::infrastructure::{service_provider::IServiceProvider, ServiceProviderScoped};
use error::ApiError;

pub mod alert;
pub mod analytics;
pub mod audit_log;
pub mod auth;
pub mod distribution_plan;
pub mod dtos;
pub mod error;
pub mod export;
pub mod notification;
pub mod request;
pub mod resource;
pub mod stock;
pub mod user;

/// Registers every route under `/api` together with the extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|e, _| {
        ApiError::Validation(e.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|e, _| {
        ApiError::Validation(e.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|e, _| {
        ApiError::Validation(e.to_string()).into()
    }))
    .service(
        web::scope("/api")
            .service(auth::register)
            .service(auth::login)
            .service(auth::logout)
            .service(auth::current_user)
            .service(user::current_user)
            .service(user::update_profile)
            .service(user::list_users)
            .service(resource::list_resources)
            .service(resource::get_resource)
            .service(resource::create_resource)
            .service(stock::list_stocks)
            .service(stock::record_stock)
            .service(stock::stock_history)
            .service(alert::list_alerts)
            .service(alert::create_alert)
            .service(alert::set_alert_active)
            .service(request::request_stats)
            .service(request::list_requests)
            .service(request::create_request)
            .service(request::update_request_status)
            .service(request::matching_stocks)
            .service(notification::list_notifications)
            .service(notification::mark_notification)
            .service(audit_log::list_audit_logs)
            .service(distribution_plan::list_plans)
            .service(distribution_plan::create_plan)
            .service(distribution_plan::update_plan_status)
            .service(analytics::summary)
            .service(analytics::stock_trends)
            .service(analytics::distribution)
            .service(export::export_stocks)
            .service(export::export_requests),
    );
}

/// Appends to the audit trail. A failure here never fails the request it documents.
async fn audit(sp: &ServiceProviderScoped, entry: AuditEntry) {
    let service: Arc<dyn AuditService> = sp.provide();
    if let Err(e) = service.record(entry).await {
        tracing::warn!("Cannot write audit log: {e}");
    }
}
