use std::sync::Arc;

use actix_web::{get, web, HttpResponse};
use domain_notice::service::AuditService;

use super::{dtos::AuditQuery, error::ApiResult};
use crate::infrastructure::{service_provider::IServiceProvider, ServiceProviderScoped};

#[get("audit-logs")]
pub async fn list_audit_logs(
    sp: ServiceProviderScoped,
    query: web::Query<AuditQuery>,
) -> ApiResult<HttpResponse> {
    sp.require_user()?;
    let AuditQuery { entity, days } = query.into_inner();
    let service: Arc<dyn AuditService> = sp.provide();
    Ok(HttpResponse::Ok().json(service.list(entity, days).await?))
}
