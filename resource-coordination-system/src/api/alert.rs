use std::sync::Arc;

use actix_web::{get, patch, post, web, HttpResponse};
use domain_notice::{
    model::vo::{AuditEntry, NewAlert},
    service::AlertService,
};
use uuid::Uuid;

use super::{
    audit,
    dtos::{ActiveUpdate, AlertQuery},
    error::ApiResult,
};
use crate::infrastructure::{service_provider::IServiceProvider, ServiceProviderScoped};

#[get("alerts")]
pub async fn list_alerts(
    sp: ServiceProviderScoped,
    query: web::Query<AlertQuery>,
) -> ApiResult<HttpResponse> {
    let service: Arc<dyn AlertService> = sp.provide();
    Ok(HttpResponse::Ok().json(service.list(query.include_inactive()).await?))
}

#[post("alerts")]
pub async fn create_alert(
    sp: ServiceProviderScoped,
    alert: web::Json<NewAlert>,
) -> ApiResult<HttpResponse> {
    sp.require_user()?;
    let service: Arc<dyn AlertService> = sp.provide();
    let alert = service.create(alert.into_inner()).await?;
    audit(&sp, AuditEntry::created("alert", alert.id, &alert)).await;
    Ok(HttpResponse::Created().json(alert))
}

#[patch("alerts/{id}")]
pub async fn set_alert_active(
    sp: ServiceProviderScoped,
    id: web::Path<Uuid>,
    update: web::Json<ActiveUpdate>,
) -> ApiResult<HttpResponse> {
    sp.require_user()?;
    let service: Arc<dyn AlertService> = sp.provide();
    let (old, new) = service.set_active(id.into_inner(), update.active).await?;
    audit(&sp, AuditEntry::updated("alert", new.id, &old, &new)).await;
    Ok(HttpResponse::Ok().json(new))
}
