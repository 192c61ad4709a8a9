use std::sync::Arc;

use actix_web::{get, patch, post, web, HttpResponse};
use domain_notice::model::vo::AuditEntry;
use domain_request::{
    model::vo::{NewRequest, StatusUpdate},
    service::RequestService,
};
use uuid::Uuid;

use super::{audit, dtos::RequestQuery, error::ApiResult};
use crate::infrastructure::{service_provider::IServiceProvider, ServiceProviderScoped};

#[get("requests")]
pub async fn list_requests(
    sp: ServiceProviderScoped,
    query: web::Query<RequestQuery>,
) -> ApiResult<HttpResponse> {
    let service: Arc<dyn RequestService> = sp.provide();
    Ok(HttpResponse::Ok().json(service.list(query.into_inner().into()).await?))
}

#[get("requests/stats")]
pub async fn request_stats(sp: ServiceProviderScoped) -> ApiResult<HttpResponse> {
    let service: Arc<dyn RequestService> = sp.provide();
    Ok(HttpResponse::Ok().json(service.stats().await?))
}

#[post("requests")]
pub async fn create_request(
    sp: ServiceProviderScoped,
    request: web::Json<NewRequest>,
) -> ApiResult<HttpResponse> {
    sp.require_user()?;
    let service: Arc<dyn RequestService> = sp.provide();
    let request = service.create(request.into_inner()).await?;
    audit(&sp, AuditEntry::created("request", request.id, &request)).await;
    Ok(HttpResponse::Created().json(request))
}

#[patch("requests/{id}")]
pub async fn update_request_status(
    sp: ServiceProviderScoped,
    id: web::Path<Uuid>,
    update: web::Json<StatusUpdate>,
) -> ApiResult<HttpResponse> {
    sp.require_user()?;
    let service: Arc<dyn RequestService> = sp.provide();
    let (old, new) = service.update_status(id.into_inner(), update.into_inner()).await?;
    audit(&sp, AuditEntry::updated("request", new.id, &old, &new)).await;
    Ok(HttpResponse::Ok().json(new))
}

#[get("requests/{id}/matches")]
pub async fn matching_stocks(
    sp: ServiceProviderScoped,
    id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let service: Arc<dyn RequestService> = sp.provide();
    Ok(HttpResponse::Ok().json(service.matching_stocks(id.into_inner()).await?))
}
