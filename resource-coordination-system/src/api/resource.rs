use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};
use domain_ledger::{model::vo::NewResource, service::ResourceService};
use domain_notice::model::vo::AuditEntry;
use uuid::Uuid;

use super::{audit, dtos::ResourceQuery, error::ApiResult};
use crate::infrastructure::{service_provider::IServiceProvider, ServiceProviderScoped};

#[get("resources")]
pub async fn list_resources(
    sp: ServiceProviderScoped,
    query: web::Query<ResourceQuery>,
) -> ApiResult<HttpResponse> {
    let service: Arc<dyn ResourceService> = sp.provide();
    Ok(HttpResponse::Ok().json(service.list(query.resource_type).await?))
}

#[get("resources/{id}")]
pub async fn get_resource(sp: ServiceProviderScoped, id: web::Path<Uuid>) -> ApiResult<HttpResponse> {
    let service: Arc<dyn ResourceService> = sp.provide();
    Ok(HttpResponse::Ok().json(service.get(id.into_inner()).await?))
}

#[post("resources")]
pub async fn create_resource(
    sp: ServiceProviderScoped,
    resource: web::Json<NewResource>,
) -> ApiResult<HttpResponse> {
    sp.require_user()?;
    let service: Arc<dyn ResourceService> = sp.provide();
    let resource = service.create(resource.into_inner()).await?;
    audit(&sp, AuditEntry::created("resource", resource.id, &resource)).await;
    Ok(HttpResponse::Created().json(resource))
}
