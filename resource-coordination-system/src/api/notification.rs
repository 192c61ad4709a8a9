use std::sync::Arc;

use actix_web::{get, patch, web, HttpResponse};
use domain_notice::service::NotificationService;
use uuid::Uuid;

use super::{
    dtos::{NotificationQuery, ReadUpdate},
    error::ApiResult,
};
use crate::infrastructure::{service_provider::IServiceProvider, ServiceProviderScoped};

#[get("notifications")]
pub async fn list_notifications(
    sp: ServiceProviderScoped,
    query: web::Query<NotificationQuery>,
) -> ApiResult<HttpResponse> {
    let service: Arc<dyn NotificationService> = sp.provide();
    Ok(HttpResponse::Ok().json(service.list(query.unread_only()).await?))
}

#[patch("notifications/{id}")]
pub async fn mark_notification(
    sp: ServiceProviderScoped,
    id: web::Path<Uuid>,
    update: web::Json<ReadUpdate>,
) -> ApiResult<HttpResponse> {
    let service: Arc<dyn NotificationService> = sp.provide();
    Ok(HttpResponse::Ok().json(service.mark_read(id.into_inner(), update.read).await?))
}
