use std::sync::Arc;

use actix_web::{get, put, web, HttpResponse};
use domain_account::{model::vo::ProfileUpdate, service::AccountService};

use super::error::ApiResult;
use crate::infrastructure::{service_provider::IServiceProvider, ServiceProviderScoped};

#[get("user")]
pub async fn current_user(sp: ServiceProviderScoped) -> ApiResult<HttpResponse> {
    let service: Arc<dyn AccountService> = sp.provide();
    Ok(HttpResponse::Ok().json(service.current_user().await?))
}

#[put("user")]
pub async fn update_profile(
    sp: ServiceProviderScoped,
    update: web::Json<ProfileUpdate>,
) -> ApiResult<HttpResponse> {
    let service: Arc<dyn AccountService> = sp.provide();
    Ok(HttpResponse::Ok().json(service.update_profile(update.into_inner()).await?))
}

#[get("users")]
pub async fn list_users(sp: ServiceProviderScoped) -> ApiResult<HttpResponse> {
    sp.require_user()?;
    let service: Arc<dyn AccountService> = sp.provide();
    Ok(HttpResponse::Ok().json(service.list_users().await?))
}
