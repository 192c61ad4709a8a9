use std::sync::Arc;

use actix_web::{get, patch, post, web, HttpResponse};
use domain_ledger::{model::vo::NewDistributionPlan, service::DistributionPlanService};
use domain_notice::model::vo::AuditEntry;
use uuid::Uuid;

use super::{audit, dtos::PlanStatusUpdate, error::ApiResult};
use crate::infrastructure::{service_provider::IServiceProvider, ServiceProviderScoped};

#[get("distribution-plans")]
pub async fn list_plans(sp: ServiceProviderScoped) -> ApiResult<HttpResponse> {
    let service: Arc<dyn DistributionPlanService> = sp.provide();
    Ok(HttpResponse::Ok().json(service.list().await?))
}

#[post("distribution-plans")]
pub async fn create_plan(
    sp: ServiceProviderScoped,
    plan: web::Json<NewDistributionPlan>,
) -> ApiResult<HttpResponse> {
    sp.require_user()?;
    let service: Arc<dyn DistributionPlanService> = sp.provide();
    let plan = service.create(plan.into_inner()).await?;
    audit(&sp, AuditEntry::created("distribution_plan", plan.id, &plan)).await;
    Ok(HttpResponse::Created().json(plan))
}

#[patch("distribution-plans/{id}")]
pub async fn update_plan_status(
    sp: ServiceProviderScoped,
    id: web::Path<Uuid>,
    update: web::Json<PlanStatusUpdate>,
) -> ApiResult<HttpResponse> {
    sp.require_user()?;
    let service: Arc<dyn DistributionPlanService> = sp.provide();
    let (old, new) = service.update_status(id.into_inner(), update.status).await?;
    audit(&sp, AuditEntry::updated("distribution_plan", new.id, &old, &new)).await;
    Ok(HttpResponse::Ok().json(new))
}
