use std::sync::Arc;

use actix_web::{get, web, HttpResponse};
use domain_report::{model::TrendQuery, service::ReportService};

use super::error::ApiResult;
use crate::infrastructure::{service_provider::IServiceProvider, ServiceProviderScoped};

#[get("analytics/summary")]
pub async fn summary(sp: ServiceProviderScoped) -> ApiResult<HttpResponse> {
    let service: Arc<dyn ReportService> = sp.provide();
    Ok(HttpResponse::Ok().json(service.summary().await?))
}

#[get("analytics/stock-trends")]
pub async fn stock_trends(
    sp: ServiceProviderScoped,
    query: web::Query<TrendQuery>,
) -> ApiResult<HttpResponse> {
    let service: Arc<dyn ReportService> = sp.provide();
    Ok(HttpResponse::Ok().json(service.stock_trends(query.into_inner()).await?))
}

#[get("analytics/distribution")]
pub async fn distribution(sp: ServiceProviderScoped) -> ApiResult<HttpResponse> {
    let service: Arc<dyn ReportService> = sp.provide();
    Ok(HttpResponse::Ok().json(service.distribution().await?))
}
