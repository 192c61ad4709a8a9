use std::sync::Arc;

use actix_web::{get, http::header, web, HttpResponse};
use domain_report::{model::ExportFile, service::ExportService};

use super::{dtos::ExportQuery, error::ApiResult};
use crate::infrastructure::{service_provider::IServiceProvider, ServiceProviderScoped};

fn attachment(file: ExportFile) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(file.content_type)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", file.file_name),
        ))
        .body(file.body)
}

#[get("export/stocks")]
pub async fn export_stocks(
    sp: ServiceProviderScoped,
    query: web::Query<ExportQuery>,
) -> ApiResult<HttpResponse> {
    let service: Arc<dyn ExportService> = sp.provide();
    Ok(attachment(service.export_stocks(query.format).await?))
}

#[get("export/requests")]
pub async fn export_requests(
    sp: ServiceProviderScoped,
    query: web::Query<ExportQuery>,
) -> ApiResult<HttpResponse> {
    let service: Arc<dyn ExportService> = sp.provide();
    Ok(attachment(service.export_requests(query.format).await?))
}
