use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};
use domain_ledger::{
    model::vo::{StockChange, StockFilter},
    service::StockLedgerService,
};
use domain_notice::model::vo::AuditEntry;
use serde_json::json;
use uuid::Uuid;

use super::{
    audit,
    dtos::{HistoryQuery, StockQuery},
    error::ApiResult,
};
use crate::infrastructure::{service_provider::IServiceProvider, ServiceProviderScoped};

#[get("stocks")]
pub async fn list_stocks(
    sp: ServiceProviderScoped,
    query: web::Query<StockQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let critical_only = query.critical_only();
    let service: Arc<dyn StockLedgerService> = sp.provide();
    let stocks = service
        .list(StockFilter {
            city: query.city,
            critical_only,
        })
        .await?;
    Ok(HttpResponse::Ok().json(stocks))
}

#[post("stocks")]
pub async fn record_stock(
    sp: ServiceProviderScoped,
    change: web::Json<StockChange>,
) -> ApiResult<HttpResponse> {
    sp.require_user()?;
    let service: Arc<dyn StockLedgerService> = sp.provide();
    let movement = service.record(change.into_inner()).await?;
    let stock = movement.stock;
    let entry = match movement.history.previous_quantity {
        None => AuditEntry::created("stock", stock.id, &stock),
        Some(previous) => {
            AuditEntry::updated("stock", stock.id, &json!({ "quantity": previous }), &stock)
        }
    };
    audit(&sp, entry).await;
    Ok(HttpResponse::Ok().json(stock))
}

#[get("stocks/{resource_id}/history")]
pub async fn stock_history(
    sp: ServiceProviderScoped,
    resource_id: web::Path<Uuid>,
    query: web::Query<HistoryQuery>,
) -> ApiResult<HttpResponse> {
    let HistoryQuery { city, days } = query.into_inner();
    let service: Arc<dyn StockLedgerService> = sp.provide();
    let history = service.history(resource_id.into_inner(), city, days).await?;
    Ok(HttpResponse::Ok().json(history))
}
