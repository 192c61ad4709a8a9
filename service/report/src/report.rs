use std::{collections::BTreeMap, collections::HashMap, sync::Arc};

use async_trait::async_trait;
use domain_ledger::{
    model::vo::{window_start, HistoryFilter},
    repository::{ResourceRepo, StockHistoryRepo, StockRepo},
};
use domain_notice::repository::AlertRepo;
use domain_report::{
    exception::{ReportException, ReportResult},
    model::{DistributionEntry, StockTrendPoint, Summary, TrendQuery, DEFAULT_TREND_DAYS},
    service::ReportService,
};
use domain_request::{model::entity::RequestStatus, repository::RequestRepo};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct ReportServiceImpl {
    resource_repo: Arc<dyn ResourceRepo>,
    stock_repo: Arc<dyn StockRepo>,
    history_repo: Arc<dyn StockHistoryRepo>,
    request_repo: Arc<dyn RequestRepo>,
    alert_repo: Arc<dyn AlertRepo>,
}

#[async_trait]
impl ReportService for ReportServiceImpl {
    async fn summary(&self) -> ReportResult<Summary> {
        let total_resources = self.resource_repo.get_all_by_type(None).await?.len() as u64;
        let critical_shortages = self
            .stock_repo
            .get_all_with_resource(None)
            .await?
            .iter()
            .filter(|s| s.is_critical())
            .count() as u64;
        let pending_requests = self
            .request_repo
            .count_by_status()
            .await?
            .into_iter()
            .filter(|(status, _)| *status == RequestStatus::Pending)
            .map(|(_, count)| count)
            .sum();
        let active_alerts = self.alert_repo.get_all_filtered(true).await?.len() as u64;
        Ok(Summary {
            total_resources,
            critical_shortages,
            pending_requests,
            active_alerts,
        })
    }

    async fn stock_trends(&self, query: TrendQuery) -> ReportResult<Vec<StockTrendPoint>> {
        let days = query.days.unwrap_or(DEFAULT_TREND_DAYS);
        if days <= 0 {
            return Err(ReportException::InvalidWindow { value: days });
        }
        let names = self
            .resource_repo
            .get_all_by_type(None)
            .await?
            .into_iter()
            .map(|r| (r.id, r.name))
            .collect::<HashMap<_, _>>();
        let mut history = self
            .history_repo
            .get_history(HistoryFilter {
                resource_id: query.resource_id,
                city: query.city,
                since: window_start(days),
            })
            .await?;
        history.reverse();
        Ok(history
            .into_iter()
            .map(|h| StockTrendPoint {
                date: h.created_at,
                resource_name: names.get(&h.resource_id).cloned().unwrap_or_default(),
                city: h.city,
                quantity: h.new_quantity,
            })
            .collect())
    }

    async fn distribution(&self) -> ReportResult<Vec<DistributionEntry>> {
        let mut groups = BTreeMap::<(String, i32), DistributionEntry>::new();
        for detail in self.stock_repo.get_all_with_resource(None).await? {
            let critical = detail.is_critical();
            let resource_type = detail.resource.r#type;
            let entry = groups
                .entry((detail.stock.city.clone(), resource_type as i32))
                .or_insert_with(|| DistributionEntry {
                    city: detail.stock.city.clone(),
                    resource_type,
                    total_quantity: 0,
                    critical_count: 0,
                });
            entry.total_quantity += i64::from(detail.stock.quantity);
            if critical {
                entry.critical_count += 1;
            }
        }
        Ok(groups.into_values().collect())
    }
}
