use std::sync::Arc;

use architecture::repository::{MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use chrono::Utc;
use domain_ledger::{
    exception::{LedgerException, LedgerResult},
    model::{
        entity::{ChangeReason, Stock, StockHistory},
        vo::{window_start, HistoryFilter, StockChange, StockDetail, StockFilter, StockMovement},
    },
    repository::{ResourceRepo, StockHistoryRepo, StockRepo},
    service::StockLedgerService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

/// Stock writes are an upsert of the `(resource, city)` row plus one history row, both
/// committed by a single `save_changed`.
#[derive(TypedBuilder)]
pub struct StockLedgerServiceImpl {
    resource_repo: Arc<dyn ResourceRepo>,
    stock_repo: Arc<dyn StockRepo>,
    history_repo: Arc<dyn StockHistoryRepo>,
    #[builder(default)]
    user_id: Option<Uuid>,
}

#[async_trait]
impl StockLedgerService for StockLedgerServiceImpl {
    async fn record(&self, change: StockChange) -> LedgerResult<StockMovement> {
        let city = change.city.trim().to_string();
        if city.is_empty() {
            return Err(LedgerException::EmptyField { field: "city" });
        }
        let postal_code = change.postal_code.trim().to_string();
        if postal_code.is_empty() {
            return Err(LedgerException::EmptyField {
                field: "postalCode",
            });
        }
        if change.quantity < 0 {
            return Err(LedgerException::Negative {
                field: "quantity",
                value: change.quantity,
            });
        }
        if self.resource_repo.find_by_id(change.resource_id).await?.is_none() {
            return Err(LedgerException::NoSuchResource {
                id: change.resource_id,
            });
        }

        let reason = change.change_reason.unwrap_or_default();
        let now = Utc::now();
        let restocked_at = (reason == ChangeReason::Restock).then_some(now);
        let previous = self
            .stock_repo
            .find_by_resource_and_city(change.resource_id, city.clone())
            .await?;
        let previous_quantity = previous.as_ref().map(|s| s.quantity);
        let stock = match previous {
            Some(previous) => Stock {
                postal_code,
                quantity: change.quantity,
                last_restock_date: restocked_at.or(previous.last_restock_date),
                updated_by: self.user_id,
                updated_at: now,
                ..previous
            },
            None => Stock {
                id: Uuid::new_v4(),
                resource_id: change.resource_id,
                city: city.clone(),
                postal_code,
                quantity: change.quantity,
                last_restock_date: restocked_at,
                updated_by: self.user_id,
                created_at: now,
                updated_at: now,
            },
        };
        let history = StockHistory {
            id: Uuid::new_v4(),
            resource_id: change.resource_id,
            city,
            previous_quantity,
            new_quantity: change.quantity,
            change_reason: reason,
            updated_by: self.user_id,
            created_at: now,
        };
        self.stock_repo.insert(&stock).await?;
        self.history_repo.insert(&history).await?;
        self.stock_repo.save_changed().await?;
        tracing::debug!(
            "Stock of {} in {} moved from {:?} to {}.",
            stock.resource_id,
            stock.city,
            previous_quantity,
            stock.quantity
        );
        Ok(StockMovement { stock, history })
    }

    async fn list(&self, filter: StockFilter) -> LedgerResult<Vec<StockDetail>> {
        let mut stocks = self.stock_repo.get_all_with_resource(filter.city).await?;
        if filter.critical_only {
            stocks.retain(StockDetail::is_critical);
        }
        Ok(stocks)
    }

    async fn history(
        &self,
        resource_id: Uuid,
        city: Option<String>,
        days: Option<i64>,
    ) -> LedgerResult<Vec<StockHistory>> {
        let since = match days {
            Some(days) if days <= 0 => return Err(LedgerException::InvalidWindow { value: days }),
            Some(days) => window_start(days),
            None => None,
        };
        if self.resource_repo.find_by_id(resource_id).await?.is_none() {
            return Err(LedgerException::NoSuchResource { id: resource_id });
        }
        Ok(self
            .history_repo
            .get_history(HistoryFilter {
                resource_id: Some(resource_id),
                city,
                since,
            })
            .await?)
    }
}
