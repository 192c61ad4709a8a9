use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use database_model::system::prelude::*;
use domain_ledger::{
    model::{entity::StockHistory, vo::HistoryFilter},
    repository::StockHistoryRepo,
};
use sea_orm::{prelude::*, ActiveModelTrait, QueryOrder};

use crate::infrastructure::database::OrmRepo;

impl ReadOnlyRepository<StockHistory> for OrmRepo {}

#[async_trait::async_trait]
impl MutableRepository<StockHistory> for OrmRepo {
    async fn insert(&self, entity: &StockHistory) -> anyhow::Result<Uuid> {
        let active_model =
            StockHistoryActiveModel::from(StockHistoryModel::from(entity.clone())).reset_all();
        self.push(self.statement(StockHistoryEntity::insert(active_model))).await;
        Ok(entity.id)
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<StockHistory> for OrmRepo {}

#[async_trait::async_trait]
impl StockHistoryRepo for OrmRepo {
    async fn get_history(&self, filter: HistoryFilter) -> anyhow::Result<Vec<StockHistory>> {
        let HistoryFilter {
            resource_id,
            city,
            since,
        } = filter;
        let mut select = StockHistoryEntity::find();
        if let Some(resource_id) = resource_id {
            select = select.filter(StockHistoryColumn::ResourceId.eq(resource_id));
        }
        if let Some(city) = city {
            select = select.filter(StockHistoryColumn::City.eq(city));
        }
        if let Some(since) = since {
            select = select.filter(StockHistoryColumn::CreatedAt.gte(since));
        }
        select
            .order_by_desc(StockHistoryColumn::CreatedAt)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(StockHistory::try_from)
            .collect()
    }
}
