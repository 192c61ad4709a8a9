use anyhow::anyhow;
use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use database_model::system::prelude::*;
use domain_ledger::{
    model::{
        entity::{Resource, Stock},
        vo::StockDetail,
    },
    repository::StockRepo,
};
use sea_orm::{prelude::*, sea_query::OnConflict, ActiveModelTrait, QueryOrder, Select};

use crate::infrastructure::database::OrmRepo;

impl OrmRepo {
    async fn stock_details(&self, select: Select<StockEntity>) -> anyhow::Result<Vec<StockDetail>> {
        select
            .find_also_related(ResourceEntity)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(|(stock, resource)| {
                let resource = resource
                    .ok_or(anyhow!("Stock {} refers to a missing resource.", stock.id))?;
                Ok(StockDetail {
                    stock: stock.into(),
                    resource: Resource::try_from(resource)?,
                })
            })
            .collect()
    }
}

impl ReadOnlyRepository<Stock> for OrmRepo {}

#[async_trait::async_trait]
impl MutableRepository<Stock> for OrmRepo {
    /// Upserts on `(resource_id, city)`. The id and creation time of an existing row are kept.
    async fn insert(&self, entity: &Stock) -> anyhow::Result<Uuid> {
        let active_model = StockActiveModel::from(StockModel::from(entity.clone())).reset_all();
        let insert = StockEntity::insert(active_model).on_conflict(
            OnConflict::columns([StockColumn::ResourceId, StockColumn::City])
                .update_columns([
                    StockColumn::PostalCode,
                    StockColumn::Quantity,
                    StockColumn::LastRestockDate,
                    StockColumn::UpdatedBy,
                    StockColumn::UpdatedAt,
                ])
                .to_owned(),
        );
        self.push(self.statement(insert)).await;
        Ok(entity.id)
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<Stock> for OrmRepo {}

#[async_trait::async_trait]
impl StockRepo for OrmRepo {
    async fn find_by_resource_and_city(
        &self,
        resource_id: Uuid,
        city: String,
    ) -> anyhow::Result<Option<Stock>> {
        Ok(StockEntity::find()
            .filter(StockColumn::ResourceId.eq(resource_id))
            .filter(StockColumn::City.eq(city))
            .one(self.db.get_connection())
            .await?
            .map(Stock::from))
    }

    async fn get_all_with_resource(&self, city: Option<String>) -> anyhow::Result<Vec<StockDetail>> {
        let mut select = StockEntity::find();
        if let Some(city) = city {
            select = select.filter(StockColumn::City.eq(city));
        }
        self.stock_details(select.order_by_asc(StockColumn::CreatedAt)).await
    }

    async fn get_by_resource_with_min_quantity(
        &self,
        resource_id: Uuid,
        min_quantity: i32,
    ) -> anyhow::Result<Vec<StockDetail>> {
        let select = StockEntity::find()
            .filter(StockColumn::ResourceId.eq(resource_id))
            .filter(StockColumn::Quantity.gte(min_quantity))
            .order_by_desc(StockColumn::Quantity);
        self.stock_details(select).await
    }
}
