use std::collections::HashMap;

use anyhow::anyhow;
use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use database_model::system::prelude::*;
use domain_account::model::entity::User;
use domain_request::{
    model::{
        entity::{Request, RequestStatus},
        vo::{RequestDetail, RequestFilter},
    },
    repository::RequestRepo,
};
use num_traits::FromPrimitive;
use sea_orm::{prelude::*, ActiveModelTrait, QueryOrder, QuerySelect};

use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl ReadOnlyRepository<Request> for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Request>> {
        RequestEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(Request::try_from)
            .transpose()
    }
}

#[async_trait::async_trait]
impl MutableRepository<Request> for OrmRepo {
    async fn insert(&self, entity: &Request) -> anyhow::Result<Uuid> {
        let active_model = RequestActiveModel::from(RequestModel::from(entity.clone())).reset_all();
        self.push(self.statement(RequestEntity::insert(active_model))).await;
        Ok(entity.id)
    }

    async fn update(&self, entity: &Request) -> anyhow::Result<()> {
        let mut active_model: RequestActiveModel = RequestModel::from(entity.clone()).into();
        active_model.status.reset();
        active_model.approved_by.reset();
        active_model.estimated_delivery_date.reset();
        active_model.notes.reset();
        active_model.updated_at.reset();
        self.push(self.statement(RequestEntity::update(active_model))).await;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<Request> for OrmRepo {}

#[async_trait::async_trait]
impl RequestRepo for OrmRepo {
    async fn get_all_detailed(&self, filter: RequestFilter) -> anyhow::Result<Vec<RequestDetail>> {
        let mut select = RequestEntity::find();
        if let Some(status) = filter.status {
            select = select.filter(RequestColumn::Status.eq(status as i32));
        }
        if let Some(user_id) = filter.user_id {
            select = select.filter(RequestColumn::UserId.eq(user_id));
        }
        let requests = select
            .order_by_desc(RequestColumn::CreatedAt)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(Request::try_from)
            .collect::<anyhow::Result<Vec<_>>>()?;

        let resources = self
            .resources_by_id(requests.iter().map(|r| r.resource_id).collect())
            .await?;
        let users = UserEntity::find()
            .filter(UserColumn::Id.is_in(requests.iter().map(|r| r.user_id).collect::<Vec<_>>()))
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(|model| Ok((model.id, User::try_from(model)?)))
            .collect::<anyhow::Result<HashMap<_, _>>>()?;

        Ok(requests
            .into_iter()
            .map(|request| RequestDetail {
                resource: resources.get(&request.resource_id).cloned(),
                user: users.get(&request.user_id).cloned(),
                request,
            })
            .collect())
    }

    async fn count_by_status(&self) -> anyhow::Result<Vec<(RequestStatus, u64)>> {
        RequestEntity::find()
            .select_only()
            .column(RequestColumn::Status)
            .column_as(Expr::col(RequestColumn::Id).count(), "count")
            .group_by(RequestColumn::Status)
            .into_tuple::<(i32, i64)>()
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(|(status, count)| {
                let status = RequestStatus::from_i32(status)
                    .ok_or(anyhow!("Wrong request status: {status}."))?;
                Ok((status, count as u64))
            })
            .collect()
    }
}
