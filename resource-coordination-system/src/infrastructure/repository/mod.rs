//! Repository traits of every bounded context, implemented on [`OrmRepo`].
mod account;
mod ledger;
mod notice;
mod request;

use std::collections::HashMap;

use database_model::system::prelude::*;
use domain_ledger::model::entity::Resource;
use sea_orm::{prelude::*, DbBackend, QueryTrait, Statement};

use crate::infrastructure::database::OrmRepo;

impl OrmRepo {
    fn backend(&self) -> DbBackend {
        self.db.get_connection().get_database_backend()
    }

    fn statement<Q: QueryTrait>(&self, query: Q) -> Statement {
        query.build(self.backend())
    }

    /// Resources keyed by id, for joining rows loaded on their own.
    async fn resources_by_id(&self, ids: Vec<Uuid>) -> anyhow::Result<HashMap<Uuid, Resource>> {
        ResourceEntity::find()
            .filter(ResourceColumn::Id.is_in(ids))
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(|model| Ok((model.id, Resource::try_from(model)?)))
            .collect()
    }
}
