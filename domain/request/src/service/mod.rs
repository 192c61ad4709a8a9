use async_trait::async_trait;
use domain_ledger::model::vo::StockDetail;
use uuid::Uuid;

use crate::{
    exception::RequestResult,
    model::{
        entity::Request,
        vo::{NewRequest, RequestDetail, RequestFilter, RequestStats, StatusUpdate},
    },
};

#[async_trait]
pub trait RequestService: Send + Sync {
    /// Files a request for the acting user, always starting as pending.
    async fn create(&self, request: NewRequest) -> RequestResult<Request>;
    async fn list(&self, filter: RequestFilter) -> RequestResult<Vec<RequestDetail>>;
    async fn get(&self, id: Uuid) -> RequestResult<Request>;
    /// Moves a request to a new status. Returns the request before and after the change.
    async fn update_status(
        &self,
        id: Uuid,
        update: StatusUpdate,
    ) -> RequestResult<(Request, Request)>;
    /// Stocks of the requested resource able to cover the whole quantity, in any city.
    async fn matching_stocks(&self, id: Uuid) -> RequestResult<Vec<StockDetail>>;
    async fn stats(&self) -> RequestResult<RequestStats>;
}
