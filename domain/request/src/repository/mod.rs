use architecture::repository::DBRepository;

use crate::model::{
    entity::{Request, RequestStatus},
    vo::{RequestDetail, RequestFilter},
};

#[async_trait::async_trait]
pub trait RequestRepo: DBRepository<Request> + Send + Sync {
    /// Requests joined with resource and requester, newest first.
    async fn get_all_detailed(&self, filter: RequestFilter) -> anyhow::Result<Vec<RequestDetail>>;
    /// Number of requests per status. Statuses without requests may be missing.
    async fn count_by_status(&self) -> anyhow::Result<Vec<(RequestStatus, u64)>>;
}
