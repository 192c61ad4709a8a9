use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::{
    model::{
        entity::{Request, RequestStatus},
        vo::{RequestDetail, RequestFilter},
    },
    repository::RequestRepo,
};

mock! {
    pub RequestRepo {}
    #[async_trait]
    impl RequestRepo for RequestRepo {
        async fn get_all_detailed(&self, filter: RequestFilter) -> anyhow::Result<Vec<RequestDetail>>;
        async fn count_by_status(&self) -> anyhow::Result<Vec<(RequestStatus, u64)>>;
    }
    impl DBRepository<Request> for RequestRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Request> for RequestRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Request>>;
    }
    #[async_trait]
    impl MutableRepository<Request> for RequestRepo {
        async fn insert(&self, entity: &Request) -> anyhow::Result<Uuid>;
        async fn update(&self, entity: &Request) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}
