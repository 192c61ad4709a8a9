use uuid::Uuid;

/// Read side of a repository.
///
/// Both lookups bail by default so repositories only implement what their services query.
#[async_trait::async_trait]
pub trait ReadOnlyRepository<T>: Send + Sync
where
    T: Send + Sync + crate::model::AggregateRoot,
{
    /// Look an aggregate up by id.
    async fn find_by_id(&self, _id: Uuid) -> anyhow::Result<Option<T>> {
        anyhow::bail!("find_by_id is not supported by this repository")
    }

    /// Get all aggregates.
    async fn get_all(&self) -> anyhow::Result<Vec<T>> {
        anyhow::bail!("get_all is not supported by this repository")
    }
}
