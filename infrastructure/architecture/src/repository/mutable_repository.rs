use uuid::Uuid;

/// Write side of a repository.
///
/// Writes may be buffered by the implementation; nothing is guaranteed to be persisted
/// until `save_changed` returns.
#[async_trait::async_trait]
pub trait MutableRepository<T>: Send + Sync
where
    T: Send + Sync + crate::model::AggregateRoot,
{
    /// Update an existing aggregate.
    async fn update(&self, _entity: &T) -> anyhow::Result<()> {
        anyhow::bail!("update is not supported by this repository")
    }

    /// Insert a new aggregate, returning its id.
    async fn insert(&self, _entity: &T) -> anyhow::Result<Uuid> {
        anyhow::bail!("insert is not supported by this repository")
    }

    /// Commit buffered changes. Transactional stores commit here, others return `Ok(true)`.
    async fn save_changed(&self) -> anyhow::Result<bool> {
        Ok(true)
    }
}
