use uuid::Uuid;

/// Maps opaque session tokens to user ids.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores a new token for the user.
    async fn issue(&self, user_id: Uuid) -> anyhow::Result<String>;
    /// The user owning a live token. Expired tokens resolve to `None` and are dropped.
    async fn resolve(&self, token: &str) -> anyhow::Result<Option<Uuid>>;
    async fn revoke(&self, token: &str) -> anyhow::Result<()>;
}
