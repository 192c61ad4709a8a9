use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use domain_account::repository::SessionStore;
use rand::RngCore;
use uuid::Uuid;

const TOKEN_BYTES: usize = 32;

struct SessionEntry {
    user_id: Uuid,
    expires_at: DateTime<Utc>,
}

/// Sessions held in process memory. They are lost on restart.
pub struct MemorySessionStore {
    sessions: DashMap<String, SessionEntry>,
    ttl: Duration,
}

impl MemorySessionStore {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    /// Drops every expired session.
    pub fn purge_expired(&self) {
        let now = Utc::now();
        self.sessions.retain(|_, entry| entry.expires_at > now);
    }
}

fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[async_trait::async_trait]
impl SessionStore for MemorySessionStore {
    async fn issue(&self, user_id: Uuid) -> anyhow::Result<String> {
        let token = generate_token();
        self.sessions.insert(
            token.clone(),
            SessionEntry {
                user_id,
                expires_at: Utc::now() + self.ttl,
            },
        );
        Ok(token)
    }

    async fn resolve(&self, token: &str) -> anyhow::Result<Option<Uuid>> {
        let Some(entry) = self.sessions.get(token) else {
            return Ok(None);
        };
        if entry.expires_at > Utc::now() {
            return Ok(Some(entry.user_id));
        }
        drop(entry);
        self.sessions.remove(token);
        Ok(None)
    }

    async fn revoke(&self, token: &str) -> anyhow::Result<()> {
        self.sessions.remove(token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn issued_token_resolves_until_revoked() {
        let store = MemorySessionStore::new(60);
        let user_id = Uuid::new_v4();
        let token = store.issue(user_id).await.unwrap();
        assert_eq!(token.len(), TOKEN_BYTES * 2);
        assert_eq!(store.resolve(&token).await.unwrap(), Some(user_id));

        store.revoke(&token).await.unwrap();
        assert_eq!(store.resolve(&token).await.unwrap(), None);
    }

    #[tokio::test]
    async fn expired_token_is_dropped() {
        let store = MemorySessionStore::new(-1);
        let token = store.issue(Uuid::new_v4()).await.unwrap();
        assert_eq!(store.resolve(&token).await.unwrap(), None);
        assert!(store.sessions.is_empty());
    }

    #[tokio::test]
    async fn tokens_are_unique() {
        let store = MemorySessionStore::new(60);
        let user_id = Uuid::new_v4();
        let a = store.issue(user_id).await.unwrap();
        let b = store.issue(user_id).await.unwrap();
        assert_ne!(a, b);
        store.purge_expired();
        assert_eq!(store.sessions.len(), 2);
    }
}
