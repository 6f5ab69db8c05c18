use async_trait::async_trait;
use ca_core::ports::SessionStorePort;
use ca_core::SessionCookies;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySessionStore {
    cookies: RwLock<SessionCookies>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStorePort for InMemorySessionStore {
    async fn load(&self) -> anyhow::Result<SessionCookies> {
        Ok(self.cookies.read().await.clone())
    }

    async fn save(&self, cookies: &SessionCookies) -> anyhow::Result<()> {
        *self.cookies.write().await = cookies.clone();
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        *self.cookies.write().await = SessionCookies::new();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_clear() {
        let store = InMemorySessionStore::new();
        assert!(!store.has_session().await.unwrap());

        let mut cookies = SessionCookies::new();
        cookies.insert("access_token_cookie", "jwt");
        store.save(&cookies).await.unwrap();
        assert_eq!(store.load().await.unwrap(), cookies);
        assert!(store.has_session().await.unwrap());

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }
}
