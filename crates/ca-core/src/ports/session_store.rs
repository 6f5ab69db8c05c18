//! Session cookie storage port
//!
//! The only client-side session material is the cookie jar the backend set.
//! Implementations are provided by the infrastructure layer (in-memory and
//! file-based).

use async_trait::async_trait;

use crate::session::SessionCookies;

#[async_trait]
pub trait SessionStorePort: Send + Sync {
    /// Load the stored cookies; an empty jar when nothing is stored.
    async fn load(&self) -> anyhow::Result<SessionCookies>;

    /// Replace the stored cookies.
    async fn save(&self, cookies: &SessionCookies) -> anyhow::Result<()>;

    /// Forget every cookie.
    async fn clear(&self) -> anyhow::Result<()>;

    /// Whether any session material is stored.
    async fn has_session(&self) -> anyhow::Result<bool> {
        Ok(!self.load().await?.is_empty())
    }
}
