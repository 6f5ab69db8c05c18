use anyhow::Result;

use crate::routing::Route;

/// Moves the shell to another route.
#[async_trait::async_trait]
pub trait NavigatorPort: Send + Sync {
    async fn navigate(&self, route: Route) -> Result<()>;
}
