//! File-based session cookie store
//!
//! Persists the backend's cookies to a JSON file in the application data
//! directory so a later process resumes the same session.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use ca_core::ports::SessionStorePort;
use ca_core::SessionCookies;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

pub const DEFAULT_SESSION_FILE: &str = "session.json";

pub struct FileSessionStore {
    session_file_path: PathBuf,
}

impl FileSessionStore {
    /// Create store with custom file path
    pub fn new(session_file_path: PathBuf) -> Self {
        Self { session_file_path }
    }

    /// Create store with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            session_file_path: base_dir.join(DEFAULT_SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.session_file_path
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.session_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStorePort for FileSessionStore {
    async fn load(&self) -> anyhow::Result<SessionCookies> {
        if !self.session_file_path.exists() {
            return Ok(SessionCookies::new());
        }

        let content = fs::read_to_string(&self.session_file_path).await?;

        if content.trim().is_empty() {
            return Ok(SessionCookies::new());
        }

        let cookies: SessionCookies = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse session file: {}", e))?;

        Ok(cookies)
    }

    async fn save(&self, cookies: &SessionCookies) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(cookies)
            .map_err(|e| anyhow::anyhow!("Failed to serialize session cookies: {}", e))?;

        let mut file = fs::File::create(&self.session_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create session file: {}", e))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write session file: {}", e))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync session file: {}", e))?;

        debug!(path = %self.session_file_path.display(), "session cookies saved");
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        if self.session_file_path.exists() {
            fs::remove_file(&self.session_file_path).await?;
            debug!(path = %self.session_file_path.display(), "session file removed");
        }
        Ok(())
    }
}
