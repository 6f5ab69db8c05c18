use async_trait::async_trait;

use crate::error::ApiError;
use crate::user::{ProfileUpdate, UserProfile};

#[async_trait]
pub trait SettingsApiPort: Send + Sync {
    /// `PUT /api/settings`: returns the profile as stored by the backend.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError>;
}
