use async_trait::async_trait;

use crate::error::ApiError;
use crate::onboarding::{OnboardingPayload, OnboardingStatus};
use crate::user::UserProfilePatch;

#[async_trait]
pub trait OnboardingApiPort: Send + Sync {
    /// `GET /api/onboarding/status`
    async fn fetch_status(&self) -> Result<OnboardingStatus, ApiError>;

    /// `POST /api/settings/onboarding`
    ///
    /// Returns the user fields the backend echoed back, when it sent any.
    async fn submit(
        &self,
        payload: &OnboardingPayload,
    ) -> Result<Option<UserProfilePatch>, ApiError>;
}
