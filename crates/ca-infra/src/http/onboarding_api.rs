use std::sync::Arc;

use async_trait::async_trait;
use ca_core::ports::OnboardingApiPort;
use ca_core::{ApiError, OnboardingPayload, OnboardingStatus, UserProfilePatch};
use reqwest::Method;
use serde::Deserialize;

use super::HttpApiClient;

/// `data` of the submission answer: `{ "user": { "id": .., ... } }`.
#[derive(Deserialize)]
struct SubmitData {
    #[serde(default)]
    user: Option<UserProfilePatch>,
}

pub struct HttpOnboardingApi {
    client: Arc<HttpApiClient>,
}

impl HttpOnboardingApi {
    pub fn new(client: Arc<HttpApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OnboardingApiPort for HttpOnboardingApi {
    async fn fetch_status(&self) -> Result<OnboardingStatus, ApiError> {
        self.client.get("/api/onboarding/status").await
    }

    async fn submit(
        &self,
        payload: &OnboardingPayload,
    ) -> Result<Option<UserProfilePatch>, ApiError> {
        let envelope = self
            .client
            .send(Method::POST, "/api/settings/onboarding", Some(payload))
            .await?
            .decode::<SubmitData>()?;
        if !envelope.success {
            return Err(ApiError::Rejected(envelope.message.unwrap_or_default()));
        }
        Ok(envelope.data.and_then(|data| data.user))
    }
}
