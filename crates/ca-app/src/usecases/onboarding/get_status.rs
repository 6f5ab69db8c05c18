use std::sync::Arc;

use ca_core::ports::OnboardingApiPort;
use ca_core::OnboardingStatus;
use tracing::{info_span, warn, Instrument};

/// Use case for fetching the onboarding completion status.
///
/// Fail-safe: any failure reads as "not completed", which sends the user to
/// the questionnaire rather than past it.
pub struct GetOnboardingStatus {
    onboarding_api: Arc<dyn OnboardingApiPort>,
}

impl GetOnboardingStatus {
    pub fn new(onboarding_api: Arc<dyn OnboardingApiPort>) -> Self {
        Self { onboarding_api }
    }

    pub async fn execute(&self) -> OnboardingStatus {
        let span = info_span!("usecase.get_onboarding_status.execute");
        async {
            match self.onboarding_api.fetch_status().await {
                Ok(status) => status,
                Err(err) => {
                    warn!(error = %err, "onboarding status unavailable, assuming not completed");
                    OnboardingStatus::not_completed()
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ca_core::{ApiError, OnboardingPayload, UserProfilePatch};

    struct FixedOnboardingApi {
        status: Result<OnboardingStatus, ApiError>,
    }

    #[async_trait]
    impl OnboardingApiPort for FixedOnboardingApi {
        async fn fetch_status(&self) -> Result<OnboardingStatus, ApiError> {
            self.status.clone()
        }

        async fn submit(
            &self,
            _payload: &OnboardingPayload,
        ) -> Result<Option<UserProfilePatch>, ApiError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn fetch_failure_reads_as_not_completed() {
        let uc = GetOnboardingStatus::new(Arc::new(FixedOnboardingApi {
            status: Err(ApiError::Status {
                status: 500,
                message: "Error al verificar estado de onboarding".into(),
            }),
        }));

        assert_eq!(uc.execute().await, OnboardingStatus::not_completed());
    }

    #[tokio::test]
    async fn passes_through_backend_status() {
        let uc = GetOnboardingStatus::new(Arc::new(FixedOnboardingApi {
            status: Ok(OnboardingStatus {
                completed: true,
                data: None,
            }),
        }));

        assert!(uc.execute().await.completed);
    }
}
