//! Use case for submitting the onboarding questionnaire
//! 提交入门问卷的用例

use std::sync::Arc;

use ca_core::ports::{NavigatorPort, NotifierPort, OnboardingApiPort};
use ca_core::{ApiError, Notification, OnboardingPayload, Route};
use tracing::{info, info_span, warn, Instrument};

use super::OnboardingGate;
use crate::usecases::auth::AuthOrchestrator;

#[derive(Debug, thiserror::Error)]
pub enum SubmitOnboardingError {
    #[error("invalid questionnaire: {0}")]
    Invalid(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Submits the questionnaire, then sends the user to the dashboard.
///
/// On success any user fields echoed by the backend are merged into the
/// cached profile and the gate's cached status is dropped so the next
/// evaluation sees the completed flag.
pub struct SubmitOnboarding {
    onboarding_api: Arc<dyn OnboardingApiPort>,
    auth: Arc<AuthOrchestrator>,
    gate: Arc<OnboardingGate>,
    navigator: Arc<dyn NavigatorPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl SubmitOnboarding {
    pub fn new(
        onboarding_api: Arc<dyn OnboardingApiPort>,
        auth: Arc<AuthOrchestrator>,
        gate: Arc<OnboardingGate>,
        navigator: Arc<dyn NavigatorPort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            onboarding_api,
            auth,
            gate,
            navigator,
            notifier,
        }
    }

    pub async fn execute(&self, payload: OnboardingPayload) -> Result<(), SubmitOnboardingError> {
        let span = info_span!("usecase.submit_onboarding.execute");
        async {
            let mut payload = payload;
            payload.recompute_bmi();
            if let Err(reason) = payload.validate() {
                self.notifier.notify(Notification::error("Error", reason.clone()));
                return Err(SubmitOnboardingError::Invalid(reason));
            }

            match self.onboarding_api.submit(&payload).await {
                Ok(echoed) => {
                    info!(bmi = payload.personal_data.bmi, "onboarding submitted");
                    self.notifier.notify(Notification::info(
                        "¡Perfil completado!",
                        "Gracias por completar tu perfil de salud. Esto nos ayudará a personalizar tu experiencia.",
                    ));
                    if let Some(patch) = echoed.filter(|p| !p.is_empty()) {
                        self.auth.update_user_info(patch).await;
                    }
                    self.gate.invalidate().await;
                    if let Err(err) = self.navigator.navigate(Route::Dashboard).await {
                        warn!(error = %err, "navigation after onboarding failed");
                    }
                    Ok(())
                }
                Err(err) => {
                    warn!(error = %err, "onboarding submission failed");
                    self.notifier.notify(Notification::error(
                        "Error",
                        "No pudimos guardar tu información. Por favor, intenta nuevamente.",
                    ));
                    Err(err.into())
                }
            }
        }
        .instrument(span)
        .await
    }
}
